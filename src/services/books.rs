//! Book service: book CRUD and management of a book's author set

use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookDetails, CreateBook, UpdateBook},
        book_author::BookAuthor,
        edition::EditionShort,
    },
    repository::{authors, book_authors, books, editions, Repository},
};

use super::not_found;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book (id, title, genre)
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        books::list(&self.repository.pool).await
    }

    /// Get a book together with its authors and editions
    pub async fn get(&self, id: i64) -> AppResult<BookDetails> {
        let pool = &self.repository.pool;
        let book = books::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Book"))?;
        let authors = authors::list_by_book(pool, id).await?;
        let editions = editions::list_by_book(pool, id).await?;
        Ok(BookDetails::new(book, authors, editions))
    }

    /// Create a book with no authors and no editions
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let book = books::create(&mut *tx, data)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Replace the fields supplied in `data`, leaving the others untouched
    pub async fn update(&self, id: i64, data: UpdateBook) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let mut book = books::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        data.apply(&mut book);

        let book = books::save(&mut *tx, &book)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;
        Ok(book)
    }

    /// Delete a book along with its editions and author links.
    /// The authors themselves are kept.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        books::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let unlinked = book_authors::detach_book(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        let removed_editions = editions::delete_by_book(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        books::delete(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!(
            "Deleted book id={} ({} editions, {} author links)",
            id,
            removed_editions,
            unlinked
        );
        Ok(())
    }

    /// Authors attached to a book
    pub async fn authors(&self, book_id: i64) -> AppResult<Vec<Author>> {
        let pool = &self.repository.pool;
        books::find_by_id(pool, book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;
        authors::list_by_book(pool, book_id).await
    }

    /// Editions owned by a book
    pub async fn editions(&self, book_id: i64) -> AppResult<Vec<EditionShort>> {
        let pool = &self.repository.pool;
        books::find_by_id(pool, book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;
        editions::list_by_book(pool, book_id).await
    }

    /// Attach an author to a book. Attaching twice keeps a single link.
    pub async fn add_author(&self, book_id: i64, author_id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        authors::find_by_id(&mut *tx, author_id)
            .await?
            .ok_or_else(|| not_found("Author"))?;
        books::find_by_id(&mut *tx, book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let added = book_authors::attach(&mut *tx, BookAuthor { book_id, author_id })
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        if added {
            tracing::debug!("Linked author {} to book {}", author_id, book_id);
        }
        Ok(())
    }

    /// Detach an author from a book. Detaching an author that is not linked
    /// succeeds without changes.
    pub async fn remove_author(&self, book_id: i64, author_id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        authors::find_by_id(&mut *tx, author_id)
            .await?
            .ok_or_else(|| not_found("Author"))?;
        books::find_by_id(&mut *tx, book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let removed = book_authors::detach(&mut *tx, BookAuthor { book_id, author_id })
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        if removed {
            tracing::debug!("Unlinked author {} from book {}", author_id, book_id);
        }
        Ok(())
    }

    /// Attach several authors, given as decimal id strings, in one go.
    ///
    /// Every id is parsed and resolved before anything is written; a malformed
    /// or unknown id fails the whole batch and the author set is left as it was.
    pub async fn add_authors(&self, book_id: i64, author_ids: &[String]) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        books::find_by_id(&mut *tx, book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let mut resolved = BTreeSet::new();
        for raw in author_ids {
            let author_id = parse_author_id(raw)?;
            let author = authors::find_by_id(&mut *tx, author_id)
                .await?
                .ok_or_else(|| not_found("Author"))?;
            resolved.insert(author.id);
        }

        for author_id in &resolved {
            book_authors::attach(
                &mut *tx,
                BookAuthor {
                    book_id,
                    author_id: *author_id,
                },
            )
            .await
            .map_err(AppError::operation_failed)?;
        }
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::debug!("Linked {} authors to book {}", resolved.len(), book_id);
        Ok(())
    }
}

fn parse_author_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| AppError::OperationFailed(format!("Invalid author id {:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DatabaseConfig,
        models::{author::CreateAuthor, edition::CreateEdition},
        services::{test_services, Services},
    };

    async fn create_book(services: &Services, title: &str, genre: &str) -> Book {
        services
            .books
            .create(&CreateBook {
                title: title.to_string(),
                genre: genre.to_string(),
            })
            .await
            .unwrap()
    }

    async fn create_author(services: &Services, name: &str) -> Author {
        services
            .authors
            .create(&CreateAuthor {
                name: name.to_string(),
                nationality: "American".to_string(),
            })
            .await
            .unwrap()
    }

    async fn author_ids(services: &Services, book_id: i64) -> Vec<i64> {
        services
            .books
            .authors(book_id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect()
    }

    #[tokio::test]
    async fn test_create_then_get_has_no_relations() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;

        let details = services.books.get(book.id).await.unwrap();
        assert_eq!(details.title, "Dune");
        assert_eq!(details.genre, "SciFi");
        assert!(details.authors.is_empty());
        assert!(details.editions.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_books_in_id_order() {
        let services = test_services().await;
        let first = create_book(&services, "Dune", "SciFi").await;
        let second = create_book(&services, "Emma", "Novel").await;

        let books = services.books.list().await.unwrap();
        assert_eq!(books, vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let services = test_services().await;
        let err = services.books.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Book Not Found"));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_field() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;

        let updated = services
            .books
            .update(
                book.id,
                UpdateBook {
                    title: None,
                    genre: Some("Space opera".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.genre, "Space opera");

        let updated = services
            .books
            .update(
                book.id,
                UpdateBook {
                    title: Some("Dune Messiah".to_string()),
                    genre: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.genre, "Space opera");
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let services = test_services().await;
        let err = services
            .books
            .update(7, UpdateBook::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_on_file_database() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("catalog.db").display()),
            max_connections: 10,
            min_connections: 1,
        };
        let pool = crate::db::connect(&config).await.unwrap();
        let services = Services::new(Repository::new(pool));

        let book_id = create_book(&services, "Dune", "SciFi").await.id;
        let author_id = create_author(&services, "Frank Herbert").await.id;

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..40 {
            let services = services.clone();
            tasks.spawn(async move {
                if i % 4 == 0 {
                    services.books.add_author(book_id, author_id).await?;
                }
                services
                    .books
                    .update(
                        book_id,
                        UpdateBook {
                            title: None,
                            genre: Some(format!("Genre {}", i)),
                        },
                    )
                    .await
                    .map(|_| ())
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }

        let details = services.books.get(book_id).await.unwrap();
        assert_eq!(details.title, "Dune");
        assert!(details.genre.starts_with("Genre "));
        assert_eq!(details.authors.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;

        services.books.delete(book.id).await.unwrap();

        assert!(matches!(
            services.books.get(book.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            services.books.delete(book.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_book_removes_editions_but_keeps_authors() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;
        let author = create_author(&services, "Frank Herbert").await;
        services.books.add_author(book.id, author.id).await.unwrap();
        let edition = services
            .editions
            .create(&CreateEdition {
                isbn: "978-0441013593".to_string(),
                book_id: book.id,
            })
            .await
            .unwrap();

        services.books.delete(book.id).await.unwrap();

        assert!(matches!(
            services.editions.get(edition.id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(services.authors.get(author.id).await.unwrap(), author);
        assert!(services.authors.books(author.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_author_is_idempotent() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;
        let author = create_author(&services, "Frank Herbert").await;

        services.books.add_author(book.id, author.id).await.unwrap();
        services.books.add_author(book.id, author.id).await.unwrap();

        assert_eq!(author_ids(&services, book.id).await, vec![author.id]);
    }

    #[tokio::test]
    async fn test_add_author_requires_both_entities() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;
        let author = create_author(&services, "Frank Herbert").await;

        let err = services.books.add_author(book.id, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Author Not Found"));

        let err = services.books.add_author(999, author.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Book Not Found"));
    }

    #[tokio::test]
    async fn test_remove_author() {
        let services = test_services().await;
        let book = create_book(&services, "Good Omens", "Fantasy").await;
        let pratchett = create_author(&services, "Terry Pratchett").await;
        let gaiman = create_author(&services, "Neil Gaiman").await;
        services.books.add_author(book.id, pratchett.id).await.unwrap();
        services.books.add_author(book.id, gaiman.id).await.unwrap();

        services.books.remove_author(book.id, pratchett.id).await.unwrap();

        assert_eq!(author_ids(&services, book.id).await, vec![gaiman.id]);
        // the author entity survives
        assert!(services.authors.get(pratchett.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_unlinked_author_is_noop() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;
        let author = create_author(&services, "Frank Herbert").await;

        services.books.remove_author(book.id, author.id).await.unwrap();

        assert!(author_ids(&services, book.id).await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_author_requires_both_entities() {
        let services = test_services().await;
        let book = create_book(&services, "Dune", "SciFi").await;

        let err = services.books.remove_author(book.id, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Author Not Found"));

        let author = create_author(&services, "Frank Herbert").await;
        let err = services.books.remove_author(99, author.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Book Not Found"));
    }

    #[tokio::test]
    async fn test_add_authors_batch() {
        let services = test_services().await;
        let book = create_book(&services, "Good Omens", "Fantasy").await;
        let a = create_author(&services, "Terry Pratchett").await;
        let b = create_author(&services, "Neil Gaiman").await;

        services
            .books
            .add_authors(book.id, &[a.id.to_string(), b.id.to_string(), a.id.to_string()])
            .await
            .unwrap();

        assert_eq!(author_ids(&services, book.id).await, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_add_authors_unknown_id_aborts_batch() {
        let services = test_services().await;
        let book = create_book(&services, "Good Omens", "Fantasy").await;
        let a = create_author(&services, "Terry Pratchett").await;

        let err = services
            .books
            .add_authors(book.id, &[a.id.to_string(), "999999".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Author Not Found"));
        assert!(author_ids(&services, book.id).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_authors_malformed_id_aborts_batch() {
        let services = test_services().await;
        let book = create_book(&services, "Good Omens", "Fantasy").await;
        let a = create_author(&services, "Terry Pratchett").await;

        let err = services
            .books
            .add_authors(book.id, &[a.id.to_string(), "two".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::OperationFailed(_)));
        assert!(author_ids(&services, book.id).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_authors_missing_book() {
        let services = test_services().await;
        let err = services
            .books
            .add_authors(3, &["1".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Book Not Found"));
    }

    #[tokio::test]
    async fn test_listings_for_missing_book() {
        let services = test_services().await;
        assert!(matches!(
            services.books.authors(11).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            services.books.editions(11).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_author_id() {
        assert_eq!(parse_author_id("12").unwrap(), 12);
        assert!(matches!(
            parse_author_id(" 12"),
            Err(AppError::OperationFailed(_))
        ));
        assert!(matches!(
            parse_author_id(""),
            Err(AppError::OperationFailed(_))
        ));
    }
}
