//! Book endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        author::Author,
        book::{Book, BookDetails, CreateBook, UpdateBook},
        edition::EditionShort,
    },
    AppState,
};

use super::{AppJson, AppPath, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book details by ID, including authors and editions
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<BookDetails>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Partially update a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(data): ValidatedJson<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book and its editions
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the authors of a book
#[utoipa::path(
    get,
    path = "/books/{id}/authors",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Authors of the book", body = Vec<Author>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_book_authors(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.books.authors(id).await?;
    Ok(Json(authors))
}

/// Attach one author to a book
#[utoipa::path(
    post,
    path = "/books/{id}/authors/{author_id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID"),
        ("author_id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 201, description = "Author attached"),
        (status = 404, description = "Book or author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_author_to_book(
    State(state): State<AppState>,
    AppPath((id, author_id)): AppPath<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.books.add_author(id, author_id).await?;
    Ok(StatusCode::CREATED)
}

/// Detach one author from a book
#[utoipa::path(
    delete,
    path = "/books/{id}/authors/{author_id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID"),
        ("author_id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author detached"),
        (status = 404, description = "Book or author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_author_from_book(
    State(state): State<AppState>,
    AppPath((id, author_id)): AppPath<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.services.books.remove_author(id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach several authors at once; all ids must resolve or nothing is attached
#[utoipa::path(
    post,
    path = "/books/{id}/authors",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body(content = Vec<String>, description = "Author IDs as decimal strings"),
    responses(
        (status = 201, description = "Authors attached"),
        (status = 400, description = "Malformed author ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_authors_to_book(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(author_ids): AppJson<Vec<String>>,
) -> AppResult<StatusCode> {
    state.services.books.add_authors(id, &author_ids).await?;
    Ok(StatusCode::CREATED)
}

/// List the editions of a book
#[utoipa::path(
    get,
    path = "/books/{id}/editions",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Editions of the book", body = Vec<EditionShort>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_book_editions(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Vec<EditionShort>>> {
    let editions = state.services.books.editions(id).await?;
    Ok(Json(editions))
}
