//! Edition endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::edition::{CreateEdition, EditionDetails, EditionShort, UpdateEdition},
    AppState,
};

use super::{AppPath, ValidatedJson};

/// List all editions
#[utoipa::path(
    get,
    path = "/editions",
    tag = "editions",
    responses(
        (status = 200, description = "List of editions", body = Vec<EditionShort>)
    )
)]
pub async fn list_editions(State(state): State<AppState>) -> AppResult<Json<Vec<EditionShort>>> {
    let editions = state.services.editions.list().await?;
    Ok(Json(editions))
}

/// Get an edition with its book
#[utoipa::path(
    get,
    path = "/editions/{id}",
    tag = "editions",
    params(("id" = i64, Path, description = "Edition ID")),
    responses(
        (status = 200, description = "Edition details", body = EditionDetails),
        (status = 404, description = "Edition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_edition(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<EditionDetails>> {
    let edition = state.services.editions.get(id).await?;
    Ok(Json(edition))
}

/// Create an edition for an existing book
#[utoipa::path(
    post,
    path = "/editions",
    tag = "editions",
    request_body = CreateEdition,
    responses(
        (status = 201, description = "Edition created", body = EditionDetails),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_edition(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateEdition>,
) -> AppResult<(StatusCode, Json<EditionDetails>)> {
    let edition = state.services.editions.create(&data).await?;
    Ok((StatusCode::CREATED, Json(edition)))
}

/// Partially update an edition
#[utoipa::path(
    patch,
    path = "/editions/{id}",
    tag = "editions",
    params(("id" = i64, Path, description = "Edition ID")),
    request_body = UpdateEdition,
    responses(
        (status = 200, description = "Edition updated", body = EditionDetails),
        (status = 404, description = "Edition or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_edition(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(data): ValidatedJson<UpdateEdition>,
) -> AppResult<Json<EditionDetails>> {
    let edition = state.services.editions.update(id, data).await?;
    Ok(Json(edition))
}

/// Delete an edition
#[utoipa::path(
    delete,
    path = "/editions/{id}",
    tag = "editions",
    params(("id" = i64, Path, description = "Edition ID")),
    responses(
        (status = 204, description = "Edition deleted"),
        (status = 404, description = "Edition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_edition(State(state): State<AppState>, AppPath(id): AppPath<i64>) -> AppResult<StatusCode> {
    state.services.editions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
