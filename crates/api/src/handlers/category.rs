//! Handlers for categories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use duas_db::models::category::{Category, CreateCategory, UpdateCategory};
use duas_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extractors::{AppJson, IdPath};
use crate::middleware::writable::RequireWritable;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/admin/categories
pub async fn create(
    _: RequireWritable,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<MutationResponse>> {
    let changes = CategoryRepo::update(&state.pool, id, &input).await?;
    tracing::info!(category_id = id, changes, "Category updated");
    Ok(Json(MutationResponse::updated(changes)))
}

/// DELETE /api/admin/categories/{id}
///
/// Refused with 409 while the category still has subcategories.
pub async fn delete(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MutationResponse>> {
    let changes = CategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(category_id = id, changes, "Category deleted");
    Ok(Json(MutationResponse::applied(changes)))
}
