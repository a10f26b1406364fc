//! Handlers for subcategories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use duas_db::models::subcategory::{CreateSubcategory, Subcategory, UpdateSubcategory};
use duas_db::repositories::SubcategoryRepo;

use crate::error::AppResult;
use crate::extractors::{AppJson, IdPath};
use crate::middleware::writable::RequireWritable;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/categories/{id}/subcategories
///
/// An unknown category yields an empty list.
pub async fn list_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> AppResult<Json<Vec<Subcategory>>> {
    let subcategories = SubcategoryRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(subcategories))
}

/// POST /api/admin/subcategories
pub async fn create(
    _: RequireWritable,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSubcategory>,
) -> AppResult<(StatusCode, Json<Subcategory>)> {
    let subcategory = SubcategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        subcategory_id = subcategory.id,
        category_id = subcategory.category_id,
        "Subcategory created"
    );

    Ok((StatusCode::CREATED, Json(subcategory)))
}

/// PUT /api/admin/subcategories/{id}
pub async fn update(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<UpdateSubcategory>,
) -> AppResult<Json<MutationResponse>> {
    let changes = SubcategoryRepo::update(&state.pool, id, &input).await?;
    tracing::info!(subcategory_id = id, changes, "Subcategory updated");
    Ok(Json(MutationResponse::updated(changes)))
}

/// DELETE /api/admin/subcategories/{id}
///
/// Refused with 409 while the subcategory still has duas.
pub async fn delete(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MutationResponse>> {
    let changes = SubcategoryRepo::delete(&state.pool, id).await?;
    tracing::info!(subcategory_id = id, changes, "Subcategory deleted");
    Ok(Json(MutationResponse::applied(changes)))
}
