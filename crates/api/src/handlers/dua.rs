//! Handlers for duas.
//!
//! Create and delete also move the cached counts of the owning subcategory
//! and category; that happens inside [`DuaRepo`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use duas_core::content::ENTITY_DUA;
use duas_core::error::CoreError;
use duas_db::models::dua::{CreateDua, Dua, DuaFields};
use duas_db::repositories::DuaRepo;

use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, IdPath};
use crate::middleware::writable::RequireWritable;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /api/duas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Dua>>> {
    let duas = DuaRepo::list(&state.pool).await?;
    Ok(Json(duas))
}

/// GET /api/subcategories/{id}/duas
pub async fn list_by_subcategory(
    State(state): State<AppState>,
    IdPath(subcategory_id): IdPath,
) -> AppResult<Json<Vec<Dua>>> {
    let duas = DuaRepo::list_by_subcategory(&state.pool, subcategory_id).await?;
    Ok(Json(duas))
}

/// GET /api/duas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Dua>> {
    let dua = DuaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_DUA,
            id,
        }))?;
    Ok(Json(dua))
}

/// POST /api/admin/duas
pub async fn create(
    _: RequireWritable,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDua>,
) -> AppResult<(StatusCode, Json<Dua>)> {
    let dua = DuaRepo::create(&state.pool, &input).await?;

    tracing::info!(
        dua_id = dua.id,
        subcategory_id = dua.subcategory_id,
        "Dua created"
    );

    Ok((StatusCode::CREATED, Json(dua)))
}

/// PUT /api/admin/duas/{id}
///
/// Replaces the text fields. A `subcategoryId` in the body is ignored.
pub async fn update(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<DuaFields>,
) -> AppResult<Json<MutationResponse>> {
    let changes = DuaRepo::update(&state.pool, id, &input).await?;
    tracing::info!(dua_id = id, changes, "Dua updated");
    Ok(Json(MutationResponse::updated(changes)))
}

/// DELETE /api/admin/duas/{id}
pub async fn delete(
    _: RequireWritable,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MutationResponse>> {
    let changes = DuaRepo::delete(&state.pool, id).await?;
    tracing::info!(dua_id = id, changes, "Dua deleted");
    Ok(Json(MutationResponse::applied(changes)))
}
