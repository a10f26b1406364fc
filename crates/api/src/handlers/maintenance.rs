use axum::extract::State;
use axum::Json;
use duas_db::repositories::CountRepo;

use crate::error::AppResult;
use crate::middleware::writable::RequireWritable;
use crate::response::MutationResponse;
use crate::state::AppState;

/// POST /api/admin/recount
///
/// Recompute every cached dua count from the rows. `changes` is the number of
/// subcategory and category rows that were wrong.
pub async fn recount(
    _: RequireWritable,
    State(state): State<AppState>,
) -> AppResult<Json<MutationResponse>> {
    let corrected = CountRepo::reconcile(&state.pool).await?;
    tracing::info!(corrected, "Dua counts reconciled");
    Ok(Json(MutationResponse::applied(corrected)))
}
