//! Write-access extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use duas_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Requires the content store to be writable. Rejects with 403 Forbidden when
/// the server runs against a read-only database.
///
/// ```ignore
/// async fn create(_: RequireWritable, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireWritable;

impl FromRequestParts<AppState> for RequireWritable {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.read_only() {
            return Err(AppError::Core(CoreError::Forbidden(
                "The content store is read-only".into(),
            )));
        }
        Ok(RequireWritable)
    }
}
