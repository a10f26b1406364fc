//! Content management routes mounted at `/admin`.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{category, dua, maintenance, subcategory};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// POST   /categories          -> category::create
/// PUT    /categories/{id}     -> category::update
/// DELETE /categories/{id}     -> category::delete
/// POST   /subcategories       -> subcategory::create
/// PUT    /subcategories/{id}  -> subcategory::update
/// DELETE /subcategories/{id}  -> subcategory::delete
/// POST   /duas                -> dua::create
/// PUT    /duas/{id}           -> dua::update
/// DELETE /duas/{id}           -> dua::delete
/// POST   /recount             -> maintenance::recount
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", post(category::create))
        .route(
            "/categories/{id}",
            put(category::update).delete(category::delete),
        )
        .route("/subcategories", post(subcategory::create))
        .route(
            "/subcategories/{id}",
            put(subcategory::update).delete(subcategory::delete),
        )
        .route("/duas", post(dua::create))
        .route("/duas/{id}", put(dua::update).delete(dua::delete))
        .route("/recount", post(maintenance::recount))
}
