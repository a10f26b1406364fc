//! Read-only routes over the content hierarchy.

use axum::routing::get;
use axum::Router;

use crate::handlers::{category, dua, subcategory};
use crate::state::AppState;

/// Content routes merged at the root of `/api`.
///
/// ```text
/// GET /categories                     -> category::list
/// GET /categories/{id}/subcategories  -> subcategory::list_by_category
/// GET /subcategories/{id}/duas        -> dua::list_by_subcategory
/// GET /duas                           -> dua::list
/// GET /duas/{id}                      -> dua::get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route(
            "/categories/{id}/subcategories",
            get(subcategory::list_by_category),
        )
        .route("/subcategories/{id}/duas", get(dua::list_by_subcategory))
        .route("/duas", get(dua::list))
        .route("/duas/{id}", get(dua::get_by_id))
}
