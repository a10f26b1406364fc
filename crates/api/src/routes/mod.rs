pub mod admin;
pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list categories
/// /categories/{id}/subcategories       list subcategories of a category
/// /subcategories/{id}/duas             list duas of a subcategory
/// /duas                                list all duas
/// /duas/{id}                           get dua
///
/// /admin/categories                    create (POST)
/// /admin/categories/{id}               update, delete (PUT, DELETE)
/// /admin/subcategories                 create (POST)
/// /admin/subcategories/{id}            update, delete (PUT, DELETE)
/// /admin/duas                          create (POST)
/// /admin/duas/{id}                     update, delete (PUT, DELETE)
/// /admin/recount                       recompute cached dua counts (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public read surface.
        .merge(content::router())
        // Content management. Rejected with 403 on a read-only store.
        .nest("/admin", admin::router())
}
