//! A read-only deployment serves the content routes and refuses every admin
//! write with 403, leaving the store untouched.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_read_only_app, delete, get, post_json, put_json};
use duas_db::seed::seed_if_empty;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reads_are_served(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let app = build_read_only_app(pool);
    let response = get(app, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 8);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_writes_are_forbidden(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();
    let before = body_json(get(build_read_only_app(pool.clone()), "/api/duas").await).await;

    let attempts = [
        post_json(
            build_read_only_app(pool.clone()),
            "/api/admin/categories",
            json!({ "name": "Travel", "icon": "✈️" }),
        )
        .await,
        put_json(
            build_read_only_app(pool.clone()),
            "/api/admin/subcategories/1",
            json!({ "name": "Renamed" }),
        )
        .await,
        delete(build_read_only_app(pool.clone()), "/api/admin/duas/1").await,
        post_json(
            build_read_only_app(pool.clone()),
            "/api/admin/recount",
            json!({}),
        )
        .await,
    ];

    for response in attempts {
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["code"], "FORBIDDEN");
        assert_eq!(json["error"], "The content store is read-only");
    }

    let after = body_json(get(build_read_only_app(pool), "/api/duas").await).await;
    assert_eq!(before, after);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_forbidden_takes_precedence_over_body_errors(pool: SqlitePool) {
    let response = post_json(
        build_read_only_app(pool),
        "/api/admin/duas",
        json!({ "name": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
