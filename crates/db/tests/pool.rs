//! Pool construction against real files in a temporary directory.

use std::path::PathBuf;

use duas_db::models::category::CreateCategory;
use duas_db::repositories::CategoryRepo;
use duas_db::DatabaseConfig;

fn config(path: PathBuf, read_only: bool) -> DatabaseConfig {
    DatabaseConfig {
        path,
        read_only,
        max_connections: 2,
    }
}

#[tokio::test]
async fn test_read_write_pool_creates_file_and_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("duas.db");

    let pool = duas_db::create_pool(&config(path.clone(), false))
        .await
        .unwrap();
    duas_db::run_migrations(&pool).await.unwrap();
    duas_db::health_check(&pool).await.unwrap();
    pool.close().await;

    assert!(path.exists());
}

#[tokio::test]
async fn test_read_only_pool_requires_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");

    let result = duas_db::create_pool(&config(path.clone(), true)).await;
    assert!(result.is_err());
    assert!(!path.exists(), "read-only mode must not create the file");
}

#[tokio::test]
async fn test_read_only_pool_serves_reads_and_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duas.db");

    let pool = duas_db::create_pool(&config(path.clone(), false))
        .await
        .unwrap();
    duas_db::run_migrations(&pool).await.unwrap();
    duas_db::seed::seed_if_empty(&pool).await.unwrap();
    pool.close().await;

    let pool = duas_db::create_pool(&config(path, true)).await.unwrap();
    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), 8);

    let input = CreateCategory {
        name: "Travel".into(),
        icon: "✈️".into(),
    };
    assert!(CategoryRepo::create(&pool, &input).await.is_err());
    pool.close().await;
}
