use duas_db::models::category::CreateCategory;
use duas_db::repositories::{CategoryRepo, DuaRepo, SubcategoryRepo};
use duas_db::seed::{seed_if_empty, SeedOutcome};
use duas_db::DatabaseConfig;
use sqlx::SqlitePool;

async fn row_counts(pool: &SqlitePool) -> (i64, i64, i64) {
    let mut counts = [0i64; 3];
    for (slot, table) in counts
        .iter_mut()
        .zip(["categories", "subcategories", "duas"])
    {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap();
        *slot = row.0;
    }
    (counts[0], counts[1], counts[2])
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_populates_empty_store(pool: SqlitePool) {
    let outcome = seed_if_empty(&pool).await.unwrap();

    assert_eq!(
        outcome,
        SeedOutcome {
            categories: 8,
            subcategories: 6,
            duas: 7,
        }
    );
    assert!(outcome.seeded());
    assert_eq!(row_counts(&pool).await, (8, 6, 7));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_twice_inserts_once(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();
    let second = seed_if_empty(&pool).await.unwrap();

    assert!(!second.seeded());
    assert_eq!(second, SeedOutcome::default());
    assert_eq!(row_counts(&pool).await, (8, 6, 7));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_skips_store_with_content(pool: SqlitePool) {
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Custom".into(),
            icon: "✨".into(),
        },
    )
    .await
    .unwrap();

    let outcome = seed_if_empty(&pool).await.unwrap();
    assert!(!outcome.seeded());
    assert_eq!(row_counts(&pool).await, (1, 0, 0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_counts_match_rows(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let categories = CategoryRepo::list(&pool).await.unwrap();
    let by_name = |name: &str| {
        categories
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("missing seeded category {name}"))
    };

    assert_eq!(by_name("All Dua's").dua_count, 4);
    assert_eq!(by_name("Ruqyah").dua_count, 3);
    assert_eq!(by_name("Morning Azkar").dua_count, 0);

    for category in &categories {
        let subcategories = SubcategoryRepo::list_by_category(&pool, category.id)
            .await
            .unwrap();
        let mut sum = 0;
        for subcategory in &subcategories {
            let duas = DuaRepo::list_by_subcategory(&pool, subcategory.id)
                .await
                .unwrap();
            assert_eq!(subcategory.dua_count, duas.len() as i64, "{}", subcategory.name);
            sum += subcategory.dua_count;
        }
        assert_eq!(category.dua_count, sum, "{}", category.name);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_categories_keep_listing_order(pool: SqlitePool) {
    seed_if_empty(&pool).await.unwrap();

    let names: Vec<String> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        [
            "Dua's Importance",
            "All Dua's",
            "Memorize & Learn",
            "Dua of the Day",
            "Ruqyah",
            "Morning Azkar",
            "Evening Azkar",
            "Sleep & Wake Up",
        ]
    );
}

#[tokio::test]
async fn test_concurrent_starters_seed_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("duas.db"),
        read_only: false,
        max_connections: 2,
    };

    // Two server instances opening the same file at the same time.
    let first = duas_db::create_pool(&config).await.unwrap();
    let second = duas_db::create_pool(&config).await.unwrap();
    duas_db::run_migrations(&first).await.unwrap();

    let (a, b) = tokio::join!(seed_if_empty(&first), seed_if_empty(&second));
    let a = a.expect("first starter failed to seed");
    let b = b.expect("second starter failed to seed");

    assert_eq!(
        u8::from(a.seeded()) + u8::from(b.seeded()),
        1,
        "exactly one starter inserts the content: {a:?} {b:?}"
    );
    assert_eq!(row_counts(&first).await, (8, 6, 7));

    first.close().await;
    second.close().await;
}
