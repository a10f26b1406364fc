//! Repository for the `subcategories` table.

use duas_core::content::{validate_name, ENTITY_CATEGORY, ENTITY_SUBCATEGORY};
use duas_core::error::CoreError;
use duas_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::StoreResult;
use crate::models::subcategory::{CreateSubcategory, Subcategory, UpdateSubcategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, name, dua_count, created_at, updated_at";

/// Provides CRUD operations for subcategories.
pub struct SubcategoryRepo;

impl SubcategoryRepo {
    /// Insert a new subcategory with a zero dua count.
    ///
    /// The parent check and the insert are one statement, so a category
    /// deleted concurrently can never end up with a new child. Returns
    /// [`CoreError::Referential`] when the category does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateSubcategory) -> StoreResult<Subcategory> {
        let name = validate_name(ENTITY_SUBCATEGORY, &input.name)?;

        let query = format!(
            "INSERT INTO subcategories (category_id, name, dua_count)
             SELECT $1, $2, 0
             WHERE EXISTS (SELECT 1 FROM categories WHERE id = $1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(input.category_id)
            .bind(name)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::Referential {
                    entity: ENTITY_CATEGORY,
                    id: input.category_id,
                }
                .into()
            })
    }

    /// Find a subcategory by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Subcategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subcategories WHERE id = $1");
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the subcategories of a category in insertion order.
    pub async fn list_by_category(
        pool: &SqlitePool,
        category_id: DbId,
    ) -> Result<Vec<Subcategory>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subcategories WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Subcategory>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a subcategory. Returns the number of rows changed.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSubcategory,
    ) -> StoreResult<u64> {
        let name = validate_name(ENTITY_SUBCATEGORY, &input.name)?;

        let result = sqlx::query(
            "UPDATE subcategories SET name = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a subcategory that has no duas.
    ///
    /// An empty subcategory carries a zero count, so the owning category's
    /// count is unaffected. Returns [`CoreError::Conflict`] while duas remain.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> StoreResult<u64> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM subcategories
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM duas WHERE subcategory_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let children: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM duas WHERE subcategory_id = $1")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
            tx.rollback().await?;

            if children > 0 {
                return Err(CoreError::Conflict(format!(
                    "Subcategory {id} still has {children} duas; delete them first"
                ))
                .into());
            }
            return Ok(0);
        }

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
