//! Repository for the `categories` table.

use duas_core::content::{validate_icon, validate_name, ENTITY_CATEGORY};
use duas_core::error::CoreError;
use duas_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, icon, dua_count, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category with a zero dua count, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateCategory) -> StoreResult<Category> {
        let name = validate_name(ENTITY_CATEGORY, &input.name)?;
        let icon = validate_icon(&input.icon)?;

        let query = format!(
            "INSERT INTO categories (name, icon, dua_count)
             VALUES ($1, $2, 0)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(icon)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Rename a category and optionally replace its icon.
    ///
    /// Returns the number of rows changed; `0` means no such category.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &UpdateCategory) -> StoreResult<u64> {
        let name = validate_name(ENTITY_CATEGORY, &input.name)?;
        let icon = input.icon.as_deref().map(validate_icon).transpose()?;

        let result = sqlx::query(
            "UPDATE categories SET
                name = $2,
                icon = COALESCE($3, icon),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .bind(icon)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a category that has no subcategories.
    ///
    /// Returns the number of rows removed; `0` means no such category.
    /// A category that still owns subcategories is left untouched and a
    /// [`CoreError::Conflict`] is returned.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> StoreResult<u64> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM categories
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM subcategories WHERE category_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let children: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM subcategories WHERE category_id = $1")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
            tx.rollback().await?;

            if children > 0 {
                return Err(CoreError::Conflict(format!(
                    "Category {id} still has {children} subcategories; delete them first"
                ))
                .into());
            }
            return Ok(0);
        }

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
