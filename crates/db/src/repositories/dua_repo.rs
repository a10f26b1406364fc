//! Repository for the `duas` table.
//!
//! Creating and deleting a dua also adjusts the cached `dua_count` of its
//! subcategory and of that subcategory's category. The three writes share one
//! transaction and use relative updates (`dua_count + 1`), so concurrent
//! writers under the same parent never lose an increment.

use duas_core::content::{ENTITY_CATEGORY, ENTITY_SUBCATEGORY};
use duas_core::error::CoreError;
use duas_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::StoreResult;
use crate::models::dua::{CreateDua, Dua, DuaFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subcategory_id, name, context, arabic, transliteration, \
                       translation, reference, created_at, updated_at";

/// Provides CRUD operations for duas.
pub struct DuaRepo;

impl DuaRepo {
    /// Insert a new dua and bump the subcategory and category counts by one.
    ///
    /// Returns [`CoreError::Referential`] without writing anything when the
    /// subcategory does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateDua) -> StoreResult<Dua> {
        let fields = input.fields.validated()?;
        let subcategory_id = input.subcategory_id;

        let mut tx = pool.begin().await?;

        // Doubles as the parent check: no row means no subcategory.
        let category_id: Option<DbId> = sqlx::query_scalar(
            "UPDATE subcategories SET dua_count = dua_count + 1
             WHERE id = $1
             RETURNING category_id",
        )
        .bind(subcategory_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(category_id) = category_id else {
            tx.rollback().await?;
            return Err(CoreError::Referential {
                entity: ENTITY_SUBCATEGORY,
                id: subcategory_id,
            }
            .into());
        };

        let query = format!(
            "INSERT INTO duas
                (subcategory_id, name, context, arabic, transliteration, translation, reference)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let dua = sqlx::query_as::<_, Dua>(&query)
            .bind(subcategory_id)
            .bind(&fields.name)
            .bind(&fields.context)
            .bind(&fields.arabic)
            .bind(&fields.transliteration)
            .bind(&fields.translation)
            .bind(&fields.reference)
            .fetch_one(&mut *tx)
            .await?;

        let bumped = sqlx::query("UPDATE categories SET dua_count = dua_count + 1 WHERE id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        if bumped.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::Referential {
                entity: ENTITY_CATEGORY,
                id: category_id,
            }
            .into());
        }

        tx.commit().await?;
        Ok(dua)
    }

    /// Find a dua by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Dua>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duas WHERE id = $1");
        sqlx::query_as::<_, Dua>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every dua in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Dua>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duas ORDER BY id");
        sqlx::query_as::<_, Dua>(&query).fetch_all(pool).await
    }

    /// List the duas of a subcategory in insertion order.
    pub async fn list_by_subcategory(
        pool: &SqlitePool,
        subcategory_id: DbId,
    ) -> Result<Vec<Dua>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duas WHERE subcategory_id = $1 ORDER BY id");
        sqlx::query_as::<_, Dua>(&query)
            .bind(subcategory_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the text of a dua. Counts are untouched and the dua stays in
    /// its subcategory.
    ///
    /// Returns the number of rows changed; `0` means no such dua.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &DuaFields) -> StoreResult<u64> {
        let fields = input.validated()?;

        let result = sqlx::query(
            "UPDATE duas SET
                name = $2,
                context = $3,
                arabic = $4,
                transliteration = $5,
                translation = $6,
                reference = $7,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.context)
        .bind(&fields.arabic)
        .bind(&fields.transliteration)
        .bind(&fields.translation)
        .bind(&fields.reference)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a dua and decrement its subcategory and category counts.
    ///
    /// Deleting a dua that does not exist is a no-op that returns `0`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> StoreResult<u64> {
        let mut tx = pool.begin().await?;

        let subcategory_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM duas WHERE id = $1 RETURNING subcategory_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(subcategory_id) = subcategory_id else {
            tx.rollback().await?;
            return Ok(0);
        };

        let category_id: Option<DbId> = sqlx::query_scalar(
            "UPDATE subcategories SET dua_count = dua_count - 1
             WHERE id = $1
             RETURNING category_id",
        )
        .bind(subcategory_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(category_id) = category_id else {
            tx.rollback().await?;
            return Err(CoreError::Internal(format!(
                "Dua {id} referenced missing subcategory {subcategory_id}"
            ))
            .into());
        };

        sqlx::query("UPDATE categories SET dua_count = dua_count - 1 WHERE id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(1)
    }
}
