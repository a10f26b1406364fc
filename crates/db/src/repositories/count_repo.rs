//! Maintenance queries over the cached `dua_count` columns.

use sqlx::{SqliteConnection, SqlitePool};

/// Recomputes cached counts from the underlying rows.
pub struct CountRepo;

impl CountRepo {
    /// Bring every cached count in line with the rows, in one transaction.
    ///
    /// Returns how many subcategory and category rows had to be corrected.
    pub async fn reconcile(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let corrected = Self::reconcile_on(&mut *tx).await?;
        tx.commit().await?;
        Ok(corrected)
    }

    /// Same as [`CountRepo::reconcile`] on a connection the caller controls,
    /// typically an open transaction.
    ///
    /// Subcategories are fixed first because category counts are summed from
    /// them.
    pub async fn reconcile_on(conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
        let subcategories = sqlx::query(
            "UPDATE subcategories
             SET dua_count = (SELECT COUNT(*) FROM duas WHERE duas.subcategory_id = subcategories.id)
             WHERE dua_count <> (SELECT COUNT(*) FROM duas WHERE duas.subcategory_id = subcategories.id)",
        )
        .execute(&mut *conn)
        .await?;

        let categories = sqlx::query(
            "UPDATE categories
             SET dua_count = (SELECT COALESCE(SUM(s.dua_count), 0)
                              FROM subcategories s WHERE s.category_id = categories.id)
             WHERE dua_count <> (SELECT COALESCE(SUM(s.dua_count), 0)
                                 FROM subcategories s WHERE s.category_id = categories.id)",
        )
        .execute(&mut *conn)
        .await?;

        let corrected = subcategories.rows_affected() + categories.rows_affected();
        tracing::debug!(corrected, "Reconciled dua counts");
        Ok(corrected)
    }
}
