//! Subcategory entity model and DTOs.

use duas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subcategories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    /// Number of duas directly under this subcategory.
    pub dua_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a subcategory under an existing category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcategory {
    pub category_id: DbId,
    #[serde(default)]
    pub name: String,
}

/// DTO for renaming a subcategory. Its category never changes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubcategory {
    #[serde(default)]
    pub name: String,
}
