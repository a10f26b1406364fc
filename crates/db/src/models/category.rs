//! Category entity model and DTOs.

use duas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    /// Number of duas across all subcategories of this category.
    pub dua_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// DTO for updating a category. A missing `icon` keeps the current one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    #[serde(default)]
    pub name: String,
    pub icon: Option<String>,
}
