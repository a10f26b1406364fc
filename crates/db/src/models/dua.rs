//! Dua entity model and DTOs.

use duas_core::content::{
    normalize_optional_text, validate_name, validate_required_text, ENTITY_DUA,
};
use duas_core::error::CoreError;
use duas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `duas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dua {
    pub id: DbId,
    pub subcategory_id: DbId,
    pub name: String,
    pub context: String,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub reference: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Editable text of a dua. Used as the update body and flattened into
/// [`CreateDua`].
///
/// `arabic` and `translation` are optional on the wire but rejected when
/// blank by [`DuaFields::validated`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuaFields {
    #[serde(default)]
    pub name: String,
    pub context: Option<String>,
    pub arabic: Option<String>,
    pub transliteration: Option<String>,
    pub translation: Option<String>,
    pub reference: Option<String>,
}

/// DTO for creating a dua under an existing subcategory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDua {
    pub subcategory_id: DbId,
    #[serde(flatten)]
    pub fields: DuaFields,
}

/// Trimmed, checked dua text ready to bind into a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDuaFields {
    pub name: String,
    pub context: String,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub reference: String,
}

impl DuaFields {
    /// Trim every field and enforce the required ones.
    pub fn validated(&self) -> Result<ValidDuaFields, CoreError> {
        Ok(ValidDuaFields {
            name: validate_name(ENTITY_DUA, &self.name)?,
            context: normalize_optional_text(self.context.as_deref()),
            arabic: validate_required_text("arabic", self.arabic.as_deref().unwrap_or_default())?,
            transliteration: normalize_optional_text(self.transliteration.as_deref()),
            translation: validate_required_text(
                "translation",
                self.translation.as_deref().unwrap_or_default(),
            )?,
            reference: normalize_optional_text(self.reference.as_deref()),
        })
    }
}
