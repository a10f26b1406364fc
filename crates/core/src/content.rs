//! Content rules for categories, subcategories and duas.
//!
//! The store calls these before every insert or update so that blank or
//! oversized values never reach the database, whatever client sent them.

use crate::error::CoreError;

/// Maximum length (in characters) of a category, subcategory or dua name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length (in characters) of a category icon.
pub const MAX_ICON_LEN: usize = 16;

/// Entity labels used in error messages and logs.
pub const ENTITY_CATEGORY: &str = "Category";
pub const ENTITY_SUBCATEGORY: &str = "Subcategory";
pub const ENTITY_DUA: &str = "Dua";

/// Trim a display name and check it is present and not too long.
///
/// Returns the trimmed value on success.
pub fn validate_name(entity: &str, name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim a category icon. An empty icon is allowed.
pub fn validate_icon(icon: &str) -> Result<String, CoreError> {
    let trimmed = icon.trim();
    let len = trimmed.chars().count();
    if len > MAX_ICON_LEN {
        return Err(CoreError::Validation(format!(
            "Category icon must be at most {MAX_ICON_LEN} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim a dua text field that readers cannot do without (arabic, translation).
pub fn validate_required_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "Dua {field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional dua text field. Missing values are stored as "".
pub fn normalize_optional_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
