//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the admin create/update bodies

pub mod category;
pub mod dua;
pub mod subcategory;
