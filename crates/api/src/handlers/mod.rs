//! Request handlers for the content hierarchy.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `duas_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod dua;
pub mod maintenance;
pub mod subcategory;
