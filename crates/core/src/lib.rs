//! Domain types shared by the store and the HTTP layer.

pub mod content;
pub mod error;
pub mod types;
