//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&SqlitePool` as the first argument. Writes that touch cached counts run in
//! a single transaction whose first statement is a write, so SQLite takes the
//! write lock before any row is read.

pub mod category_repo;
pub mod count_repo;
pub mod dua_repo;
pub mod subcategory_repo;

pub use category_repo::CategoryRepo;
pub use count_repo::CountRepo;
pub use dua_repo::DuaRepo;
pub use subcategory_repo::SubcategoryRepo;
