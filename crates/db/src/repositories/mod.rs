//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every domain query is
//! scoped by `studio_id`; a row belonging to another studio behaves
//! exactly like a missing row.

pub mod artist_repo;
pub mod expense_repo;
pub mod inventory_repo;
pub mod studio_repo;
pub mod work_repo;

pub use artist_repo::ArtistRepo;
pub use expense_repo::ExpenseRepo;
pub use inventory_repo::InventoryRepo;
pub use studio_repo::StudioRepo;
pub use work_repo::WorkRepo;
