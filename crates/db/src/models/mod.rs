//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (exported to TypeScript via ts-rs, ADR-004)
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod artist;
pub mod expense;
pub mod inventory_item;
pub mod studio;
pub mod work;
