//! HTTP request handlers, one module per resource.
//!
//! Handlers validate request payloads with the `tinta_core::validation`
//! helpers before touching the database, run their queries scoped to the
//! caller's studio, and wrap results in [`crate::response::DataResponse`].

pub mod artists;
pub mod expenses;
pub mod inventory;
pub mod reports;
pub mod studios;
pub mod works;
