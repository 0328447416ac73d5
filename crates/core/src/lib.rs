//! Tinta domain core.
//!
//! Pure domain logic for the studio backend: commission resolution and
//! share splits, financial summaries, per-artist production aggregation,
//! monthly ledger generation with CSV rendering, and stock bookkeeping.
//! No I/O and no async anywhere in this crate; the api and db layers
//! feed it snapshots and persist what comes back.

pub mod commission;
pub mod error;
pub mod financials;
pub mod inventory;
pub mod ledger;
pub mod production;
pub mod records;
pub mod report;
pub mod roles;
pub mod types;
pub mod validation;
