//! Access-token verification.
//!
//! Token issuance belongs to the external identity provider; this module
//! only validates what arrives in the `Authorization` header. A local
//! generator is kept for integration tests and operator tooling.

pub mod jwt;
