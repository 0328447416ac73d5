//! Well-known role name constants.
//!
//! These must match the role strings the identity provider embeds in
//! access-token claims.

/// Platform administrator: manages studios (tenants) themselves.
pub const ROLE_ADMIN: &str = "admin";
/// Studio owner: full access to one studio's records and reports.
pub const ROLE_OWNER: &str = "owner";
/// Studio staff: day-to-day record keeping within one studio.
pub const ROLE_STAFF: &str = "staff";
