//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tinta_core::error::CoreError;
use tinta_core::roles::{ROLE_ADMIN, ROLE_OWNER, ROLE_STAFF};
use tinta_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// A user scoped to one studio, with the tenant id made non-optional.
///
/// Every domain query a handler runs on behalf of this user is bound to
/// `studio_id`; rows from other studios behave like missing rows.
#[derive(Debug, Clone)]
pub struct StudioUser {
    pub user_id: DbId,
    pub studio_id: DbId,
    pub role: String,
}

/// Requires an `owner` or `staff` user carrying a studio claim.
/// Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn studio_scoped(RequireStudio(user): RequireStudio) -> AppResult<Json<()>> {
///     // user.studio_id scopes every query below
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStudio(pub StudioUser);

impl FromRequestParts<AppState> for RequireStudio {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_OWNER && user.role != ROLE_STAFF {
            return Err(AppError::Core(CoreError::Forbidden(
                "Owner or Staff role required".into(),
            )));
        }
        let studio_id = user.studio_id.ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "Token carries no studio claim".into(),
            ))
        })?;
        Ok(RequireStudio(StudioUser {
            user_id: user.user_id,
            studio_id,
            role: user.role,
        }))
    }
}
