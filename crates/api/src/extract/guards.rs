//! Access guards and the extractors that apply them.
//!
//! The guard functions are pure: deterministic decisions over a
//! [`RequestContext`], no I/O. The extractors are the operation wrappers
//! around them -- they build the context, run the guard, and map a typed
//! failure into the protocol error response. Anything that is not a
//! guard failure propagates untouched and surfaces as a 500 at the
//! outermost layer.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use watchlog_core::error::CoreError;
use watchlog_core::roles::Role;
use watchlog_core::types::DbId;

use crate::error::AppError;
use crate::extract::context::RequestContext;
use crate::state::AppState;

/// A context narrowed by a successful guard: user id and role are
/// guaranteed present.
#[derive(Debug, Clone, Copy)]
pub struct AuthedContext {
    pub user_id: DbId,
    pub role: Role,
}

/// Narrow a context to an authenticated one.
///
/// Fails with `Unauthorized` when no principal resolved. A principal
/// whose role did not resolve is treated as a plain `user` -- a
/// conservative downgrade, never an upgrade.
pub fn require_authenticated(ctx: &RequestContext) -> Result<AuthedContext, CoreError> {
    match &ctx.principal {
        Some(principal) => Ok(AuthedContext {
            user_id: principal.user_id,
            role: principal.role.unwrap_or(Role::User),
        }),
        None => Err(CoreError::Unauthorized("Authentication required".into())),
    }
}

/// Narrow a context to an authenticated one holding one of `allowed`.
///
/// Applies [`require_authenticated`] first, so a missing principal is
/// always a 401 and never leaks as a 403.
pub fn require_role(ctx: &RequestContext, allowed: &[Role]) -> Result<AuthedContext, CoreError> {
    let authed = require_authenticated(ctx)?;
    if !allowed.contains(&authed.role) {
        return Err(CoreError::Forbidden("Insufficient role".into()));
    }
    Ok(authed)
}

/// Build the request context, bypassing the `Infallible` rejection.
async fn build_context(parts: &mut Parts, state: &AppState) -> RequestContext {
    match RequestContext::from_request_parts(parts, state).await {
        Ok(ctx) => ctx,
        Err(never) => match never {},
    }
}

/// Requires any authenticated principal. Rejects with 401 otherwise.
///
/// ```ignore
/// async fn my_handler(Authenticated(ctx): Authenticated) -> AppResult<Json<()>> {
///     tracing::info!(user_id = ctx.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct Authenticated(pub AuthedContext);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = build_context(parts, state).await;
        let authed = require_authenticated(&ctx)?;
        Ok(Authenticated(authed))
    }
}

/// Requires the `admin` role. Rejects with 401 when unauthenticated,
/// 403 otherwise.
pub struct AdminOnly(pub AuthedContext);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = build_context(parts, state).await;
        let authed = require_role(&ctx, &[Role::Admin])?;
        Ok(AdminOnly(authed))
    }
}
