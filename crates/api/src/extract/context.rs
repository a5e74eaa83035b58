//! Principal resolution and request-context construction.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use watchlog_core::roles::Role;
use watchlog_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::state::AppState;

/// The resolved identity of the requester for one request.
///
/// Never partially populated: a `Principal` always has a valid positive
/// user id. The role may still be absent when the token carried a value
/// outside the closed set; guards downgrade that to [`Role::User`], never
/// upgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: DbId,
    pub role: Option<Role>,
}

/// Resolve the request's session evidence into a principal.
///
/// Missing, malformed, or expired evidence is a normal outcome, not an
/// error: the result is simply `None`. A non-numeric or non-positive
/// subject claim collapses to no principal at all, and an unrecognized
/// role collapses to an absent role -- fail-closed on both axes.
pub fn resolve_principal(headers: &HeaderMap, config: &JwtConfig) -> Option<Principal> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;
    let claims = validate_token(token, config).ok()?;

    let user_id: DbId = claims.sub.parse().ok()?;
    if user_id <= 0 {
        return None;
    }

    Some(Principal {
        user_id,
        role: Role::parse(&claims.role),
    })
}

/// Per-request context wrapping the optional principal.
///
/// Construction always succeeds and performs no side effects, so it is
/// safe to build for anonymous routes too.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub principal: Option<Principal>,
}

impl RequestContext {
    pub fn user_id(&self) -> Option<DbId> {
        self.principal.as_ref().map(|p| p.user_id)
    }

    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().and_then(|p| p.role)
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestContext {
            principal: resolve_principal(&parts.headers, &state.config.jwt),
        })
    }
}
