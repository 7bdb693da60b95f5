//! Authentication and authorization gates.
//!
//! Both gates resolve the same policy table, so they agree exactly on which
//! operations are public. The authentication gate is the only place a token
//! is ever inspected; downstream consumers read the attached `CurrentUser`
//! and never re-derive identity from headers.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::RoutePolicy;
use crate::models::Role;
use crate::security::token;
use crate::AppState;

/// The authenticated principal attached to request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Decides whether the request carries a valid principal.
///
/// Public operations pass through with no token inspection at all. Everything
/// else requires a `Bearer` token whose signature and expiry verify; any
/// token failure is re-raised as `Unauthenticated`.
pub async fn authentication_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = resolve_policy(&state, &request);

    if policy.public {
        tracing::debug!(path = request.uri().path(), "public operation, skipping authentication");
        return Ok(next.run(request).await);
    }

    let token = bearer_token(request.headers()).ok_or(AppError::Unauthenticated)?;

    let claims =
        token::verify_token(&state.config.jwt, token).map_err(|_| AppError::Unauthenticated)?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthenticated)?;

    tracing::debug!(user = %claims.email, "request authenticated");

    request.extensions_mut().insert(CurrentUser {
        id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Decides whether the authenticated principal's role satisfies the
/// operation's requirement.
///
/// Runs after the authentication gate by layer ordering. Matching is exact:
/// there is no role hierarchy.
pub async fn authorization_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = resolve_policy(&state, &request);

    if policy.public {
        return Ok(next.run(request).await);
    }

    let Some(required) = policy.required_role else {
        return Ok(next.run(request).await);
    };

    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthenticated)?;

    if user.role != required {
        tracing::debug!(
            user = %user.email,
            required = required.as_str(),
            actual = user.role.as_str(),
            "role requirement not met"
        );
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}

fn resolve_policy(state: &AppState, request: &Request) -> RoutePolicy {
    // The matched route pattern, not the raw URI: policies are keyed the way
    // routes are registered ("/cats/:id").
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    state.policies.resolve(request.method(), &path)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
