//! Authentication and authorization middleware
//!
//! Layered on the reminder routes in this order: `auth_middleware` turns the
//! bearer token into an [`Identity`], then `authorize` checks that identity
//! against the route policy. Both run before any extractor of the handler.

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::{debug, warn};

use crate::{error::ApiError, identity::Identity, policy, state::AppState};

/// Validate the bearer token and attach the caller identity to the request
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::Unauthorized)?;

    let identity = state.jwt_verifier.verify(bearer.token()).map_err(|e| {
        debug!("Rejected bearer token: {}", e);
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Enforce the route policy for the authenticated caller
pub async fn authorize(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let identity = req
        .extensions()
        .get::<Identity>()
        .ok_or(ApiError::Unauthorized)?;

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_default();

    // Known route, unserved method: the router's fallback replies 405.
    if policy::is_listed_path(path) && policy::required_roles(req.method(), path).is_none() {
        return Ok(next.run(req).await);
    }

    if !policy::is_authorized(identity, req.method(), path) {
        warn!(
            user_id = %identity.user_id(),
            method = %req.method(),
            path,
            "Access denied"
        );
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(req).await)
}
