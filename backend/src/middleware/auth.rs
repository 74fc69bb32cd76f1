use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

/// Requires a valid bearer token and exposes its [`Claims`] to handlers.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(request.headers(), &state)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

// Auth + require admin flag for admin-only routes
pub async fn auth_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(request.headers(), &state)?;
    if !claims.is_admin {
        tracing::debug!(username = %claims.sub, "non-admin rejected from admin route");
        return Err(AppError::Forbidden("Admin privileges required".into()));
    }
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Checks that the caller is an admin or the user named in the path.
pub fn ensure_admin_or_self(claims: &Claims, username: &str) -> Result<(), AppError> {
    if claims.can_act_for(username) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only admins or the user themselves may do this".into(),
        ))
    }
}

fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<Claims, AppError> {
    let token = extract_auth_header(headers)
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".into()))?;

    verify_access_token(token, &state.config.jwt_secret).map_err(|err| {
        tracing::debug!(error = %err, "token rejected");
        AppError::Unauthorized("Invalid or expired token".into())
    })
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

fn extract_auth_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
