use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    handlers::parse_json,
    models::user::{LoginRequest, NewUser, TokenResponse, User},
    repositories::user as user_repo,
    state::AppState,
    utils::jwt::create_access_token,
    validation::validate_payload,
};

pub async fn token(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let user = user_repo::authenticate(&state.pool, &payload.username, &payload.password).await?;
    tracing::info!(username = %user.username, "user authenticated");

    Ok(Json(issue_token(&state, &user)?))
}

/// Self-registration. New accounts are never admins.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let mut payload = parse_json(payload)?;
    validate_payload(&payload)?;
    payload.is_admin = false;

    let user = user_repo::register(&state.pool, &payload).await?;
    tracing::info!(username = %user.username, "user registered");

    Ok((StatusCode::CREATED, Json(issue_token(&state, &user)?)))
}

pub(crate) fn issue_token(state: &AppState, user: &User) -> Result<TokenResponse, AppError> {
    let token = create_access_token(
        user.username.clone(),
        user.is_admin(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;
    Ok(TokenResponse { token })
}
