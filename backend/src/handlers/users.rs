use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    handlers::{auth::issue_token, parse_json, parse_path},
    middleware::ensure_admin_or_self,
    models::user::{NewUser, UpdateUser, UserResponse, UserWithJobs},
    repositories::{application as application_repo, user as user_repo},
    sql::to_update_request,
    state::AppState,
    utils::jwt::Claims,
    validation::validate_payload,
};

/// Admin-only account creation; unlike registration this may grant admin.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let user = user_repo::register(&state.pool, &payload).await?;
    let token = issue_token(&state, &user)?.token;
    tracing::info!(
        username = %user.username,
        is_admin = user.is_admin(),
        created_by = %claims.sub,
        "user created by admin"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "user": UserResponse::from(user), "token": token })),
    ))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = user_repo::find_all(&state.pool).await?;
    let mut applied = application_repo::job_ids_by_user(&state.pool).await?;

    let users: Vec<UserWithJobs> = users
        .into_iter()
        .map(|user| {
            let jobs = applied.remove(&user.username).unwrap_or_default();
            UserWithJobs {
                user: UserResponse::from(user),
                jobs,
            }
        })
        .collect();

    Ok(Json(json!({ "users": users })))
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    ensure_admin_or_self(&claims, &username)?;

    let user = user_repo::get(&state.pool, &username).await?;
    let jobs = application_repo::job_ids_for(&state.pool, &username).await?;
    let user = UserWithJobs {
        user: UserResponse::from(user),
        jobs,
    };
    Ok(Json(json!({ "user": user })))
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(username): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    ensure_admin_or_self(&claims, &username)?;
    let payload = parse_json(payload)?;
    if payload.is_admin.is_some() && !claims.is_admin {
        return Err(AppError::Forbidden(
            "Only admins may change admin status".into(),
        ));
    }
    validate_payload(&payload)?;

    let changes = to_update_request(&payload)?;
    let user = user_repo::update(&state.pool, &username, changes).await?;
    Ok(Json(json!({ "user": UserResponse::from(user) })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    ensure_admin_or_self(&claims, &username)?;

    user_repo::remove(&state.pool, &username).await?;
    tracing::info!(username = %username, deleted_by = %claims.sub, "user deleted");
    Ok(Json(json!({ "deleted": username })))
}

pub async fn apply_for_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let (username, job_id) = parse_path(path)?;
    ensure_admin_or_self(&claims, &username)?;

    let applied = application_repo::apply(&state.pool, &username, job_id).await?;
    Ok(Json(json!({ "applied": applied })))
}
