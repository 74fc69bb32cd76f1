use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    handlers::{parse_json, parse_path, parse_query},
    models::job::{JobSearchQuery, NewJob, UpdateJob},
    repositories::job as job_repo,
    sql::{to_update_request, JobFilter},
    state::AppState,
    validation::validate_payload,
};

pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let job = job_repo::create(&state.pool, &payload).await?;
    tracing::info!(id = job.id, company = %job.company_handle, "job created");
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

pub async fn list_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobSearchQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let filter = JobFilter::from(parse_query(query)?);
    let jobs = job_repo::find_all(&state.pool, &filter).await?;
    Ok(Json(json!({ "jobs": jobs })))
}

pub async fn get_job(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_path(id)?;
    let job = job_repo::get(&state.pool, id).await?;
    Ok(Json(json!({ "job": job })))
}

pub async fn update_job(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateJob>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_path(id)?;
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let changes = to_update_request(&payload)?;
    let job = job_repo::update(&state.pool, id, &changes).await?;
    Ok(Json(json!({ "job": job })))
}

pub async fn delete_job(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_path(id)?;
    job_repo::remove(&state.pool, id).await?;
    tracing::info!(id, "job deleted");
    Ok(Json(json!({ "deleted": id })))
}
