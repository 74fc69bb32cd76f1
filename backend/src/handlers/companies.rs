use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    handlers::{parse_json, parse_query},
    models::company::{CompanyDetail, CompanySearchQuery, NewCompany, UpdateCompany},
    repositories::{company as company_repo, job as job_repo},
    sql::{to_update_request, CompanyFilter},
    state::AppState,
    validation::validate_payload,
};

pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let company = company_repo::create(&state.pool, &payload).await?;
    tracing::info!(handle = %company.handle, "company created");
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

pub async fn list_companies(
    State(state): State<AppState>,
    query: Result<Query<CompanySearchQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let filter = CompanyFilter::try_from(parse_query(query)?)?;
    let companies = company_repo::find_all(&state.pool, &filter).await?;
    Ok(Json(json!({ "companies": companies })))
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company = company_repo::get(&state.pool, &handle).await?;
    let jobs = job_repo::find_by_company(&state.pool, &handle).await?;
    let detail = CompanyDetail { company, jobs };
    Ok(Json(json!({ "company": detail })))
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    payload: Result<Json<UpdateCompany>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let payload = parse_json(payload)?;
    validate_payload(&payload)?;

    let changes = to_update_request(&payload)?;
    let company = company_repo::update(&state.pool, &handle, &changes).await?;
    Ok(Json(json!({ "company": company })))
}

pub async fn delete_company(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Value>, AppError> {
    company_repo::remove(&state.pool, &handle).await?;
    tracing::info!(handle = %handle, "company deleted");
    Ok(Json(json!({ "deleted": handle })))
}
