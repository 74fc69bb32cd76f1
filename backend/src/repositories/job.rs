//! Job repository.

use sqlx::{Arguments, PgPool};

use crate::error::AppError;
use crate::models::job::{Job, NewJob, JOB_FIELDS};
use crate::repositories::common::not_found;
use crate::sql::{build_set_clause, JobFilter, SqlError, UpdateRequest};

const TABLE_NAME: &str = "jobs";
// equity is stored as NUMERIC; cast so it decodes as f64.
const SELECT_COLUMNS: &str = "id, title, salary, equity::FLOAT8 AS equity, company_handle";

pub async fn create(pool: &PgPool, job: &NewJob) -> Result<Job, AppError> {
    let query = format!(
        "INSERT INTO {} (title, salary, equity, company_handle) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {}",
        TABLE_NAME, SELECT_COLUMNS
    );
    sqlx::query_as::<_, Job>(&query)
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity)
        .bind(&job.company_handle)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest(format!("No company: {}", job.company_handle))
            }
            _ => e.into(),
        })
}

/// Lists jobs matching `filter`, ordered by title.
pub async fn find_all(pool: &PgPool, filter: &JobFilter) -> Result<Vec<Job>, AppError> {
    let fragment = filter.to_fragment();
    let query = format!(
        "SELECT {} FROM {} {} ORDER BY title, id",
        SELECT_COLUMNS, TABLE_NAME, fragment.clause
    );
    tracing::debug!(clause = %fragment.clause, params = fragment.values.len(), "searching jobs");

    let rows = sqlx::query_as_with::<_, Job, _>(&query, fragment.arguments()?)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_company(pool: &PgPool, handle: &str) -> Result<Vec<Job>, AppError> {
    let query = format!(
        "SELECT {} FROM {} WHERE company_handle = $1 ORDER BY id",
        SELECT_COLUMNS, TABLE_NAME
    );
    let rows = sqlx::query_as::<_, Job>(&query)
        .bind(handle)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Job, AppError> {
    let query = format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, TABLE_NAME);
    sqlx::query_as::<_, Job>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found("job", id))
}

pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

pub async fn update(pool: &PgPool, id: i32, changes: &UpdateRequest) -> Result<Job, AppError> {
    let fragment = build_set_clause(changes, &JOB_FIELDS)?;
    let query = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        TABLE_NAME,
        fragment.clause,
        fragment.next_placeholder(),
        SELECT_COLUMNS
    );
    tracing::debug!(clause = %fragment.clause, id, "updating job");

    let mut args = fragment.arguments()?;
    args.add(id).map_err(SqlError::Bind)?;

    sqlx::query_as_with::<_, Job, _>(&query, args)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found("job", id))
}

pub async fn remove(pool: &PgPool, id: i32) -> Result<(), AppError> {
    let query = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(not_found("job", id));
    }
    Ok(())
}
