//! Job applications: the link between a user and the jobs they applied to.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::AppError;
use crate::repositories::{common::not_found, job, user};

/// Records that `username` applied to `job_id` and returns the job id.
pub async fn apply(pool: &PgPool, username: &str, job_id: i32) -> Result<i32, AppError> {
    if !user::exists(pool, username).await? {
        return Err(not_found("user", username));
    }
    if !job::exists(pool, job_id).await? {
        return Err(AppError::BadRequest(format!("Invalid job id: {}", job_id)));
    }

    let applied: i32 = sqlx::query_scalar(
        "INSERT INTO applications (username, job_id) VALUES ($1, $2) RETURNING job_id",
    )
    .bind(username)
    .bind(job_id)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Already applied to job {}", job_id))
        }
        // The user or job was removed between the checks and the insert.
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest(format!("Invalid job id: {}", job_id))
        }
        _ => e.into(),
    })?;

    tracing::info!(username, job_id, "application recorded");
    Ok(applied)
}

pub async fn job_ids_for(pool: &PgPool, username: &str) -> Result<Vec<i32>, AppError> {
    let ids: Vec<i32> = sqlx::query_scalar(
        "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
    )
    .bind(username)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Applied job ids for every user that has at least one application.
pub async fn job_ids_by_user(pool: &PgPool) -> Result<HashMap<String, Vec<i32>>, AppError> {
    let rows: Vec<(String, i32)> =
        sqlx::query_as("SELECT username, job_id FROM applications ORDER BY username, job_id")
            .fetch_all(pool)
            .await?;

    let mut grouped: HashMap<String, Vec<i32>> = HashMap::new();
    for (username, job_id) in rows {
        grouped.entry(username).or_default().push(job_id);
    }
    Ok(grouped)
}
