//! Company repository.
//!
//! Provides CRUD operations and filtered search for companies.

use sqlx::{Arguments, PgPool};

use crate::error::AppError;
use crate::models::company::{Company, NewCompany, COMPANY_FIELDS};
use crate::repositories::common::{map_unique_violation, not_found};
use crate::sql::{build_set_clause, CompanyFilter, SqlError, UpdateRequest};

const TABLE_NAME: &str = "companies";
const SELECT_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

pub async fn create(pool: &PgPool, company: &NewCompany) -> Result<Company, AppError> {
    let query = format!(
        "INSERT INTO {} (handle, name, description, num_employees, logo_url) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {}",
        TABLE_NAME, SELECT_COLUMNS
    );
    sqlx::query_as::<_, Company>(&query)
        .bind(&company.handle)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(&company.logo_url)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, format!("Duplicate company: {}", company.handle)))
}

/// Lists companies matching `filter`, ordered by name.
pub async fn find_all(pool: &PgPool, filter: &CompanyFilter) -> Result<Vec<Company>, AppError> {
    let fragment = filter.to_fragment();
    let query = format!(
        "SELECT {} FROM {} {} ORDER BY name",
        SELECT_COLUMNS, TABLE_NAME, fragment.clause
    );
    tracing::debug!(clause = %fragment.clause, params = fragment.values.len(), "searching companies");

    let rows = sqlx::query_as_with::<_, Company, _>(&query, fragment.arguments()?)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &PgPool, handle: &str) -> Result<Company, AppError> {
    let query = format!("SELECT {} FROM {} WHERE handle = $1", SELECT_COLUMNS, TABLE_NAME);
    sqlx::query_as::<_, Company>(&query)
        .bind(handle)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found("company", handle))
}

/// Applies a partial update; only the supplied fields change.
pub async fn update(
    pool: &PgPool,
    handle: &str,
    changes: &UpdateRequest,
) -> Result<Company, AppError> {
    let fragment = build_set_clause(changes, &COMPANY_FIELDS)?;
    let query = format!(
        "UPDATE {} SET {} WHERE handle = ${} RETURNING {}",
        TABLE_NAME,
        fragment.clause,
        fragment.next_placeholder(),
        SELECT_COLUMNS
    );
    tracing::debug!(clause = %fragment.clause, handle, "updating company");

    let mut args = fragment.arguments()?;
    args.add(handle.to_string()).map_err(SqlError::Bind)?;

    sqlx::query_as_with::<_, Company, _>(&query, args)
        .fetch_optional(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Company name already in use"))?
        .ok_or_else(|| not_found("company", handle))
}

pub async fn remove(pool: &PgPool, handle: &str) -> Result<(), AppError> {
    let query = format!("DELETE FROM {} WHERE handle = $1", TABLE_NAME);
    let result = sqlx::query(&query).bind(handle).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(not_found("company", handle));
    }
    Ok(())
}
