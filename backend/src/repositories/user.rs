//! Repository functions for user accounts.

use serde_json::Value;
use sqlx::{Arguments, PgPool};

use crate::error::AppError;
use crate::models::user::{NewUser, User, USER_FIELDS};
use crate::repositories::common::{map_unique_violation, not_found};
use crate::sql::{build_set_clause, SqlError, UpdateRequest};
use crate::utils::password::{hash_password, verify_password};

const TABLE_NAME: &str = "users";
const SELECT_COLUMNS: &str = "username, password, first_name, last_name, email, is_admin";

/// Stores a new account with a hashed password.
///
/// `is_admin` is taken from the payload as-is; callers decide whether the
/// requester may grant it.
pub async fn register(pool: &PgPool, user: &NewUser) -> Result<User, AppError> {
    let password_hash = hash_password(&user.password)?;
    let query = format!(
        "INSERT INTO {} (username, password, first_name, last_name, email, is_admin) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {}",
        TABLE_NAME, SELECT_COLUMNS
    );
    sqlx::query_as::<_, User>(&query)
        .bind(&user.username)
        .bind(&password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.is_admin)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, format!("Duplicate username: {}", user.username)))
}

/// Checks credentials. Unknown users and wrong passwords are indistinguishable.
pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> Result<User, AppError> {
    let invalid = || AppError::Unauthorized("Invalid username/password".into());

    let user = find_by_username(pool, username).await?.ok_or_else(invalid)?;
    if verify_password(password, &user.password)? {
        Ok(user)
    } else {
        tracing::debug!(username, "password mismatch");
        Err(invalid())
    }
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let query = format!("SELECT {} FROM {} WHERE username = $1", SELECT_COLUMNS, TABLE_NAME);
    let user = sqlx::query_as::<_, User>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let query = format!("SELECT {} FROM {} ORDER BY username", SELECT_COLUMNS, TABLE_NAME);
    let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;
    Ok(users)
}

pub async fn get(pool: &PgPool, username: &str) -> Result<User, AppError> {
    find_by_username(pool, username)
        .await?
        .ok_or_else(|| not_found("user", username))
}

pub async fn exists(pool: &PgPool, username: &str) -> Result<bool, AppError> {
    let found: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

/// Applies a partial update. A new password is hashed before it reaches the
/// SET clause.
pub async fn update(
    pool: &PgPool,
    username: &str,
    mut changes: UpdateRequest,
) -> Result<User, AppError> {
    let hashed = match changes.get("password") {
        Some(Value::String(plain)) => Some(hash_password(plain)?),
        _ => None,
    };
    if let Some(hashed) = hashed {
        changes.insert("password".to_string(), Value::String(hashed));
    }

    let fragment = build_set_clause(&changes, &USER_FIELDS)?;
    let query = format!(
        "UPDATE {} SET {} WHERE username = ${} RETURNING {}",
        TABLE_NAME,
        fragment.clause,
        fragment.next_placeholder(),
        SELECT_COLUMNS
    );
    tracing::debug!(clause = %fragment.clause, username, "updating user");

    let mut args = fragment.arguments()?;
    args.add(username.to_string()).map_err(SqlError::Bind)?;

    sqlx::query_as_with::<_, User, _>(&query, args)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found("user", username))
}

pub async fn remove(pool: &PgPool, username: &str) -> Result<(), AppError> {
    let query = format!("DELETE FROM {} WHERE username = $1", TABLE_NAME);
    let result = sqlx::query(&query).bind(username).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(not_found("user", username));
    }
    Ok(())
}
