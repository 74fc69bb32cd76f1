//! Models that represent users, authentication payloads, and their API views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{sql::FieldMapping, validation::rules};

/// Public field names that differ from their column names.
pub const USER_FIELDS: FieldMapping = FieldMapping::new(&[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("isAdmin", "is_admin"),
]);

#[derive(Debug, Clone, FromRow)]
/// Database representation of a user account.
pub struct User {
    /// Immutable username used for login and as the primary key.
    pub username: String,
    /// Argon2 hash of the user's password.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Grants access to admin-only routes.
    pub is_admin: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Payload for creating a user, either by self-registration or by an admin.
pub struct NewUser {
    #[validate(custom(function = "rules::validate_username"))]
    pub username: String,
    #[validate(custom(function = "rules::validate_password"))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(email, length(min = 6, max = 60))]
    pub email: String,
    /// Only honored when an admin creates the account.
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partial update for a user. `isAdmin` may only be set by an admin.
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 30))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 30))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::validate_password"))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email, length(min = 6, max = 60))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Bearer token returned after login or registration.
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// A user with the ids of the jobs they applied to.
pub struct UserWithJobs {
    #[serde(flatten)]
    pub user: UserResponse,
    pub jobs: Vec<i32>,
}
