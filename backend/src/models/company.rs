//! Companies that post jobs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppError,
    models::job::Job,
    sql::{CompanyFilter, FieldMapping},
    validation::rules,
};

/// Public field names that differ from their column names.
pub const COMPANY_FIELDS: FieldMapping = FieldMapping::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Lowercase slug identifying the company.
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    #[validate(custom(function = "rules::validate_handle"))]
    pub handle: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(range(min = 0))]
    pub num_employees: Option<i32>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// Partial update for a company. The handle is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub num_employees: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// A company together with the jobs it has posted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Query string accepted by the company search endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct CompanySearchQuery {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub min_employees: Option<i64>,
    pub max_employees: Option<i64>,
}

impl TryFrom<CompanySearchQuery> for CompanyFilter {
    type Error = AppError;

    fn try_from(query: CompanySearchQuery) -> Result<Self, Self::Error> {
        if let (Some(min), Some(max)) = (query.min_employees, query.max_employees) {
            if min > max {
                return Err(AppError::BadRequest(
                    "minEmployees cannot be greater than maxEmployees".into(),
                ));
            }
        }
        Ok(CompanyFilter {
            name_like: query.name,
            min_employees: query.min_employees,
            max_employees: query.max_employees,
        })
    }
}
