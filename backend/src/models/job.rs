//! Job postings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    sql::{FieldMapping, JobFilter},
    validation::rules,
};

/// Every updatable job field already matches its column name.
pub const JOB_FIELDS: FieldMapping = FieldMapping::identity();

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Fraction of the company offered, between 0 and 1.
    pub equity: Option<f64>,
    pub company_handle: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub equity: Option<f64>,
    #[validate(custom(function = "rules::validate_handle"))]
    pub company_handle: String,
}

/// Partial update for a job. The owning company cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub equity: Option<f64>,
}

/// Query string accepted by the job search endpoint.
///
/// Unknown or repeated keys fail deserialization, as do non-integer salaries
/// and anything other than `true`/`false` for `hasEquity`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct JobSearchQuery {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Inclusive minimum salary.
    pub min_salary: Option<i64>,
    /// Restrict to jobs offering equity.
    pub has_equity: Option<bool>,
}

impl From<JobSearchQuery> for JobFilter {
    fn from(query: JobSearchQuery) -> Self {
        JobFilter {
            title: query.title,
            min_salary: query.min_salary,
            has_equity: query.has_equity.unwrap_or(false),
        }
    }
}
