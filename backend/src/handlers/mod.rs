//! HTTP handlers, one module per resource.
//!
//! Responses are JSON envelopes keyed by resource name, e.g. `{"job": ...}`.

pub mod auth;
pub mod companies;
pub mod jobs;
pub mod users;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::error::AppError;

/// Unwraps a query extraction, turning malformed or unknown parameters into a 400.
pub(crate) fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps a JSON body extraction, reporting shape errors as a 400.
pub(crate) fn parse_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwraps a path extraction; a segment that does not parse (e.g. a
/// non-numeric job id) is a 400 with the usual error body.
pub(crate) fn parse_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|Path(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
