//! Jobly job-board backend: companies, jobs, users and applications over a
//! JSON HTTP API backed by Postgres.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod router;
pub mod sql;
pub mod state;
pub mod utils;
pub mod validation;

pub use router::build_router;
