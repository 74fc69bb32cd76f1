//! Database access, one module per table.
//!
//! Functions take a `&PgPool` and return domain errors so handlers can use
//! `?` directly.

pub mod application;
pub mod common;
pub mod company;
pub mod job;
pub mod user;
