//! Data models shared across database access and API handlers.

pub mod company;
pub mod job;
pub mod user;

pub use company::{Company, CompanyDetail, CompanySearchQuery, NewCompany, UpdateCompany};
pub use job::{Job, JobSearchQuery, NewJob, UpdateJob};
pub use user::{
    LoginRequest, NewUser, TokenResponse, UpdateUser, User, UserResponse, UserWithJobs,
};
