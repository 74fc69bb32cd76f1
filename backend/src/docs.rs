#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::models::{
    company::{Company, CompanyDetail, CompanySearchQuery, NewCompany, UpdateCompany},
    job::{Job, JobSearchQuery, NewJob, UpdateJob},
    user::{LoginRequest, NewUser, TokenResponse, UpdateUser, UserResponse, UserWithJobs},
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Jobly API", description = "Companies, jobs and applications"),
    paths(
        token_doc,
        register_doc,
        create_company_doc,
        list_companies_doc,
        get_company_doc,
        update_company_doc,
        delete_company_doc,
        create_job_doc,
        list_jobs_doc,
        get_job_doc,
        update_job_doc,
        delete_job_doc,
        create_user_doc,
        list_users_doc,
        get_user_doc,
        update_user_doc,
        delete_user_doc,
        apply_for_job_doc
    ),
    components(
        schemas(
            // auth
            LoginRequest,
            TokenResponse,
            // companies
            Company,
            CompanyDetail,
            NewCompany,
            UpdateCompany,
            // jobs
            Job,
            NewJob,
            UpdateJob,
            // users
            NewUser,
            UpdateUser,
            UserResponse,
            UserWithJobs
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login and registration"),
        (name = "Companies", description = "Company search and management"),
        (name = "Jobs", description = "Job search and management"),
        (name = "Users", description = "Accounts and job applications")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid username/password")
    ),
    tag = "Auth",
    security(())
)]
fn token_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = NewUser,
    responses(
        (status = 201, description = "Account created", body = TokenResponse),
        (status = 409, description = "Duplicate username")
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = NewCompany,
    responses(
        (status = 201, description = "`{company}`", body = Company),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Duplicate handle")
    ),
    tag = "Companies"
)]
fn create_company_doc() {}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(CompanySearchQuery),
    responses(
        (status = 200, description = "`{companies}` ordered by name", body = [Company]),
        (status = 400, description = "Unknown filter or minEmployees > maxEmployees")
    ),
    tag = "Companies",
    security(())
)]
fn list_companies_doc() {}

#[utoipa::path(
    get,
    path = "/api/companies/{handle}",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "`{company}` with its jobs", body = CompanyDetail),
        (status = 404, description = "No such company")
    ),
    tag = "Companies",
    security(())
)]
fn get_company_doc() {}

#[utoipa::path(
    patch,
    path = "/api/companies/{handle}",
    params(("handle" = String, Path, description = "Company handle")),
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "`{company}`", body = Company),
        (status = 400, description = "No data or invalid fields"),
        (status = 404, description = "No such company")
    ),
    tag = "Companies"
)]
fn update_company_doc() {}

#[utoipa::path(
    delete,
    path = "/api/companies/{handle}",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "`{deleted: handle}`", body = serde_json::Value),
        (status = 404, description = "No such company")
    ),
    tag = "Companies"
)]
fn delete_company_doc() {}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = NewJob,
    responses(
        (status = 201, description = "`{job}`", body = Job),
        (status = 400, description = "Invalid job or unknown company")
    ),
    tag = "Jobs"
)]
fn create_job_doc() {}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(JobSearchQuery),
    responses(
        (status = 200, description = "`{jobs}` ordered by title", body = [Job]),
        (status = 400, description = "Unknown or malformed filter")
    ),
    tag = "Jobs",
    security(())
)]
fn list_jobs_doc() {}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "`{job}`", body = Job),
        (status = 404, description = "No such job")
    ),
    tag = "Jobs",
    security(())
)]
fn get_job_doc() {}

#[utoipa::path(
    patch,
    path = "/api/jobs/{id}",
    params(("id" = i32, Path, description = "Job id")),
    request_body = UpdateJob,
    responses(
        (status = 200, description = "`{job}`", body = Job),
        (status = 400, description = "No data or invalid fields"),
        (status = 404, description = "No such job")
    ),
    tag = "Jobs"
)]
fn update_job_doc() {}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "`{deleted: id}`", body = serde_json::Value),
        (status = 404, description = "No such job")
    ),
    tag = "Jobs"
)]
fn delete_job_doc() {}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "`{user, token}`", body = serde_json::Value),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Duplicate username")
    ),
    tag = "Users"
)]
fn create_user_doc() {}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "`{users}` with applied job ids", body = [UserWithJobs]),
        (status = 403, description = "Admin only")
    ),
    tag = "Users"
)]
fn list_users_doc() {}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "`{user}` with applied job ids", body = UserWithJobs),
        (status = 403, description = "Not admin or self"),
        (status = 404, description = "No such user")
    ),
    tag = "Users"
)]
fn get_user_doc() {}

#[utoipa::path(
    patch,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "`{user}`", body = UserResponse),
        (status = 400, description = "No data or invalid fields"),
        (status = 403, description = "Not admin or self, or isAdmin set by non-admin")
    ),
    tag = "Users"
)]
fn update_user_doc() {}

#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "`{deleted: username}`", body = serde_json::Value),
        (status = 404, description = "No such user")
    ),
    tag = "Users"
)]
fn delete_user_doc() {}

#[utoipa::path(
    post,
    path = "/api/users/{username}/jobs/{id}",
    params(
        ("username" = String, Path, description = "Username"),
        ("id" = i32, Path, description = "Job id")
    ),
    responses(
        (status = 200, description = "`{applied: id}`", body = serde_json::Value),
        (status = 400, description = "Invalid job id"),
        (status = 404, description = "No such user"),
        (status = 409, description = "Already applied")
    ),
    tag = "Users"
)]
fn apply_for_job_doc() {}
