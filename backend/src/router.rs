use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, handlers, middleware, state::AppState};

/// Assembles the full API: public, authenticated and admin-only routes plus
/// the shared tracing, request-id and CORS layers.
pub fn build_router(state: AppState) -> Router {
    // No auth
    let public_routes = Router::new()
        .route("/api/auth/token", post(handlers::auth::token))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/companies", get(handlers::companies::list_companies))
        .route(
            "/api/companies/{handle}",
            get(handlers::companies::get_company),
        )
        .route("/api/jobs", get(handlers::jobs::list_jobs))
        .route("/api/jobs/{id}", get(handlers::jobs::get_job));

    // Any valid token; handlers check admin-or-self
    let user_routes = Router::new()
        .route(
            "/api/users/{username}",
            get(handlers::users::get_user)
                .patch(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/api/users/{username}/jobs/{id}",
            post(handlers::users::apply_for_job),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    // Token with admin flag
    let admin_routes = Router::new()
        .route("/api/companies", post(handlers::companies::create_company))
        .route(
            "/api/companies/{handle}",
            patch(handlers::companies::update_company)
                .delete(handlers::companies::delete_company),
        )
        .route("/api/jobs", post(handlers::jobs::create_job))
        .route(
            "/api/jobs/{id}",
            patch(handlers::jobs::update_job).delete(handlers::jobs::delete_job),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_admin,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(middleware::log_error_responses))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
