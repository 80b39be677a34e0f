//! 路由装配

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::registration::handler::{self, AppState};
use crate::core::middleware::request_logging_middleware;

/// 构建注册服务的全部路由
pub fn build_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handler::show_page).post(handler::submit_page))
        .route(
            "/api/form",
            get(handler::get_form).delete(handler::clear_form),
        )
        .route("/api/form/submit", post(handler::submit_draft))
        .route("/api/form/:field", put(handler::edit_field))
        .route("/api/users", get(handler::list_users))
        .route("/health", get(handler::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
