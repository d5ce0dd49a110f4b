//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/contact`, `GET /api/sections[/{container}]` and
//! `GET /health`. Middleware: CORS, request tracing, panic recovery.
//!
//! The static site in `web_dir` is served for every other path when the
//! directory exists; otherwise only the API is served.

use std::any::Any;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::error::{MSG_INTERNAL, error_response};
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let web_dir = state.web_dir.clone();

    let api_routes = Router::new()
        .route(
            "/contact",
            post(handlers::contact::submit_contact)
                .fallback(handlers::contact::method_not_allowed),
        )
        .route("/sections", get(handlers::sections::list_sections))
        .route("/sections/{container}", get(handlers::sections::get_section));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.is_dir() {
        router = router.fallback_service(ServeDir::new(&web_dir));
        tracing::info!(path = %web_dir.display(), "static site serving enabled");
    }

    router
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Turn a handler panic into the generic 500 body. The server keeps running.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(%detail, "request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
}
