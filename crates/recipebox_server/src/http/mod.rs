//! Axum router for the recipe API.
//!
//! # Responsibility
//! - Map HTTP routes onto `RecipeService` calls.
//! - Translate failures into JSON error responses.
//!
//! # Invariants
//! - No handler touches the collection file directly.
//! - A panicking handler yields a 500 response; the server keeps running.

pub mod error;
pub mod recipes;

use crate::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use error::ApiError;
use log::info;
use serde_json::{json, Value};
use std::any::Any;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;

/// Create the application router.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .with_state(state);

    with_middleware(routes)
}

/// Wraps a router with request logging and panic recovery.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(log_request))
        .layer(CatchPanicLayer::custom(panic_response))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": recipebox_core::core_version(),
    }))
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    info!(
        "event=http_request module=http method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".to_string()).into_response()
}
