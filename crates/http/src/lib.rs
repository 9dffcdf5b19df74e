//! HTTP API server for productivity-coach.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod response_types;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use productivity_coach_llm::LlmClient;

pub use response_types::{AnalysisResponse, HealthResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Read-only after startup; wrapped in `Arc` for sharing across handlers.
#[derive(Debug)]
pub struct AppState {
    /// Completion client carrying the injected API key
    pub llm: LlmClient,
}

impl AppState {
    #[must_use]
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

/// Builds the router. Request bodies are not size-limited: a usage list of
/// any length is accepted.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/api/version", get(version))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/score", post(handlers::score::score))
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
