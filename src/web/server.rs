//! Axum web server for arealens.
//!
//! Serves the single analysis endpoint. The handler never signals failure
//! through status codes: unparseable and unmatched queries come back as
//! 200 responses whose summary asks for clarification.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::{Analysis, Analyzer};
use crate::config::Settings;

/// Application state shared across handlers.
pub struct AppState {
    /// The analysis engine over the shared read-only dataset.
    pub analyzer: Analyzer,
}

/// Build the axum router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/analyze", post(analyze))
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn serve(
    settings: &Settings,
    analyzer: Analyzer,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { analyzer });
    let app = router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "arealens listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    /// Missing field behaves like an empty query and falls through to the
    /// generic fallback answer.
    #[serde(default)]
    query: String,
}

/// POST /api/analyze - Answer one query against the shared dataset.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<Analysis> {
    Json(state.analyzer.answer(&req.query))
}
