//! REST API server for the synthesis engine
//!
//! Exposes the report pipeline via HTTP endpoints
//! Integrates with the dashboard frontend

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::SynthesisError;
use crate::models::{Competitor, MarketSnapshot, MarketTrend, ReviewSample};
use crate::snapshot::demo_snapshot;
use crate::synthesis::SynthesisEngine;

/// =============================
/// Request Models
/// =============================

/// Body for `/api/report`. All fields optional: an empty object (`{}`)
/// runs the shipped demo snapshot.
#[derive(Debug, Deserialize, Default)]
pub struct ReportRequest {
    #[serde(default)]
    pub competitors: Option<Vec<Competitor>>,
    #[serde(default)]
    pub trends: Option<Vec<MarketTrend>>,
    #[serde(default)]
    pub reviews: Option<Vec<ReviewSample>>,
}

impl ReportRequest {
    fn into_snapshot(self) -> crate::Result<MarketSnapshot> {
        if self.competitors.is_none() && self.trends.is_none() && self.reviews.is_none() {
            return Ok(demo_snapshot());
        }
        MarketSnapshot::new(
            self.competitors.unwrap_or_default(),
            self.trends.unwrap_or_default(),
            self.reviews.unwrap_or_default(),
        )
    }
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<SynthesisEngine>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Report Endpoint
/// =============================

async fn generate_report(
    State(state): State<ApiState>,
    Json(req): Json<ReportRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let snapshot = match req.into_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!("Invalid snapshot: {}", e))),
            );
        }
    };

    info!(
        competitors = snapshot.competitors.len(),
        "Received report request"
    );

    match state.engine.generate_report(&snapshot).await {
        Ok(report) => (StatusCode::OK, Json(ApiResponse::success(report))),
        Err(e @ SynthesisError::MisalignedSeries(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Invalid snapshot: {}", e))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Report synthesis failed: {}", e))),
        ),
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(engine: Arc<SynthesisEngine>) -> Router {
    let state = ApiState { engine };

    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/report", post(generate_report))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    engine: Arc<SynthesisEngine>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(engine);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
