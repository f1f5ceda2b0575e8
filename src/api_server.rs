// Axum API Server Module
//
// Purpose: HTTP surface for the rainwater harvesting analysis engine
// Endpoints: JSON analysis, form analysis, health check

#[cfg(feature = "api")]
use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Form, Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use serde::Serialize;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::error::AnalysisError;

#[cfg(feature = "api")]
use crate::rainfall::PrecipitationSource;

#[cfg(feature = "api")]
use crate::report::{AnalysisReport, Analyzer};

#[cfg(feature = "api")]
use crate::request::{AnalysisRequest, FormRequest, RequestError};

#[cfg(feature = "api")]
pub const API_VERSION: &str = "2.0";

#[cfg(feature = "api")]
const FEATURES: [&str; 10] = [
    "Feasibility Check",
    "Local Rainfall Data",
    "Runoff Generation Capacity",
    "Groundwater & Aquifer Information",
    "Soil & Geology Assessment",
    "Suggested Recharge Structures",
    "Recharge Structure Dimensions",
    "Cost Estimation & Cost-Benefit Analysis",
    "Implementation & Maintenance Planning",
    "Regulatory Compliance",
];

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
pub struct AppState<S> {
    pub analyzer: Arc<Analyzer<S>>,
}

#[cfg(feature = "api")]
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

#[cfg(feature = "api")]
impl<S: PrecipitationSource> AppState<S> {
    pub fn new(source: S) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new(source)),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router<S: PrecipitationSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Analysis endpoints
        .route("/api/v1/water-harvesting/analyze", post(analyze_json::<S>))
        .route("/analyze", post(analyze_form::<S>))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": API_VERSION,
        "features": FEATURES,
    }))
}

/// Report plus response metadata. The report keeps its own section order.
#[cfg(feature = "api")]
#[derive(Serialize)]
struct AnalysisEnvelope {
    status: &'static str,
    timestamp: String,
    api_version: &'static str,
    #[serde(flatten)]
    report: AnalysisReport,
}

#[cfg(feature = "api")]
async fn run_analysis<S: PrecipitationSource>(
    state: &AppState<S>,
    request: AnalysisRequest,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let input = request.validate()?;
    let report = state.analyzer.analyze(&input).await?;

    Ok(Json(AnalysisEnvelope {
        status: "success",
        timestamp: chrono::Utc::now().to_rfc3339(),
        api_version: API_VERSION,
        report,
    }))
}

#[cfg(feature = "api")]
async fn analyze_json<S: PrecipitationSource + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let request = AnalysisRequest::from_json(&body)?;
    run_analysis(&state, request).await
}

#[cfg(feature = "api")]
async fn analyze_form<S: PrecipitationSource + 'static>(
    State(state): State<AppState<S>>,
    form: Result<Form<FormRequest>, FormRejection>,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = form.into_request()?;
    run_analysis(&state, request).await
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(feature = "api")]
impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Request(e) => e.into(),
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected analysis request: {}", msg);
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Internal(msg) => {
                tracing::error!("Error in water harvesting analysis: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "Internal server error",
                        "message": msg,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
