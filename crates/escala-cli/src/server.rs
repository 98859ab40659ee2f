//! HTTP endpoint for roster comparison.
//!
//! `POST /comparar` (alias `POST /compare`) takes a multipart body with two
//! PDF files in the fields `pdf1` and `pdf2` and answers with the merged
//! comparison as JSON.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use escala_core::error::EscalaError;
use escala_core::extraction::TextExtractor;
use escala_core::model::{Comparison, ParsedRoster};
use escala_core::CompareOptions;
use serde::Serialize;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;

const LEFT_FIELD: &str = "pdf1";
const RIGHT_FIELD: &str = "pdf2";

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Escala(#[from] EscalaError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Escala(EscalaError::MissingUpload(_)) => (
                StatusCode::BAD_REQUEST,
                "MISSING_UPLOAD",
                format!("Both roster PDFs are required ('{LEFT_FIELD}' and '{RIGHT_FIELD}')"),
            ),
            ApiError::Escala(e) if e.is_decode_failure() => {
                tracing::error!(error = %self, "failed to decode roster PDF");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DECODE_FAILED",
                    "Failed to process the PDFs".to_string(),
                )
            }
            ApiError::Escala(_) | ApiError::Internal(_) => {
                // Detail stays in the server log
                tracing::error!(error = %self, "failed to compare rosters");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    "Failed to process the PDFs".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    pub options: CompareOptions,
}

pub fn build_router(state: AppState, static_dir: Option<&Path>, max_upload_bytes: usize) -> Router {
    let mut router = Router::new()
        .route("/comparar", post(compare))
        .route("/compare", post(compare));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: ServeConfig, extractor: Arc<dyn TextExtractor>) -> Result<(), EscalaError> {
    let state = AppState {
        extractor,
        options: CompareOptions {
            filter_to_reference_month: config.filter_to_reference_month,
        },
    };
    let app = build_router(state, config.static_dir.as_deref(), config.max_upload_bytes);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        filter_to_reference_month = config.filter_to_reference_month,
        "Listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn compare(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Comparison>, ApiError> {
    let mut left = None;
    let mut right = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let slot = match field.name() {
            Some(LEFT_FIELD) => &mut left,
            Some(RIGHT_FIELD) => &mut right,
            other => {
                tracing::warn!(field = ?other, "ignoring unexpected upload field");
                continue;
            }
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        *slot = Some(bytes);
    }

    let left = left.ok_or(EscalaError::MissingUpload(LEFT_FIELD))?;
    let right = right.ok_or(EscalaError::MissingUpload(RIGHT_FIELD))?;

    // The two documents share nothing until the merge
    let (left, right) = tokio::join!(
        parse_upload(state.extractor.clone(), left),
        parse_upload(state.extractor.clone(), right),
    );
    let (left, right) = (left?, right?);

    let comparison = escala_core::compare_parsed(&left, &right, &state.options);
    tracing::info!(
        name1 = %comparison.name1,
        name2 = %comparison.name2,
        rows = comparison.rows.len(),
        "rosters compared"
    );

    Ok(Json(comparison))
}

async fn parse_upload(
    extractor: Arc<dyn TextExtractor>,
    pdf: axum::body::Bytes,
) -> Result<ParsedRoster, ApiError> {
    tokio::task::spawn_blocking(move || escala_core::parse_pdf(&pdf, extractor.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}
