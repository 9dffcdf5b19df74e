use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use std::sync::Arc;

use productivity_coach_core::AnalysisRequest;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::AnalysisResponse;

/// `POST /analyze`: usage list in, model advice out.
///
/// Body rejections are turned into the JSON error envelope, never axum's
/// plain-text default.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(body) = payload?;
    let request = AnalysisRequest::from_value(&body)?;
    tracing::debug!(usage_records = request.usage.len(), "analyze request");

    let analysis = state.llm.analyze_usage(&request).await?;
    Ok(Json(AnalysisResponse { analysis }))
}
