use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;

use productivity_coach_core::{AnalysisRequest, ScoreReport};

use crate::api_error::ApiError;

/// `POST /score`: local heuristic score and category breakdown, no upstream call.
pub async fn score(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScoreReport>, ApiError> {
    let Json(body) = payload?;
    let request = AnalysisRequest::from_value(&body)?;
    let report = ScoreReport::from_records(&request.usage);
    tracing::debug!(usage_records = request.usage.len(), score = report.score, "score request");
    Ok(Json(report))
}
