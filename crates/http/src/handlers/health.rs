use axum::Json;
use productivity_coach_core::HEALTH_STATUS;

use crate::response_types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTH_STATUS })
}
