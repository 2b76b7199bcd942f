use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::pipeline::report;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/day-summary", post(day_summary))
        .route("/api/training-summary", post(training_summary))
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct SummaryRequest {
    record: String,
    weight_kg: Option<f64>,
    height_m: Option<f64>,
}

#[derive(Serialize, Deserialize)]
struct DaySummaryResponse {
    summary: String,
}

#[derive(Serialize, Deserialize)]
struct TrainingSummaryResponse {
    report: String,
}

async fn day_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Json<DaySummaryResponse> {
    let body = state.body_profile(request.weight_kg, request.height_m);
    Json(DaySummaryResponse {
        summary: report::day_activity_summary(&request.record, body),
    })
}

async fn training_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<TrainingSummaryResponse>, TrackerError> {
    let body = state.body_profile(request.weight_kg, request.height_m);
    let report = report::training_summary(&request.record, body)?;
    Ok(Json(TrainingSummaryResponse { report }))
}
