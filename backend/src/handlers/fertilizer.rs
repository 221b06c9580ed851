//! HTTP handlers for fertilizer planning endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::fertilizer::{CreatePlanInput, FertilizerService};
use crate::AppState;
use shared::{ApplicationStage, FertilizerPlanRecord};

/// Compute a fertilizer plan
pub async fn create_fertilizer_plan(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanInput>,
) -> AppResult<(StatusCode, Json<FertilizerPlanRecord>)> {
    let service = FertilizerService::new(state.tables);
    let record = service.create_plan(input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Get the application schedule for a season
pub async fn get_application_schedule(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> AppResult<Json<Vec<ApplicationStage>>> {
    let service = FertilizerService::new(state.tables);
    let stages = service.schedule(&season)?;
    Ok(Json(stages))
}
