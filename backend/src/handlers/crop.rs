//! HTTP handlers for crop advisory endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::crop::{
    CropAdvisoryService, RecommendCropsInput, RecommendationsResponse, ScoreCropInput,
    ScoreCropResponse,
};
use crate::AppState;
use shared::Crop;

/// List the built-in crop catalog
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<Crop>> {
    let service = CropAdvisoryService::new(state.tables);
    Json(service.catalog())
}

/// Score one crop for a parcel
pub async fn score_crop(
    State(state): State<AppState>,
    Json(input): Json<ScoreCropInput>,
) -> AppResult<Json<ScoreCropResponse>> {
    let service = CropAdvisoryService::new(state.tables);
    let response = service.score(input)?;
    Ok(Json(response))
}

/// Rank crops for a parcel
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(input): Json<RecommendCropsInput>,
) -> AppResult<Json<RecommendationsResponse>> {
    let service = CropAdvisoryService::new(state.tables);
    let response = service.recommend(input)?;
    Ok(Json(response))
}
