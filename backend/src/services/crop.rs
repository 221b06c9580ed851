//! Crop advisory service: suitability scores and ranked recommendations

use std::sync::Arc;

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use shared::{
    default_crop_catalog, recommend_crops_for_month, score_crop_with, suitability_breakdown,
    AgronomyTables, Crop, LandParcel, Recommendation, Season, SuitabilityBreakdown,
};

/// Crop advisory service over the loaded reference tables
#[derive(Clone)]
pub struct CropAdvisoryService {
    tables: Arc<AgronomyTables>,
}

/// Input for scoring one crop on one parcel
#[derive(Debug, Deserialize)]
pub struct ScoreCropInput {
    pub crop: Crop,
    pub parcel: LandParcel,
    pub season: Season,
    /// Defaults to the current month
    pub month: Option<u32>,
}

/// Score with the penalties that produced it
#[derive(Debug, Serialize)]
pub struct ScoreCropResponse {
    pub crop_name: String,
    pub season: Season,
    pub month: u32,
    pub suitability_score: Decimal,
    pub breakdown: SuitabilityBreakdown,
}

/// Input for ranking crops on a parcel
#[derive(Debug, Deserialize)]
pub struct RecommendCropsInput {
    pub parcel: LandParcel,
    pub season: Option<Season>,
    pub month: Option<u32>,
    /// Candidate crops; the built-in catalog when omitted
    pub crops: Option<Vec<Crop>>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub season: Season,
    pub month: u32,
    pub recommendations: Vec<Recommendation>,
}

fn current_month() -> u32 {
    Local::now().month()
}

impl CropAdvisoryService {
    pub fn new(tables: Arc<AgronomyTables>) -> Self {
        Self { tables }
    }

    /// Built-in crop catalog
    pub fn catalog(&self) -> Vec<Crop> {
        default_crop_catalog()
    }

    /// Score a single crop
    pub fn score(&self, input: ScoreCropInput) -> AppResult<ScoreCropResponse> {
        let month = input.month.unwrap_or_else(current_month);
        let score = score_crop_with(&self.tables, &input.crop, &input.parcel, input.season, month)?;
        let breakdown =
            suitability_breakdown(&self.tables, &input.crop, &input.parcel, input.season, month);

        tracing::debug!(
            crop = %input.crop.name,
            season = %input.season,
            month,
            %score,
            penalties = breakdown.penalties.len(),
            "Scored crop"
        );

        Ok(ScoreCropResponse {
            crop_name: input.crop.name,
            season: input.season,
            month,
            suitability_score: score,
            breakdown,
        })
    }

    /// Rank candidate crops for a parcel
    pub fn recommend(&self, input: RecommendCropsInput) -> AppResult<RecommendationsResponse> {
        let month = input.month.unwrap_or_else(current_month);
        let season = input.season.unwrap_or_else(|| Season::for_month(month));
        let crops = input.crops.unwrap_or_else(default_crop_catalog);

        let recommendations =
            recommend_crops_for_month(&self.tables, &input.parcel, Some(season), month, &crops)?;

        tracing::info!(
            parcel_id = %input.parcel.id,
            season = %season,
            candidates = crops.len(),
            recommended = recommendations.len(),
            "Computed crop recommendations"
        );

        Ok(RecommendationsResponse {
            season,
            month,
            recommendations,
        })
    }
}
