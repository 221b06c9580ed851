//! Fertilizer planning service

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{
    application_schedule, compute_fertilizer_doses_with, plan_record, AgronomyTables,
    ApplicationStage, Crop, FertilizerPlanRecord, LandParcel, Season,
};

/// Fertilizer planning service over the loaded reference tables
#[derive(Clone)]
pub struct FertilizerService {
    tables: Arc<AgronomyTables>,
}

/// Input for computing a dose plan
#[derive(Debug, Deserialize)]
pub struct CreatePlanInput {
    pub parcel: LandParcel,
    pub crop: Crop,
    pub season: Season,
    pub target_yield_per_acre: Option<Decimal>,
    /// Catalog id of the crop; the crop record's own id when omitted
    pub crop_id: Option<Uuid>,
    /// Defaults to the current year
    pub year: Option<i32>,
    #[serde(default)]
    pub additional_notes: String,
}

impl FertilizerService {
    pub fn new(tables: Arc<AgronomyTables>) -> Self {
        Self { tables }
    }

    /// Compute doses and wrap them in a record ready for storage
    pub fn create_plan(&self, input: CreatePlanInput) -> AppResult<FertilizerPlanRecord> {
        let plan = compute_fertilizer_doses_with(
            &self.tables,
            &input.parcel,
            &input.crop,
            input.season,
            input.target_yield_per_acre,
        )?;

        tracing::info!(
            parcel_id = %plan.parcel_id,
            crop = %plan.crop_name,
            season = %plan.season,
            nitrogen_kg = %plan.nutrients.nitrogen_kg,
            total_cost = %plan.total_cost,
            "Computed fertilizer plan"
        );

        let now = Utc::now();
        let year = input.year.unwrap_or_else(|| now.year());
        let crop_id = input.crop_id.unwrap_or(input.crop.id);
        Ok(plan_record(plan, crop_id, year, input.additional_notes, now))
    }

    /// Application timeline for a season name ("kharif", "rabi", "zaid")
    pub fn schedule(&self, season: &str) -> AppResult<Vec<ApplicationStage>> {
        let season =
            Season::from_str(season).ok_or_else(|| AppError::UnknownSeason(season.to_string()))?;
        Ok(application_schedule(season))
    }
}
