//! Crop recommendation ranking
//!
//! Every catalog crop is scored for the parcel; crops at or below the
//! suitability cut-off are dropped and the rest are ranked by score, then by
//! projected revenue. Results are computed fresh on every call.

use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use crate::agronomy::suitability::suitability_breakdown;
use crate::agronomy::tables::AgronomyTables;
use crate::error::{CoreError, CoreResult};
use crate::models::{Crop, LandParcel, Recommendation, Season};
use crate::types::{checked_mul, round2};
use crate::validation::{validate_month, validate_parcel};

/// Scores at or below this value are treated as unsuitable
pub fn suitability_cutoff() -> Decimal {
    Decimal::new(3, 1)
}

fn key_requirements(crop: &Crop) -> Vec<String> {
    vec![
        format!("Soil pH: {}-{}", crop.soil_ph_min, crop.soil_ph_max),
        format!(
            "Temperature: {}°C-{}°C",
            crop.min_temperature, crop.max_temperature
        ),
        format!("Growing period: {} days", crop.duration_days),
    ]
}

fn build_recommendation(
    crop: &Crop,
    parcel: &LandParcel,
    season: Season,
    score: Decimal,
) -> CoreResult<Recommendation> {
    let yield_per_acre = checked_mul(
        "expected_yield_per_acre",
        crop.expected_yield_per_acre,
        score,
    )?;
    let total_yield = checked_mul("area", yield_per_acre, parcel.area)?;
    let revenue = checked_mul(
        "market_price_per_unit",
        total_yield,
        crop.market_price_per_unit,
    )?;

    Ok(Recommendation {
        crop: crop.clone(),
        suitability_score: score,
        estimated_yield_per_acre: round2(yield_per_acre),
        total_estimated_yield: round2(total_yield),
        estimated_revenue: round2(revenue),
        season,
        growing_duration_days: crop.duration_days,
        water_requirement: crop.rainfall_requirement.label().to_string(),
        key_requirements: key_requirements(crop),
        cultivation_tips: crop.planting_method.clone(),
        market_price: crop.market_price_per_unit,
    })
}

/// Rank `crops` for a parcel, scoring temperatures against `month`.
///
/// When `season` is `None` it is derived from `month`.
pub fn recommend_crops_for_month(
    tables: &AgronomyTables,
    parcel: &LandParcel,
    season: Option<Season>,
    month: u32,
    crops: &[Crop],
) -> CoreResult<Vec<Recommendation>> {
    validate_parcel(parcel)?;
    validate_month(month).map_err(|message| CoreError::invalid_input("month", message))?;

    let season = season.unwrap_or_else(|| Season::for_month(month));
    let cutoff = suitability_cutoff();

    let mut recommendations = Vec::new();
    for crop in crops {
        let score = suitability_breakdown(tables, crop, parcel, season, month).score;
        if score > cutoff {
            recommendations.push(build_recommendation(crop, parcel, season, score)?);
        }
    }

    // Stable: equal keys keep catalog order
    recommendations.sort_by(|a, b| {
        b.suitability_score
            .cmp(&a.suitability_score)
            .then_with(|| b.estimated_revenue.cmp(&a.estimated_revenue))
    });

    Ok(recommendations)
}

/// Rank `crops` for a parcel as of today, with the built-in tables
pub fn recommend_crops(
    parcel: &LandParcel,
    season: Option<Season>,
    crops: &[Crop],
) -> CoreResult<Vec<Recommendation>> {
    let month = Local::now().month();
    recommend_crops_for_month(AgronomyTables::standard(), parcel, season, month, crops)
}
