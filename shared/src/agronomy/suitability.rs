//! Crop suitability scoring
//!
//! A score starts at 1.0 and every unsuitable dimension multiplies it by a
//! penalty. Distance-based penalties are floored at 0.3 so that a single
//! factor cannot zero the score on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::agronomy::tables::AgronomyTables;
use crate::error::{CoreError, CoreResult};
use crate::models::{Crop, IrrigationType, LandParcel, RainfallRequirement, Season};
use crate::types::round2;
use crate::validation::{validate_month, validate_parcel};

/// Dimension that lowered a score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityFactor {
    SoilType,
    SoilPh,
    Temperature,
    Water,
    Season,
}

/// A multiplier applied to the score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Penalty {
    pub factor: SuitabilityFactor,
    pub multiplier: Decimal,
}

/// Score together with the penalties that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitabilityBreakdown {
    /// 0-1, rounded to two decimals
    pub score: Decimal,
    pub penalties: Vec<Penalty>,
}

fn tenths(n: i64) -> Decimal {
    Decimal::new(n, 1)
}

/// Distance from `value` to the nearer bound of `[low, high]`, or `None` when inside
fn distance_outside(value: Decimal, low: Decimal, high: Decimal) -> Option<Decimal> {
    if low <= value && value <= high {
        None
    } else {
        Some((value - low).abs().min((value - high).abs()))
    }
}

/// `max(0.3, 1 - slope * distance)`
fn floored_penalty(slope: Decimal, distance: Decimal) -> Decimal {
    (Decimal::ONE - slope * distance).max(tenths(3))
}

fn water_penalty(crop: &Crop, parcel: &LandParcel) -> Option<Decimal> {
    match (parcel.irrigation_type, crop.rainfall_requirement) {
        (IrrigationType::Rainfed, RainfallRequirement::High) => Some(tenths(4)),
        (IrrigationType::Irrigated, _) => None,
        _ => {
            let rainfall = parcel.annual_rainfall_mm?;
            match crop.rainfall_requirement {
                RainfallRequirement::High if rainfall < Decimal::from(700) => Some(tenths(5)),
                RainfallRequirement::Medium if rainfall < Decimal::from(500) => Some(tenths(7)),
                _ => None,
            }
        }
    }
}

/// Penalties for a crop on a parcel in a given season and month.
/// Inputs are assumed valid.
pub fn suitability_breakdown(
    tables: &AgronomyTables,
    crop: &Crop,
    parcel: &LandParcel,
    season: Season,
    month: u32,
) -> SuitabilityBreakdown {
    let mut penalties = Vec::new();

    if !crop.is_suitable_soil(parcel.soil_type) {
        penalties.push(Penalty {
            factor: SuitabilityFactor::SoilType,
            multiplier: tenths(5),
        });
    }

    if let Some(ph) = parcel.soil_ph {
        if let Some(diff) = distance_outside(ph, crop.soil_ph_min, crop.soil_ph_max) {
            penalties.push(Penalty {
                factor: SuitabilityFactor::SoilPh,
                multiplier: floored_penalty(tenths(2), diff),
            });
        }
    }

    let month_max = tables.seasonal_temperature(month).max;
    if let Some(diff) = distance_outside(month_max, crop.min_temperature, crop.max_temperature) {
        penalties.push(Penalty {
            factor: SuitabilityFactor::Temperature,
            multiplier: floored_penalty(tenths(1), diff),
        });
    }

    if let Some(multiplier) = water_penalty(crop, parcel) {
        penalties.push(Penalty {
            factor: SuitabilityFactor::Water,
            multiplier,
        });
    }

    if crop.season != season {
        penalties.push(Penalty {
            factor: SuitabilityFactor::Season,
            multiplier: tenths(2),
        });
    }

    let raw = penalties
        .iter()
        .fold(Decimal::ONE, |score, p| score * p.multiplier);

    SuitabilityBreakdown {
        score: round2(raw),
        penalties,
    }
}

/// Suitability score (0-1) of a crop for a parcel, using the given tables
pub fn score_crop_with(
    tables: &AgronomyTables,
    crop: &Crop,
    parcel: &LandParcel,
    season: Season,
    month: u32,
) -> CoreResult<Decimal> {
    validate_parcel(parcel)?;
    validate_month(month).map_err(|message| CoreError::invalid_input("month", message))?;
    Ok(suitability_breakdown(tables, crop, parcel, season, month).score)
}

/// Suitability score (0-1) of a crop for a parcel, using the built-in tables
pub fn score_crop(
    crop: &Crop,
    parcel: &LandParcel,
    season: Season,
    month: u32,
) -> CoreResult<Decimal> {
    score_crop_with(AgronomyTables::standard(), crop, parcel, season, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// Crop whose temperature window covers every month's maximum
    fn tolerant_crop(season: Season) -> Crop {
        let mut crop = Crop::new("Test", season, 100);
        crop.min_temperature = Decimal::from(10);
        crop.max_temperature = Decimal::from(45);
        crop
    }

    fn black_parcel() -> LandParcel {
        LandParcel::new(Decimal::from(2), SoilType::Black)
    }

    #[test]
    fn test_perfect_match_scores_one() {
        let crop = tolerant_crop(Season::Kharif);
        let score = score_crop(&crop, &black_parcel(), Season::Kharif, 7).unwrap();
        assert_eq!(score, Decimal::ONE);
    }

    #[test]
    fn test_soil_mismatch_halves_score() {
        let crop = tolerant_crop(Season::Kharif);
        let parcel = LandParcel::new(Decimal::from(1), SoilType::Desert);
        assert_eq!(score_crop(&crop, &parcel, Season::Kharif, 7).unwrap(), dec("0.5"));
    }

    #[test]
    fn test_ph_distance_penalty() {
        // pH 8.5 against 6.0-7.5 is 1.0 away: max(0.3, 1 - 0.2) = 0.8
        let crop = tolerant_crop(Season::Kharif);
        let mut parcel = black_parcel();
        parcel.soil_ph = Some(dec("8.5"));
        assert_eq!(score_crop(&crop, &parcel, Season::Kharif, 7).unwrap(), dec("0.8"));
    }

    #[test]
    fn test_ph_penalty_is_floored() {
        let crop = tolerant_crop(Season::Kharif);
        let mut parcel = black_parcel();
        parcel.soil_ph = Some(dec("1.0"));
        assert_eq!(score_crop(&crop, &parcel, Season::Kharif, 7).unwrap(), dec("0.3"));
    }

    #[test]
    fn test_temperature_penalty_uses_month_max() {
        // May max is 40; crop tops out at 35, 5 degrees away: 1 - 0.5 = 0.5
        let crop = Crop::new("Test", Season::Zaid, 100);
        let score = score_crop(&crop, &black_parcel(), Season::Zaid, 5).unwrap();
        assert_eq!(score, dec("0.5"));
    }

    #[test]
    fn test_rainfed_high_water_crop() {
        let mut crop = tolerant_crop(Season::Kharif);
        crop.rainfall_requirement = RainfallRequirement::High;
        let mut parcel = black_parcel();
        parcel.irrigation_type = IrrigationType::Rainfed;
        parcel.annual_rainfall_mm = Some(Decimal::from(1200));
        assert_eq!(score_crop(&crop, &parcel, Season::Kharif, 7).unwrap(), dec("0.4"));
    }

    #[test]
    fn test_irrigated_parcel_ignores_rainfall() {
        let mut crop = tolerant_crop(Season::Kharif);
        crop.rainfall_requirement = RainfallRequirement::High;
        let mut parcel = black_parcel();
        parcel.irrigation_type = IrrigationType::Irrigated;
        parcel.annual_rainfall_mm = Some(Decimal::from(100));
        assert_eq!(score_crop(&crop, &parcel, Season::Kharif, 7).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_low_rainfall_penalties() {
        let mut parcel = black_parcel();
        parcel.annual_rainfall_mm = Some(Decimal::from(450));

        let mut high = tolerant_crop(Season::Kharif);
        high.rainfall_requirement = RainfallRequirement::High;
        assert_eq!(score_crop(&high, &parcel, Season::Kharif, 7).unwrap(), dec("0.5"));

        let medium = tolerant_crop(Season::Kharif);
        assert_eq!(score_crop(&medium, &parcel, Season::Kharif, 7).unwrap(), dec("0.7"));

        let mut low = tolerant_crop(Season::Kharif);
        low.rainfall_requirement = RainfallRequirement::Low;
        assert_eq!(score_crop(&low, &parcel, Season::Kharif, 7).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_unknown_rainfall_has_no_penalty() {
        let mut crop = tolerant_crop(Season::Kharif);
        crop.rainfall_requirement = RainfallRequirement::High;
        assert_eq!(
            score_crop(&crop, &black_parcel(), Season::Kharif, 7).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_season_mismatch() {
        let crop = tolerant_crop(Season::Rabi);
        assert_eq!(
            score_crop(&crop, &black_parcel(), Season::Kharif, 7).unwrap(),
            dec("0.2")
        );
    }

    #[test]
    fn test_penalties_compose_and_round() {
        // soil 0.5 * pH max(0.3, 1 - 0.2*0.7)=0.86 * season 0.2 = 0.086 -> 0.09
        let crop = tolerant_crop(Season::Rabi);
        let mut parcel = LandParcel::new(Decimal::from(1), SoilType::Red);
        parcel.soil_ph = Some(dec("5.3"));
        let breakdown =
            suitability_breakdown(AgronomyTables::standard(), &crop, &parcel, Season::Kharif, 7);
        assert_eq!(breakdown.penalties.len(), 3);
        assert_eq!(breakdown.score, dec("0.09"));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let crop = tolerant_crop(Season::Kharif);
        let mut parcel = black_parcel();
        parcel.soil_ph = Some(Decimal::from(20));
        assert!(score_crop(&crop, &parcel, Season::Kharif, 7).is_err());
        assert!(score_crop(&crop, &black_parcel(), Season::Kharif, 0).is_err());
    }
}
