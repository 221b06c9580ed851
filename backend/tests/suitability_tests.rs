//! Crop suitability scoring tests
//!
//! Tests for the suitability scorer including:
//! - Score bounds and determinism
//! - Individual penalty factors

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::{
    score_crop, suitability_breakdown, AgronomyTables, Crop, IrrigationType, LandParcel,
    RainfallRequirement, Season, SoilType,
};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn parcel(soil_type: SoilType) -> LandParcel {
    LandParcel::new(dec("2"), soil_type)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// pH 8.5 against a 6.0-7.5 window is 1.0 away: 1 - 0.2 = 0.8
    #[test]
    fn test_alkaline_ph_penalty() {
        let mut crop = Crop::new("Rice", Season::Kharif, 150);
        crop.max_temperature = dec("45");
        let mut land = parcel(SoilType::Black);
        land.soil_ph = Some(dec("8.5"));

        let score = score_crop(&crop, &land, Season::Kharif, 7).unwrap();
        assert_eq!(score, dec("0.8"));
    }

    #[test]
    fn test_cold_month_penalty() {
        // January max is 23; a crop needing 25-40 is 2 degrees short: 0.8
        let mut crop = Crop::new("Melon", Season::Rabi, 90);
        crop.min_temperature = dec("25");
        crop.max_temperature = dec("40");
        let score = score_crop(&crop, &parcel(SoilType::Alluvial), Season::Rabi, 1).unwrap();
        assert_eq!(score, dec("0.8"));
    }

    #[test]
    fn test_rainfed_parcel_and_thirsty_crop() {
        let mut crop = Crop::new("Rice", Season::Kharif, 150);
        crop.max_temperature = dec("45");
        crop.rainfall_requirement = RainfallRequirement::High;
        let mut land = parcel(SoilType::Alluvial);
        land.irrigation_type = IrrigationType::Rainfed;

        let breakdown =
            suitability_breakdown(AgronomyTables::standard(), &crop, &land, Season::Kharif, 7);
        assert_eq!(breakdown.score, dec("0.4"));
        assert_eq!(breakdown.penalties.len(), 1);
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let crop = Crop::new("Rice", Season::Kharif, 150);
        assert!(score_crop(&crop, &parcel(SoilType::Black), Season::Kharif, 0).is_err());
        assert!(score_crop(&crop, &parcel(SoilType::Black), Season::Kharif, 13).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn soil_strategy() -> impl Strategy<Value = SoilType> {
        prop::sample::select(SoilType::ALL.to_vec())
    }

    fn season_strategy() -> impl Strategy<Value = Season> {
        prop::sample::select(vec![Season::Kharif, Season::Rabi, Season::Zaid])
    }

    /// pH from 0.0 to 14.0
    fn ph_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=140i64).prop_map(|n| Decimal::new(n, 1))
    }

    /// Rainfall from 0 to 2500 mm
    fn rainfall_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=2500i64).prop_map(Decimal::from)
    }

    fn rainfall_requirement_strategy() -> impl Strategy<Value = RainfallRequirement> {
        prop::sample::select(vec![
            RainfallRequirement::Low,
            RainfallRequirement::Medium,
            RainfallRequirement::High,
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Scores always fall in [0, 1]
        #[test]
        fn prop_score_bounded(
            soil in soil_strategy(),
            crop_season in season_strategy(),
            season in season_strategy(),
            ph in proptest::option::of(ph_strategy()),
            rainfall in proptest::option::of(rainfall_strategy()),
            requirement in rainfall_requirement_strategy(),
            month in 1u32..=12u32
        ) {
            let mut crop = Crop::new("Any", crop_season, 100);
            crop.rainfall_requirement = requirement;
            let mut land = parcel(soil);
            land.soil_ph = ph;
            land.annual_rainfall_mm = rainfall;

            let score = score_crop(&crop, &land, season, month).unwrap();
            prop_assert!(score >= Decimal::ZERO && score <= Decimal::ONE,
                "Score {} out of range", score);
        }

        /// Same inputs, same score
        #[test]
        fn prop_score_deterministic(
            soil in soil_strategy(),
            season in season_strategy(),
            ph in ph_strategy(),
            month in 1u32..=12u32
        ) {
            let crop = Crop::new("Wheat", Season::Rabi, 120);
            let mut land = parcel(soil);
            land.soil_ph = Some(ph);

            let first = score_crop(&crop, &land, season, month).unwrap();
            let second = score_crop(&crop, &land, season, month).unwrap();
            prop_assert_eq!(first, second);
        }

        /// A single distance penalty never drops below 0.3
        #[test]
        fn prop_ph_penalty_floor(ph in ph_strategy()) {
            let mut crop = Crop::new("Rice", Season::Kharif, 150);
            crop.max_temperature = dec("45");
            let mut land = parcel(SoilType::Black);
            land.soil_ph = Some(ph);

            let score = score_crop(&crop, &land, Season::Kharif, 7).unwrap();
            prop_assert!(score >= dec("0.3"));
        }
    }
}
