//! Crop recommendation ranking tests
//!
//! Verifies filtering, projections and ordering of recommendations.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::{
    default_crop_catalog, recommend_crops_for_month, AgronomyTables, Crop, LandParcel, Season,
    SoilType,
};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn tables() -> &'static AgronomyTables {
    AgronomyTables::standard()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_revenue_projection() {
        let mut crop = Crop::new("Chickpea", Season::Rabi, 120);
        crop.expected_yield_per_acre = dec("8");
        crop.market_price_per_unit = dec("5000");
        let parcel = LandParcel::new(dec("2.5"), SoilType::Black);

        let recs =
            recommend_crops_for_month(tables(), &parcel, Some(Season::Rabi), 11, &[crop]).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].estimated_yield_per_acre, dec("8"));
        assert_eq!(recs[0].total_estimated_yield, dec("20"));
        assert_eq!(recs[0].estimated_revenue, dec("100000"));
        assert_eq!(recs[0].market_price, dec("5000"));
    }

    #[test]
    fn test_key_requirements_text() {
        let crop = Crop::new("Wheat", Season::Rabi, 120);
        let parcel = LandParcel::new(dec("1"), SoilType::Alluvial);
        let recs =
            recommend_crops_for_month(tables(), &parcel, Some(Season::Rabi), 11, &[crop]).unwrap();
        assert_eq!(
            recs[0].key_requirements,
            vec![
                "Soil pH: 6.0-7.5".to_string(),
                "Temperature: 15°C-35°C".to_string(),
                "Growing period: 120 days".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let parcel = LandParcel::new(dec("1"), SoilType::Alluvial);
        let recs = recommend_crops_for_month(tables(), &parcel, None, 6, &[]).unwrap();
        assert!(recs.is_empty());
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

    /// Area from 0.1 to 50.0 acres
    fn area_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=500i64).prop_map(|n| Decimal::new(n, 1))
    }

    fn ph_strategy() -> impl Strategy<Value = Decimal> {
        (40i64..=95i64).prop_map(|n| Decimal::new(n, 1))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Nothing at or below the 0.3 cut-off is recommended
        #[test]
        fn prop_no_low_scores(
            soil in soil_strategy(),
            area in area_strategy(),
            ph in ph_strategy(),
            month in 1u32..=12u32
        ) {
            let mut parcel = LandParcel::new(area, soil);
            parcel.soil_ph = Some(ph);
            let recs = recommend_crops_for_month(
                tables(), &parcel, None, month, &default_crop_catalog()
            ).unwrap();
            for rec in &recs {
                prop_assert!(rec.suitability_score > dec("0.3"));
            }
        }

        /// Score descending, then revenue descending
        #[test]
        fn prop_sorted(
            soil in soil_strategy(),
            area in area_strategy(),
            month in 1u32..=12u32
        ) {
            let parcel = LandParcel::new(area, soil);
            let recs = recommend_crops_for_month(
                tables(), &parcel, None, month, &default_crop_catalog()
            ).unwrap();
            for pair in recs.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(
                    a.suitability_score > b.suitability_score
                        || (a.suitability_score == b.suitability_score
                            && a.estimated_revenue >= b.estimated_revenue)
                );
            }
        }

        /// Dropping one candidate keeps the relative order of the rest
        #[test]
        fn prop_removal_preserves_order(
            soil in soil_strategy(),
            month in 1u32..=12u32,
            drop_index in 0usize..12usize
        ) {
            let parcel = LandParcel::new(dec("3"), soil);
            let catalog = default_crop_catalog();
            let full: Vec<String> = recommend_crops_for_month(
                tables(), &parcel, None, month, &catalog
            ).unwrap().into_iter().map(|r| r.crop.name).collect();

            let dropped = catalog[drop_index].name.clone();
            let reduced: Vec<Crop> = catalog
                .into_iter()
                .filter(|c| c.name != dropped)
                .collect();
            let partial: Vec<String> = recommend_crops_for_month(
                tables(), &parcel, None, month, &reduced
            ).unwrap().into_iter().map(|r| r.crop.name).collect();

            let expected: Vec<String> = full.into_iter().filter(|n| *n != dropped).collect();
            prop_assert_eq!(partial, expected);
        }
    }
}
