//! Static agronomic reference tables
//!
//! Seasonal temperatures, soil NPK adjustment factors, base NPK requirements
//! and product prices. The values are built once per process and shared
//! read-only; a deployment may replace them with a JSON document of the
//! same shape.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Crop, ProductPrices, Season, SoilType};
use crate::types::{Npk, TemperatureRange};

/// Base NPK requirement per acre for a crop in a season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseRequirement {
    /// Lower-cased crop name
    pub crop: String,
    pub season: Season,
    pub per_acre: Npk,
}

/// Immutable reference data used by the scorer and the dose calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgronomyTables {
    /// Month (1-12) to typical temperature range
    pub seasonal_temperatures: BTreeMap<u32, TemperatureRange>,
    pub default_temperature: TemperatureRange,
    pub soil_factors: BTreeMap<SoilType, Npk>,
    pub base_requirements: Vec<BaseRequirement>,
    pub default_requirement: Npk,
    pub prices: ProductPrices,
}

static STANDARD: OnceLock<AgronomyTables> = OnceLock::new();

fn factor(tenths: i64) -> Decimal {
    Decimal::new(tenths, 1)
}

impl Default for AgronomyTables {
    fn default() -> Self {
        let seasonal_temperatures = BTreeMap::from([
            // Winter
            (12, TemperatureRange::new(10, 25)),
            (1, TemperatureRange::new(8, 23)),
            (2, TemperatureRange::new(12, 26)),
            // Spring
            (3, TemperatureRange::new(15, 30)),
            (4, TemperatureRange::new(20, 35)),
            (5, TemperatureRange::new(25, 40)),
            // Monsoon
            (6, TemperatureRange::new(25, 35)),
            (7, TemperatureRange::new(24, 33)),
            (8, TemperatureRange::new(24, 32)),
            (9, TemperatureRange::new(23, 31)),
            // Autumn
            (10, TemperatureRange::new(18, 30)),
            (11, TemperatureRange::new(14, 28)),
        ]);

        let soil_factors = BTreeMap::from([
            (SoilType::Alluvial, Npk::new(factor(10), factor(10), factor(10))),
            (SoilType::Black, Npk::new(factor(8), factor(12), factor(9))),
            (SoilType::Red, Npk::new(factor(12), factor(11), factor(9))),
            (SoilType::Laterite, Npk::new(factor(13), factor(12), factor(11))),
            (SoilType::Desert, Npk::new(factor(14), factor(10), factor(12))),
            (SoilType::Mountain, Npk::new(factor(11), factor(11), factor(10))),
        ]);

        let requirement = |crop: &str, season: Season, n: i64, p: i64, k: i64| BaseRequirement {
            crop: crop.to_string(),
            season,
            per_acre: Npk::from_ints(n, p, k),
        };
        let base_requirements = vec![
            requirement("rice", Season::Kharif, 100, 50, 50),
            requirement("rice", Season::Rabi, 120, 60, 60),
            requirement("wheat", Season::Rabi, 120, 60, 40),
            requirement("maize", Season::Kharif, 120, 60, 40),
            requirement("maize", Season::Rabi, 150, 75, 50),
            requirement("cotton", Season::Kharif, 100, 50, 50),
            requirement("sugarcane", Season::Zaid, 150, 85, 85),
        ];

        Self {
            seasonal_temperatures,
            default_temperature: TemperatureRange::new(20, 30),
            soil_factors,
            base_requirements,
            default_requirement: Npk::from_ints(80, 40, 40),
            prices: ProductPrices::default(),
        }
    }
}

impl AgronomyTables {
    /// Process-wide built-in tables
    pub fn standard() -> &'static AgronomyTables {
        STANDARD.get_or_init(AgronomyTables::default)
    }

    /// Load tables from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Typical temperature range for a month
    pub fn seasonal_temperature(&self, month: u32) -> TemperatureRange {
        self.seasonal_temperatures
            .get(&month)
            .copied()
            .unwrap_or(self.default_temperature)
    }

    /// NPK multipliers for a soil type; neutral when the soil is not listed
    pub fn soil_adjustment_factors(&self, soil_type: SoilType) -> Npk {
        self.soil_factors
            .get(&soil_type)
            .copied()
            .unwrap_or_else(Npk::unit)
    }

    /// Base NPK per acre for a crop name and season, or the default requirement
    pub fn base_npk(&self, crop_name: &str, season: Season) -> Npk {
        let key = crop_name.trim().to_lowercase();
        self.base_requirements
            .iter()
            .find(|r| r.crop == key && r.season == season)
            .map(|r| r.per_acre)
            .unwrap_or(self.default_requirement)
    }
}

/// Typical temperature range for a month from the built-in tables
pub fn seasonal_temperature(month: u32) -> TemperatureRange {
    AgronomyTables::standard().seasonal_temperature(month)
}

/// Soil NPK multipliers from the built-in tables
pub fn soil_adjustment_factors(soil_type: SoilType) -> Npk {
    AgronomyTables::standard().soil_adjustment_factors(soil_type)
}

/// Built-in crop catalog; agronomic attributes take the crop defaults
pub fn default_crop_catalog() -> Vec<Crop> {
    [
        ("Wheat", Season::Rabi, 120, "Major cereal crop grown in winter season"),
        ("Rice", Season::Kharif, 150, "Staple food crop grown during monsoon"),
        ("Maize", Season::Kharif, 90, "Versatile cereal crop for food and feed"),
        ("Cotton", Season::Kharif, 180, "Major fiber crop"),
        ("Sugarcane", Season::Kharif, 365, "Long duration cash crop"),
        ("Potato", Season::Rabi, 90, "Important tuber crop"),
        ("Tomato", Season::Kharif, 75, "Popular vegetable crop"),
        ("Onion", Season::Rabi, 120, "Essential vegetable crop"),
        ("Soybean", Season::Kharif, 100, "Important oilseed and protein crop"),
        ("Mustard", Season::Rabi, 90, "Major oilseed crop of rabi season"),
        ("Chickpea", Season::Rabi, 120, "Important pulse crop"),
        ("Pigeon Pea", Season::Kharif, 150, "Long duration pulse crop"),
    ]
    .into_iter()
    .map(|(name, season, days, description)| {
        let mut crop = Crop::new(name, season, days);
        crop.planting_method = Some(description.to_string());
        crop
    })
    .collect()
}
