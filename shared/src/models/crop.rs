//! Crop reference data and recommendation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SoilType;

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Monsoon season (June-September sowing)
    Kharif,
    /// Winter season (October-February)
    Rabi,
    /// Summer season (March-May)
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }

    /// Season a calendar month (1-12) falls in
    pub fn for_month(month: u32) -> Self {
        match month {
            6..=9 => Season::Kharif,
            10..=12 | 1 | 2 => Season::Rabi,
            _ => Season::Zaid,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Kharif => write!(f, "Kharif (Monsoon)"),
            Season::Rabi => write!(f, "Rabi (Winter)"),
            Season::Zaid => write!(f, "Zaid (Summer)"),
        }
    }
}

/// Water requirement class of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RainfallRequirement {
    Low,
    #[default]
    Medium,
    High,
}

impl RainfallRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            RainfallRequirement::Low => "Low (300-500mm)",
            RainfallRequirement::Medium => "Medium (500-700mm)",
            RainfallRequirement::High => "High (>700mm)",
        }
    }
}

/// A crop in the reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    #[serde(default)]
    pub id: Uuid,
    pub name: String,
    pub season: Season,
    #[serde(default = "defaults::duration_days")]
    pub duration_days: u32,
    /// Minimum temperature (°C)
    #[serde(default = "defaults::min_temperature")]
    pub min_temperature: Decimal,
    /// Maximum temperature (°C)
    #[serde(default = "defaults::max_temperature")]
    pub max_temperature: Decimal,
    #[serde(default)]
    pub rainfall_requirement: RainfallRequirement,
    #[serde(default = "defaults::soil_ph_min")]
    pub soil_ph_min: Decimal,
    #[serde(default = "defaults::soil_ph_max")]
    pub soil_ph_max: Decimal,
    #[serde(default = "defaults::suitable_soil_types")]
    pub suitable_soil_types: Vec<SoilType>,
    /// Average yield in quintals/acre
    #[serde(default = "defaults::expected_yield")]
    pub expected_yield_per_acre: Decimal,
    /// Average market price (Rs/quintal)
    #[serde(default = "defaults::market_price")]
    pub market_price_per_unit: Decimal,
    /// kg/acre
    #[serde(default = "defaults::nitrogen")]
    pub nitrogen_requirement: Decimal,
    /// kg/acre
    #[serde(default = "defaults::phosphorus")]
    pub phosphorus_requirement: Decimal,
    /// kg/acre
    #[serde(default = "defaults::potassium")]
    pub potassium_requirement: Decimal,
    pub planting_method: Option<String>,
}

mod defaults {
    use rust_decimal::Decimal;

    use crate::models::SoilType;

    pub fn duration_days() -> u32 {
        120
    }
    pub fn min_temperature() -> Decimal {
        Decimal::from(15)
    }
    pub fn max_temperature() -> Decimal {
        Decimal::from(35)
    }
    pub fn soil_ph_min() -> Decimal {
        Decimal::new(60, 1)
    }
    pub fn soil_ph_max() -> Decimal {
        Decimal::new(75, 1)
    }
    pub fn suitable_soil_types() -> Vec<SoilType> {
        vec![SoilType::Alluvial, SoilType::Black]
    }
    pub fn expected_yield() -> Decimal {
        Decimal::from(20)
    }
    pub fn market_price() -> Decimal {
        Decimal::from(2000)
    }
    pub fn nitrogen() -> Decimal {
        Decimal::from(50)
    }
    pub fn phosphorus() -> Decimal {
        Decimal::from(25)
    }
    pub fn potassium() -> Decimal {
        Decimal::from(25)
    }
}

impl Crop {
    /// Catalog entry with default agronomic attributes
    pub fn new(name: &str, season: Season, duration_days: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            season,
            duration_days,
            min_temperature: defaults::min_temperature(),
            max_temperature: defaults::max_temperature(),
            rainfall_requirement: RainfallRequirement::default(),
            soil_ph_min: defaults::soil_ph_min(),
            soil_ph_max: defaults::soil_ph_max(),
            suitable_soil_types: defaults::suitable_soil_types(),
            expected_yield_per_acre: defaults::expected_yield(),
            market_price_per_unit: defaults::market_price(),
            nitrogen_requirement: defaults::nitrogen(),
            phosphorus_requirement: defaults::phosphorus(),
            potassium_requirement: defaults::potassium(),
            planting_method: None,
        }
    }

    /// Parse a comma-separated soil list ("alluvial, Black,red").
    /// Unknown entries are dropped.
    pub fn parse_soil_types(list: &str) -> Vec<SoilType> {
        list.split(',').filter_map(SoilType::from_str).collect()
    }

    pub fn is_suitable_soil(&self, soil_type: SoilType) -> bool {
        self.suitable_soil_types.contains(&soil_type)
    }
}

/// A ranked crop suggestion for a parcel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: Crop,
    /// 0-1, two decimals
    pub suitability_score: Decimal,
    /// Quintals per acre
    pub estimated_yield_per_acre: Decimal,
    /// Quintals for the whole parcel
    pub total_estimated_yield: Decimal,
    pub estimated_revenue: Decimal,
    pub season: Season,
    pub growing_duration_days: u32,
    pub water_requirement: String,
    pub key_requirements: Vec<String>,
    pub cultivation_tips: Option<String>,
    pub market_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_for_month() {
        assert_eq!(Season::for_month(6), Season::Kharif);
        assert_eq!(Season::for_month(9), Season::Kharif);
        assert_eq!(Season::for_month(10), Season::Rabi);
        assert_eq!(Season::for_month(1), Season::Rabi);
        assert_eq!(Season::for_month(2), Season::Rabi);
        assert_eq!(Season::for_month(3), Season::Zaid);
        assert_eq!(Season::for_month(5), Season::Zaid);
    }

    #[test]
    fn test_parse_soil_types() {
        let soils = Crop::parse_soil_types("Alluvial, black,unknown ,RED");
        assert_eq!(soils, vec![SoilType::Alluvial, SoilType::Black, SoilType::Red]);
    }

    #[test]
    fn test_crop_defaults_from_json() {
        let crop: Crop = serde_json::from_str(r#"{"name": "Wheat", "season": "rabi"}"#).unwrap();
        assert_eq!(crop.duration_days, 120);
        assert_eq!(crop.min_temperature, Decimal::from(15));
        assert_eq!(crop.soil_ph_max, Decimal::new(75, 1));
        assert_eq!(crop.rainfall_requirement, RainfallRequirement::Medium);
        assert!(crop.is_suitable_soil(SoilType::Black));
        assert!(!crop.is_suitable_soil(SoilType::Desert));
    }
}
