//! Land parcel models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GpsCoordinates;

/// A land parcel registered by a farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandParcel {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub farmer_id: Uuid,
    #[serde(default)]
    pub parcel_name: String,
    /// Area in acres
    pub area: Decimal,
    pub soil_type: SoilType,
    /// Soil pH on the 0-14 scale, if tested
    pub soil_ph: Option<Decimal>,
    /// Organic carbon percentage, if tested
    pub organic_carbon_pct: Option<Decimal>,
    #[serde(default)]
    pub irrigation_type: IrrigationType,
    /// Annual rainfall (mm)
    pub annual_rainfall_mm: Option<Decimal>,
    pub coordinates: Option<GpsCoordinates>,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
}

impl LandParcel {
    /// Minimal parcel with no soil test results and unset irrigation
    pub fn new(area: Decimal, soil_type: SoilType) -> Self {
        Self {
            id: Uuid::new_v4(),
            farmer_id: Uuid::nil(),
            parcel_name: String::new(),
            area,
            soil_type,
            soil_ph: None,
            organic_carbon_pct: None,
            irrigation_type: IrrigationType::Unset,
            annual_rainfall_mm: None,
            coordinates: None,
            village: String::new(),
            district: String::new(),
            state: String::new(),
        }
    }
}

/// Soil classes of the Indian soil survey
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Desert,
    Mountain,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Alluvial,
        SoilType::Black,
        SoilType::Red,
        SoilType::Laterite,
        SoilType::Desert,
        SoilType::Mountain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "alluvial",
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Laterite => "laterite",
            SoilType::Desert => "desert",
            SoilType::Mountain => "mountain",
        }
    }

    /// Case-insensitive parse, surrounding whitespace ignored
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "black" => Some(SoilType::Black),
            "red" => Some(SoilType::Red),
            "laterite" => Some(SoilType::Laterite),
            "desert" => Some(SoilType::Desert),
            "mountain" => Some(SoilType::Mountain),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Alluvial => write!(f, "Alluvial"),
            SoilType::Black => write!(f, "Black"),
            SoilType::Red => write!(f, "Red"),
            SoilType::Laterite => write!(f, "Laterite"),
            SoilType::Desert => write!(f, "Desert"),
            SoilType::Mountain => write!(f, "Mountain"),
        }
    }
}

/// Water source of a parcel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationType {
    Irrigated,
    Rainfed,
    /// Not recorded by the farmer
    #[default]
    Unset,
}
