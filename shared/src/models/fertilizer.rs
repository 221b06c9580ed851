//! Fertilizer plan models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::Season;
use crate::types::checked_sum;

/// Nutrient and amendment totals for a whole parcel (kg)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientTotals {
    pub nitrogen_kg: Decimal,
    pub phosphorus_kg: Decimal,
    pub potassium_kg: Decimal,
    pub organic_manure_kg: Decimal,
    pub compost_kg: Decimal,
    pub zinc_kg: Decimal,
    pub boron_kg: Decimal,
}

/// Commercial product quantities supplying the NPK totals (kg)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductQuantities {
    pub urea_kg: Decimal,
    pub dap_kg: Decimal,
    pub mop_kg: Decimal,
}

/// Itemized cost of a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostBreakdown {
    pub urea: Decimal,
    pub dap: Decimal,
    pub mop: Decimal,
    pub organic: Decimal,
    pub compost: Decimal,
    pub zinc: Decimal,
    pub boron: Decimal,
}

impl CostBreakdown {
    /// Sum of the itemized lines
    pub fn total(&self) -> CoreResult<Decimal> {
        checked_sum(
            "total_cost",
            [
                self.urea,
                self.dap,
                self.mop,
                self.organic,
                self.compost,
                self.zinc,
                self.boron,
            ],
        )
    }
}

/// Per-kg product prices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPrices {
    pub urea: Decimal,
    pub dap: Decimal,
    pub mop: Decimal,
    pub organic: Decimal,
    pub compost: Decimal,
    pub zinc: Decimal,
    pub boron: Decimal,
}

impl Default for ProductPrices {
    fn default() -> Self {
        Self {
            urea: Decimal::from(12),
            dap: Decimal::from(24),
            mop: Decimal::from(18),
            organic: Decimal::from(2),
            compost: Decimal::from(3),
            zinc: Decimal::from(50),
            boron: Decimal::from(80),
        }
    }
}

/// Named application stage within a season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    BasalDose,
    FirstTopDress,
    SecondTopDress,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::BasalDose => "basal_dose",
            StageKind::FirstTopDress => "first_top_dress",
            StageKind::SecondTopDress => "second_top_dress",
        }
    }
}

/// Fraction of a seasonal nutrient total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Share {
    pub numerator: u32,
    pub denominator: u32,
}

impl Share {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// "1/3rd", "1/4th", "1/2"
    pub fn label(&self) -> String {
        let suffix = match self.denominator {
            3 => "rd",
            4 => "th",
            _ => "",
        };
        format!("{}/{}{}", self.numerator, self.denominator, suffix)
    }
}

/// Inputs applied in full at a single stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FullDose {
    Phosphorus,
    Potash,
    Micronutrients,
    Organics,
}

impl FullDose {
    pub fn label(&self) -> &'static str {
        match self {
            FullDose::Phosphorus => "Full dose of Phosphorus (DAP)",
            FullDose::Potash => "Full dose of Potash (MOP)",
            FullDose::Micronutrients => "Full dose of Zinc and Boron",
            FullDose::Organics => "Full dose of organic fertilizers",
        }
    }
}

/// One step of the application timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationStage {
    pub stage: StageKind,
    /// e.g. "Apply before sowing (June)"
    pub timing: String,
    pub nitrogen_share: Share,
    /// Whether this stage applies the last part of the nitrogen
    pub remaining_nitrogen: bool,
    pub full_doses: Vec<FullDose>,
}

impl ApplicationStage {
    /// Instruction lines for this stage
    pub fn instructions(&self) -> Vec<String> {
        let prefix = if self.remaining_nitrogen { "Remaining " } else { "" };
        let mut lines = vec![format!(
            "{}{} of Nitrogen (Urea)",
            prefix,
            self.nitrogen_share.label()
        )];
        lines.extend(self.full_doses.iter().map(|dose| dose.label().to_string()));
        lines
    }
}

/// Computed fertilizer doses for a parcel, crop and season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerDosePlan {
    pub parcel_id: Uuid,
    pub crop_name: String,
    pub season: Season,
    pub target_yield_per_acre: Option<Decimal>,
    pub nutrients: NutrientTotals,
    pub products: ProductQuantities,
    pub costs: CostBreakdown,
    pub total_cost: Decimal,
    pub application_schedule: Vec<ApplicationStage>,
}

/// A dose plan ready to be stored by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerPlanRecord {
    pub id: Uuid,
    pub parcel_id: Uuid,
    pub crop_id: Uuid,
    pub season: Season,
    pub year: i32,
    pub plan: FertilizerDosePlan,
    /// Rendered timeline text
    pub application_schedule: String,
    pub additional_notes: String,
    pub created_at: DateTime<Utc>,
}
