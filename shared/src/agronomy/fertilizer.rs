//! Fertilizer dose calculation
//!
//! Base NPK per acre is adjusted for soil type, pH, organic carbon and the
//! target yield, then scaled by parcel area and converted into commercial
//! products. Intermediate values stay unrounded; only the returned plan is
//! rounded to two decimals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::agronomy::schedule::{application_schedule, render_schedule};
use crate::agronomy::tables::AgronomyTables;
use crate::error::{CoreError, CoreResult};
use crate::models::{
    CostBreakdown, Crop, FertilizerDosePlan, FertilizerPlanRecord, LandParcel, NutrientTotals,
    ProductQuantities, Season,
};
use crate::types::{checked_mul, round2, too_large, Npk};
use crate::validation::validate_parcel;

/// pH assumed when a parcel has no soil test
pub fn default_soil_ph() -> Decimal {
    Decimal::from(7)
}

/// Organic carbon (%) assumed when a parcel has no soil test
pub fn default_organic_carbon() -> Decimal {
    Decimal::new(5, 1)
}

/// Yield (quintals/acre) the base requirements are calibrated for
const REFERENCE_YIELD: i64 = 20;

const ORGANIC_MANURE_PER_ACRE: i64 = 2000;
const COMPOST_PER_ACRE: i64 = 1000;
const ZINC_PER_ACRE: i64 = 25;
const BORON_PER_ACRE: i64 = 5;

fn tenths(n: i64) -> Decimal {
    Decimal::new(n, 1)
}

/// Kg of product per kg of nutrient
fn urea_per_n() -> Decimal {
    Decimal::new(217, 2)
}

fn dap_per_p() -> Decimal {
    Decimal::new(217, 2)
}

fn mop_per_k() -> Decimal {
    Decimal::new(167, 2)
}

/// Multiplier on N, P and K for soil pH
pub fn ph_factor(ph: Decimal) -> Decimal {
    if ph < Decimal::new(65, 1) {
        tenths(12)
    } else if ph > Decimal::new(75, 1) {
        tenths(11)
    } else {
        Decimal::ONE
    }
}

/// Multiplier on N for organic carbon (%)
pub fn organic_carbon_factor(organic_carbon: Decimal) -> Decimal {
    if organic_carbon < tenths(5) {
        tenths(12)
    } else if organic_carbon > Decimal::ONE {
        tenths(8)
    } else {
        Decimal::ONE
    }
}

/// Nutrient scale for a target yield per acre, clamped to 0.5-2.0
pub fn yield_scale(target_yield_per_acre: Option<Decimal>) -> CoreResult<Decimal> {
    match target_yield_per_acre {
        Some(target) if target < Decimal::ZERO => Err(CoreError::invalid_input(
            "target_yield_per_acre",
            "Target yield cannot be negative",
        )),
        Some(target) if target > Decimal::ZERO => {
            Ok((target / Decimal::from(REFERENCE_YIELD)).clamp(tenths(5), tenths(20)))
        }
        _ => Ok(Decimal::ONE),
    }
}

/// Dose plan using the given reference tables
pub fn compute_fertilizer_doses_with(
    tables: &AgronomyTables,
    parcel: &LandParcel,
    crop: &Crop,
    season: Season,
    target_yield_per_acre: Option<Decimal>,
) -> CoreResult<FertilizerDosePlan> {
    validate_parcel(parcel)?;
    let scale = yield_scale(target_yield_per_acre)?;

    let ph = parcel.soil_ph.unwrap_or_else(default_soil_ph);
    let organic_carbon = parcel
        .organic_carbon_pct
        .unwrap_or_else(default_organic_carbon);
    let area = parcel.area;

    let per_acre = tables
        .base_npk(&crop.name, season)
        .scale_each(tables.soil_adjustment_factors(parcel.soil_type))
        .and_then(|npk| npk.scale(ph_factor(ph)))
        .ok_or_else(|| too_large("crop"))?;
    let per_acre = Npk {
        nitrogen: checked_mul(
            "crop",
            per_acre.nitrogen,
            organic_carbon_factor(organic_carbon),
        )?,
        ..per_acre
    };
    let npk = per_acre
        .scale(checked_mul("area", area, scale)?)
        .ok_or_else(|| too_large("area"))?;

    let low_carbon = organic_carbon < tenths(5);
    let amendment = |per_acre: i64, boosted: bool| -> CoreResult<Decimal> {
        let base = checked_mul("area", Decimal::from(per_acre), area)?;
        if boosted {
            checked_mul("area", base, tenths(12))
        } else {
            Ok(base)
        }
    };
    let organic_manure = amendment(ORGANIC_MANURE_PER_ACRE, low_carbon)?;
    let compost = amendment(COMPOST_PER_ACRE, low_carbon)?;
    let zinc = amendment(ZINC_PER_ACRE, ph > Decimal::new(75, 1))?;
    let boron = amendment(BORON_PER_ACRE, ph < Decimal::new(65, 1))?;

    let urea = checked_mul("area", npk.nitrogen, urea_per_n())?;
    let dap = checked_mul("area", npk.phosphorus, dap_per_p())?;
    let mop = checked_mul("area", npk.potassium, mop_per_k())?;

    let prices = &tables.prices;
    let cost = |quantity: Decimal, price: Decimal| checked_mul("area", quantity, price).map(round2);
    let costs = CostBreakdown {
        urea: cost(urea, prices.urea)?,
        dap: cost(dap, prices.dap)?,
        mop: cost(mop, prices.mop)?,
        organic: cost(organic_manure, prices.organic)?,
        compost: cost(compost, prices.compost)?,
        zinc: cost(zinc, prices.zinc)?,
        boron: cost(boron, prices.boron)?,
    };
    let total_cost = costs.total().map_err(|_| too_large("area"))?;

    Ok(FertilizerDosePlan {
        parcel_id: parcel.id,
        crop_name: crop.name.clone(),
        season,
        target_yield_per_acre,
        nutrients: NutrientTotals {
            nitrogen_kg: round2(npk.nitrogen),
            phosphorus_kg: round2(npk.phosphorus),
            potassium_kg: round2(npk.potassium),
            organic_manure_kg: round2(organic_manure),
            compost_kg: round2(compost),
            zinc_kg: round2(zinc),
            boron_kg: round2(boron),
        },
        products: ProductQuantities {
            urea_kg: round2(urea),
            dap_kg: round2(dap),
            mop_kg: round2(mop),
        },
        costs,
        total_cost,
        application_schedule: application_schedule(season),
    })
}

/// Dose plan using the built-in reference tables
pub fn compute_fertilizer_doses(
    parcel: &LandParcel,
    crop: &Crop,
    season: Season,
    target_yield_per_acre: Option<Decimal>,
) -> CoreResult<FertilizerDosePlan> {
    compute_fertilizer_doses_with(
        AgronomyTables::standard(),
        parcel,
        crop,
        season,
        target_yield_per_acre,
    )
}

/// Wrap a plan into a record the caller can persist
pub fn plan_record(
    plan: FertilizerDosePlan,
    crop_id: Uuid,
    year: i32,
    additional_notes: impl Into<String>,
    created_at: DateTime<Utc>,
) -> FertilizerPlanRecord {
    let application_schedule = render_schedule(&plan.application_schedule, &plan);
    FertilizerPlanRecord {
        id: Uuid::new_v4(),
        parcel_id: plan.parcel_id,
        crop_id,
        season: plan.season,
        year,
        application_schedule,
        additional_notes: additional_notes.into(),
        created_at,
        plan,
    }
}
