//! Crop advisory computations: suitability, recommendations and fertilizer dosing

pub mod fertilizer;
pub mod recommendation;
pub mod schedule;
pub mod suitability;
pub mod tables;

pub use fertilizer::{
    compute_fertilizer_doses, compute_fertilizer_doses_with, organic_carbon_factor, ph_factor,
    plan_record, yield_scale,
};
pub use recommendation::{recommend_crops, recommend_crops_for_month, suitability_cutoff};
pub use schedule::{application_schedule, render_schedule};
pub use suitability::{
    score_crop, score_crop_with, suitability_breakdown, Penalty, SuitabilityBreakdown,
    SuitabilityFactor,
};
pub use tables::{
    default_crop_catalog, seasonal_temperature, soil_adjustment_factors, AgronomyTables,
    BaseRequirement,
};
