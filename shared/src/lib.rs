//! Shared types and the agronomy/logistics engine for the AgriPool marketplace
//!
//! This crate contains the domain records exchanged with the backend and the
//! browser (via WASM), together with the pure computations over them:
//! crop suitability scoring, crop recommendations, fertilizer dosing and
//! transport matching. Nothing here performs I/O or holds mutable state.

pub mod agronomy;
pub mod error;
pub mod logistics;
pub mod models;
pub mod types;
pub mod validation;

pub use agronomy::{
    application_schedule, compute_fertilizer_doses, compute_fertilizer_doses_with,
    default_crop_catalog, plan_record, recommend_crops, recommend_crops_for_month,
    render_schedule, score_crop, score_crop_with, seasonal_temperature, soil_adjustment_factors,
    suitability_breakdown, AgronomyTables, SuitabilityBreakdown,
};
pub use error::*;
pub use logistics::{
    accept_match, available_offers, cancel_match, complete_match, filter_compatible_offers,
    offers_for_transporter, open_requests, propose_match, reject_match, requests_for_farmer,
    transition_match, transport_cost,
};
pub use models::*;
pub use types::*;
pub use validation::*;
