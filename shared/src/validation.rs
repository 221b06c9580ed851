//! Validation utilities for AgriPool records
//!
//! Field checks return a static message; the record-level validators attach
//! the field name and surface a [`CoreError::InvalidInput`].

use rust_decimal::Decimal;
use validator::Validate;

use crate::error::{CoreError, CoreResult};
use crate::models::{LandParcel, TransportOffer, TransportRequest, MAX_RATING, MIN_RATING};

// ============================================================================
// Field Validations
// ============================================================================

/// Validate parcel area is positive (acres)
pub fn validate_area(area: Decimal) -> Result<(), &'static str> {
    if area <= Decimal::ZERO {
        return Err("Area must be greater than zero");
    }
    Ok(())
}

/// Validate soil pH is on the 0-14 scale
pub fn validate_soil_ph(ph: Decimal) -> Result<(), &'static str> {
    if ph < Decimal::ZERO || ph > Decimal::from(14) {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}

/// Validate a measured quantity is not negative
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Value cannot be negative");
    }
    Ok(())
}

/// Validate a quantity is strictly positive
pub fn validate_positive(value: Decimal) -> Result<(), &'static str> {
    if value <= Decimal::ZERO {
        return Err("Value must be greater than zero");
    }
    Ok(())
}

/// Validate calendar month number
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(())
}

/// Validate a counterparty rating
pub fn validate_rating(rating: u8) -> Result<(), &'static str> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err("Rating must be between 1 and 5");
    }
    Ok(())
}

// ============================================================================
// Record Validations
// ============================================================================

fn field(name: &str, check: Result<(), &'static str>) -> CoreResult<()> {
    check.map_err(|message| CoreError::invalid_input(name, message))
}

/// Validate the numeric attributes of a land parcel
pub fn validate_parcel(parcel: &LandParcel) -> CoreResult<()> {
    field("area", validate_area(parcel.area))?;
    if let Some(ph) = parcel.soil_ph {
        field("soil_ph", validate_soil_ph(ph))?;
    }
    if let Some(carbon) = parcel.organic_carbon_pct {
        field("organic_carbon_pct", validate_non_negative(carbon))?;
    }
    if let Some(rainfall) = parcel.annual_rainfall_mm {
        field("annual_rainfall_mm", validate_non_negative(rainfall))?;
    }
    Ok(())
}

/// Validate a transport request
pub fn validate_request(request: &TransportRequest) -> CoreResult<()> {
    field("quantity_quintals", validate_positive(request.quantity_quintals))?;
    request.validate().map_err(|errors| {
        let name = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "request".to_string());
        CoreError::invalid_input(&name, errors.to_string())
    })
}

/// Validate a transport offer
pub fn validate_offer(offer: &TransportOffer) -> CoreResult<()> {
    field("capacity_tons", validate_positive(offer.capacity_tons))?;
    field("rate_per_km", validate_non_negative(offer.rate_per_km))?;
    field("minimum_charge", validate_non_negative(offer.minimum_charge))?;
    if let Some(to) = offer.available_to {
        if to < offer.available_from {
            return Err(CoreError::invalid_input(
                "available_to",
                "Availability must end on or after its start date",
            ));
        }
    }
    Ok(())
}
