//! WebAssembly module for the AgriPool marketplace
//!
//! Provides client-side computation for:
//! - Crop suitability scores and recommendations
//! - Fertilizer dose plans
//! - Transport offer filtering and trip cost
//!
//! Records cross the boundary as JSON strings.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    compute_fertilizer_doses, filter_compatible_offers, recommend_crops_for_month, score_crop,
    transport_cost, AgronomyTables, Crop, LandParcel, Season, TransportOffer, TransportRequest,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgriPool engine loaded"));
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_season(season: &str) -> Result<Season, JsValue> {
    Season::from_str(season).ok_or_else(|| JsValue::from_str(&format!("Unknown season '{}'", season)))
}

fn engine_error(e: shared::CoreError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Suitability score (0-1) of a crop for a parcel
#[wasm_bindgen]
pub fn score_crop_json(
    crop_json: &str,
    parcel_json: &str,
    season: &str,
    month: u32,
) -> Result<String, JsValue> {
    let crop: Crop = parse(crop_json, "crop")?;
    let parcel: LandParcel = parse(parcel_json, "parcel")?;
    let score = score_crop(&crop, &parcel, parse_season(season)?, month).map_err(engine_error)?;
    Ok(score.to_string())
}

/// Ranked recommendations; an empty `season` derives it from `month`
#[wasm_bindgen]
pub fn recommend_crops_json(
    parcel_json: &str,
    crops_json: &str,
    season: &str,
    month: u32,
) -> Result<String, JsValue> {
    let parcel: LandParcel = parse(parcel_json, "parcel")?;
    let crops: Vec<Crop> = parse(crops_json, "crops")?;
    let season = if season.trim().is_empty() {
        None
    } else {
        Some(parse_season(season)?)
    };
    let recommendations =
        recommend_crops_for_month(AgronomyTables::standard(), &parcel, season, month, &crops)
            .map_err(engine_error)?;
    to_json(&recommendations)
}

/// Recommendations for the browser's current month
#[wasm_bindgen]
pub fn recommend_crops_now_json(parcel_json: &str, crops_json: &str) -> Result<String, JsValue> {
    let month = js_sys::Date::new_0().get_month() + 1;
    recommend_crops_json(parcel_json, crops_json, "", month)
}

/// Fertilizer dose plan; a target yield of zero or less means none
#[wasm_bindgen]
pub fn compute_fertilizer_doses_json(
    parcel_json: &str,
    crop_json: &str,
    season: &str,
    target_yield_per_acre: f64,
) -> Result<String, JsValue> {
    let parcel: LandParcel = parse(parcel_json, "parcel")?;
    let crop: Crop = parse(crop_json, "crop")?;
    let target = Decimal::try_from(target_yield_per_acre)
        .ok()
        .filter(|t| *t > Decimal::ZERO);
    let plan = compute_fertilizer_doses(&parcel, &crop, parse_season(season)?, target)
        .map_err(engine_error)?;
    to_json(&plan)
}

/// Offers able to serve a request, cheapest first
#[wasm_bindgen]
pub fn filter_compatible_offers_json(
    request_json: &str,
    offers_json: &str,
) -> Result<String, JsValue> {
    let request: TransportRequest = parse(request_json, "request")?;
    let offers: Vec<TransportOffer> = parse(offers_json, "offers")?;
    let compatible = filter_compatible_offers(&request, &offers).map_err(engine_error)?;
    to_json(&compatible)
}

fn number(value: f64, what: &str) -> Result<Decimal, JsValue> {
    Decimal::try_from(value)
        .map_err(|_| JsValue::from_str(&format!("Invalid {}: {}", what, value)))
}

/// Trip cost: max(minimum charge, distance x rate)
#[wasm_bindgen]
pub fn calculate_transport_cost(
    distance_km: f64,
    rate_per_km: f64,
    minimum_charge: f64,
) -> Result<f64, JsValue> {
    let cost = transport_cost(
        number(distance_km, "distance")?,
        number(rate_per_km, "rate per km")?,
        number(minimum_charge, "minimum charge")?,
    )
    .map_err(engine_error)?;
    cost.to_f64().ok_or_else(|| JsValue::from_str("Trip cost is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARCEL: &str = r#"{"area": "2", "soil_type": "black", "soil_ph": "7.0", "organic_carbon_pct": "0.6"}"#;
    const RICE: &str = r#"{"name": "Rice", "season": "kharif", "max_temperature": "45"}"#;

    #[test]
    fn test_score_crop_json() {
        let score = score_crop_json(RICE, PARCEL, "kharif", 7).unwrap();
        assert_eq!(score.parse::<Decimal>().unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_recommend_crops_json() {
        let crops = format!("[{}]", RICE);
        let json = recommend_crops_json(PARCEL, &crops, "", 7).unwrap();
        let recs: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(recs.as_array().map(|a| a.len()), Some(1));
        assert_eq!(recs[0]["season"], "kharif");
    }

    #[test]
    fn test_compute_fertilizer_doses_json() {
        let json = compute_fertilizer_doses_json(PARCEL, RICE, "kharif", 0.0).unwrap();
        let plan: serde_json::Value = serde_json::from_str(&json).unwrap();
        let nitrogen: Decimal = plan["nutrients"]["nitrogen_kg"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(nitrogen, Decimal::from(160));
        assert!(plan["target_yield_per_acre"].is_null());
    }

    #[test]
    fn test_filter_compatible_offers_json() {
        let request = r#"{
            "farmer_id": "00000000-0000-0000-0000-000000000001",
            "crop_type": "Wheat",
            "quantity_quintals": "50",
            "pickup_district": "Indore",
            "destination_district": "Indore",
            "preferred_date": "2026-11-10"
        }"#;
        let offers = r#"[
            {"transporter_id": "00000000-0000-0000-0000-000000000002", "vehicle_type": "medium_truck",
             "capacity_tons": "5", "rate_per_km": "30", "minimum_charge": "0", "available_from": "2026-11-01",
             "available_to": "2026-11-30"},
            {"transporter_id": "00000000-0000-0000-0000-000000000003", "vehicle_type": "mini_truck",
             "capacity_tons": "4.9", "rate_per_km": "10", "minimum_charge": "0", "available_from": "2026-11-01",
             "available_to": "2026-11-30"}
        ]"#;
        let json = filter_compatible_offers_json(request, offers).unwrap();
        let found: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(found.as_array().map(|a| a.len()), Some(1));
        assert_eq!(found[0]["vehicle_type"], "medium_truck");
    }

    #[test]
    fn test_calculate_transport_cost() {
        assert!((calculate_transport_cost(10.0, 25.0, 1000.0).unwrap() - 1000.0).abs() < 0.001);
        assert!((calculate_transport_cost(100.0, 25.0, 1000.0).unwrap() - 2500.0).abs() < 0.001);
    }
}
