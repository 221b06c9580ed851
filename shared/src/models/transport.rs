//! Transport marketplace models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::DateWindow;

/// Status of a farmer's transport request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// A farmer's request to move produce to a market
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransportRequest {
    #[serde(default)]
    pub id: Uuid,
    pub farmer_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub crop_type: String,
    /// Quantity in quintals
    pub quantity_quintals: Decimal,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub pickup_location: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub pickup_village: String,
    #[validate(length(min = 1, max = 100))]
    pub pickup_district: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub destination_market: String,
    #[validate(length(min = 1, max = 100))]
    pub destination_district: String,
    pub preferred_date: NaiveDate,
    #[serde(default)]
    pub flexible_dates: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TransportRequest {
    /// Quantity expressed in tons (1 ton = 10 quintals)
    pub fn quantity_tons(&self) -> Decimal {
        self.quantity_quintals / Decimal::from(10)
    }
}

/// Status of a transporter's capacity listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    Available,
    Assigned,
    Completed,
    Cancelled,
}

/// Vehicle classes offered by transporters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    MiniTruck,
    SmallTruck,
    MediumTruck,
    LargeTruck,
    Refrigerated,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::MiniTruck => write!(f, "Mini Truck (1-3 tons)"),
            VehicleType::SmallTruck => write!(f, "Small Truck (3-7 tons)"),
            VehicleType::MediumTruck => write!(f, "Medium Truck (7-12 tons)"),
            VehicleType::LargeTruck => write!(f, "Large Truck (12+ tons)"),
            VehicleType::Refrigerated => write!(f, "Refrigerated Truck"),
        }
    }
}

/// A transporter's listed vehicle capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOffer {
    #[serde(default)]
    pub id: Uuid,
    pub transporter_id: Uuid,
    pub vehicle_type: VehicleType,
    /// Capacity in tons
    pub capacity_tons: Decimal,
    /// Rate per kilometer in Rs.
    pub rate_per_km: Decimal,
    /// Minimum charge in Rs.
    pub minimum_charge: Decimal,
    pub available_from: NaiveDate,
    pub available_to: Option<NaiveDate>,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub current_district: String,
    /// Preferred districts
    #[serde(default)]
    pub preferred_routes: Vec<String>,
    #[serde(default)]
    pub refrigerated: bool,
    #[serde(default)]
    pub status: OfferStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TransportOffer {
    pub fn availability(&self) -> DateWindow {
        DateWindow {
            start: self.available_from,
            end: self.available_to,
        }
    }
}

/// Lifecycle of a proposed pairing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Proposed,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Proposed => "proposed",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Rejected => "rejected",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    /// Allowed transitions; rejected, completed and cancelled are terminal
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (MatchStatus::Proposed, MatchStatus::Accepted)
                | (MatchStatus::Proposed, MatchStatus::Rejected)
                | (MatchStatus::Proposed, MatchStatus::Cancelled)
                | (MatchStatus::Accepted, MatchStatus::Completed)
                | (MatchStatus::Accepted, MatchStatus::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MatchStatus::Rejected | MatchStatus::Completed | MatchStatus::Cancelled
        )
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pairing of one request with one offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportMatch {
    pub id: Uuid,
    pub request_id: Uuid,
    pub offer_id: Uuid,
    pub proposed_rate: Decimal,
    /// Distance in kilometers
    pub estimated_distance_km: Decimal,
    pub total_cost: Decimal,
    #[serde(default)]
    pub status: MatchStatus,
    /// Rating of the farmer, written by the transporter
    pub farmer_rating: Option<u8>,
    #[serde(default)]
    pub farmer_review: String,
    /// Rating of the transporter, written by the farmer
    pub transporter_rating: Option<u8>,
    #[serde(default)]
    pub transporter_review: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Records produced by a lifecycle transition, for the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub transport_match: TransportMatch,
    pub request: TransportRequest,
    pub offer: TransportOffer,
}
