//! Marketplace participants and their ratings

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::round2;

/// The user invoking a lifecycle transition, tagged with the role they act in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", content = "user_id", rename_all = "snake_case")]
pub enum Actor {
    Farmer(Uuid),
    Transporter(Uuid),
}

impl Actor {
    pub fn user_id(&self) -> Uuid {
        match self {
            Actor::Farmer(id) | Actor::Transporter(id) => *id,
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Actor::Farmer(_) => "farmer",
            Actor::Transporter(_) => "transporter",
        }
    }
}

/// Lowest and highest accepted rating values
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Aggregate rating shown on a farmer or transporter profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RatingSummary {
    pub average_rating: Decimal,
    pub total_ratings: u32,
}

impl RatingSummary {
    /// Fold one more rating into the running average
    pub fn record(&self, rating: u8) -> CoreResult<RatingSummary> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::invalid_input(
                "rating",
                format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING),
            ));
        }
        let total = self.total_ratings + 1;
        let sum = self.average_rating * Decimal::from(self.total_ratings) + Decimal::from(rating);
        Ok(RatingSummary {
            average_rating: round2(sum / Decimal::from(total)),
            total_ratings: total,
        })
    }
}
