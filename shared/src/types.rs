//! Common types used across the platform

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Nitrogen, phosphorus and potassium values (per acre requirements,
/// multiplicative factors or parcel totals depending on context)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Npk {
    pub nitrogen: Decimal,
    pub phosphorus: Decimal,
    pub potassium: Decimal,
}

impl Npk {
    pub fn new(nitrogen: Decimal, phosphorus: Decimal, potassium: Decimal) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }

    pub fn from_ints(nitrogen: i64, phosphorus: i64, potassium: i64) -> Self {
        Self::new(
            Decimal::from(nitrogen),
            Decimal::from(phosphorus),
            Decimal::from(potassium),
        )
    }

    /// The neutral factor triple
    pub fn unit() -> Self {
        Self::new(Decimal::ONE, Decimal::ONE, Decimal::ONE)
    }

    /// Multiply every component by the same factor; `None` on overflow
    pub fn scale(self, factor: Decimal) -> Option<Self> {
        self.scale_each(Self::new(factor, factor, factor))
    }

    /// Multiply component-wise by a factor triple; `None` on overflow
    pub fn scale_each(self, factors: Npk) -> Option<Self> {
        Some(Self::new(
            self.nitrogen.checked_mul(factors.nitrogen)?,
            self.phosphorus.checked_mul(factors.phosphorus)?,
            self.potassium.checked_mul(factors.potassium)?,
        ))
    }
}

/// Temperature range in °C
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl TemperatureRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Decimal::from(min),
            max: Decimal::from(max),
        }
    }
}

/// Date window; a missing end date means the window was never closed and
/// matches no date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// Whether `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_some_and(|end| date <= end)
    }
}

/// Error for a value whose arithmetic leaves the representable range
pub fn too_large(field: &str) -> CoreError {
    CoreError::invalid_input(field, "Value is too large")
}

/// `lhs * rhs`, reporting overflow against `field`
pub fn checked_mul(field: &str, lhs: Decimal, rhs: Decimal) -> CoreResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| too_large(field))
}

/// Sum of `values`, reporting overflow against `field`
pub fn checked_sum<I>(field: &str, values: I) -> CoreResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| too_large(field))
}

/// Round a value for output (2 decimal places, banker's rounding)
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_contains_bounds() {
        let window = DateWindow {
            start: day(2024, 6, 1),
            end: Some(day(2024, 6, 30)),
        };
        assert!(window.contains(day(2024, 6, 1)));
        assert!(window.contains(day(2024, 6, 30)));
        assert!(!window.contains(day(2024, 5, 31)));
        assert!(!window.contains(day(2024, 7, 1)));
    }

    #[test]
    fn test_window_without_end_matches_nothing() {
        let window = DateWindow {
            start: day(2024, 6, 1),
            end: None,
        };
        assert!(!window.contains(day(2024, 6, 1)));
        assert!(!window.contains(day(2030, 1, 1)));
    }

    #[test]
    fn test_npk_scaling() {
        let base = Npk::from_ints(100, 50, 50);
        let factors = Npk::new(Decimal::new(8, 1), Decimal::new(12, 1), Decimal::new(9, 1));
        let adjusted = base.scale_each(factors).unwrap();
        assert_eq!(adjusted, Npk::from_ints(80, 60, 45));
        assert_eq!(adjusted.scale(Decimal::from(2)), Some(Npk::from_ints(160, 120, 90)));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(Npk::from_ints(100, 50, 50).scale(Decimal::MAX), None);
        match checked_mul("area", Decimal::MAX, Decimal::from(2)) {
            Err(CoreError::InvalidInput { field, .. }) => assert_eq!(field, "area"),
            other => panic!("expected overflow error, got {:?}", other),
        }
        assert!(checked_sum("total_cost", [Decimal::MAX, Decimal::ONE]).is_err());
        assert_eq!(
            checked_sum("total_cost", [Decimal::ONE, Decimal::from(2)]).unwrap(),
            Decimal::from(3)
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(Decimal::new(12345, 3)), Decimal::new(1234, 2));
        assert_eq!(round2(Decimal::new(5, 1)), Decimal::new(5, 1));
    }
}
