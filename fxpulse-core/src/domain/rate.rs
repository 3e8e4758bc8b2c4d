//! Rate points — the fundamental exchange-rate data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily closing rate for a quote symbol.
///
/// Series are ordered by ascending date, exactly as the provider returns
/// them. A close is always a finite number; bars the provider reports with a
/// null close are dropped at the feed boundary and never reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl RatePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Day-over-day percent change of a rate series, date-aligned with it.
///
/// `pct` is `f64::NAN` where the value is undefined: the first point of a
/// series (no prior close) and any point whose prior close is zero. The
/// sentinel keeps "no data" distinct from a literal zero change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChangePoint {
    pub date: NaiveDate,
    pub pct: f64,
}

impl ChangePoint {
    pub fn new(date: NaiveDate, pct: f64) -> Self {
        Self { date, pct }
    }

    /// Returns true when `pct` holds a real value rather than the NaN sentinel.
    pub fn is_defined(&self) -> bool {
        !self.pct.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn change_point_defined() {
        assert!(ChangePoint::new(d(2), 0.5).is_defined());
        assert!(ChangePoint::new(d(2), 0.0).is_defined());
        assert!(!ChangePoint::new(d(1), f64::NAN).is_defined());
    }

    #[test]
    fn rate_point_serialization_roundtrip() {
        let point = RatePoint::new(d(2), 15_582.5);
        let json = serde_json::to_string(&point).unwrap();
        let deser: RatePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point.date, deser.date);
        assert_eq!(point.close, deser.close);
    }
}
