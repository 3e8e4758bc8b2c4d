//! Derived series over a daily rate series.
//!
//! change[t] = (close[t] - close[t-1]) / close[t-1] * 100
//!
//! The output is date-aligned with the input: same length, same dates.
//! change[0] is always NaN (no prior close). The UI presents this series as
//! an inflation proxy next to the raw rate; the computation is literally the
//! rate's own day-over-day percent change, nothing more.

use crate::domain::{ChangePoint, RatePoint};

/// Day-over-day percent change of a closing-rate series.
///
/// Undefined values use the NaN sentinel instead of a silent 0.0: the first
/// point, any point whose prior close is zero, and any point where either
/// close is NaN. A zero historical close is a data-quality anomaly, not a
/// program fault, so it is never allowed to raise a division error.
pub fn daily_change(series: &[RatePoint]) -> Vec<ChangePoint> {
    let mut result: Vec<ChangePoint> = series
        .iter()
        .map(|point| ChangePoint::new(point.date, f64::NAN))
        .collect();

    for i in 1..series.len() {
        let prev = series[i - 1].close;
        let curr = series[i].close;
        if prev.is_nan() || curr.is_nan() || prev == 0.0 {
            continue;
        }
        result[i].pct = (curr - prev) / prev * 100.0;
    }

    result
}

/// Latest defined change in a series, scanning from the end. None when every
/// point is the NaN sentinel (single-point and empty series included).
pub fn latest_change(changes: &[ChangePoint]) -> Option<ChangePoint> {
    changes.iter().rev().find(|c| c.is_defined()).copied()
}

/// Min and max over the defined changes, for chart bounds and summaries.
pub fn change_bounds(changes: &[ChangePoint]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for change in changes.iter().filter(|c| c.is_defined()) {
        bounds = Some(match bounds {
            None => (change.pct, change.pct),
            Some((lo, hi)) => (lo.min(change.pct), hi.max(change.pct)),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EPSILON: f64 = 1e-10;

    fn make_points(closes: &[f64]) -> Vec<RatePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| RatePoint::new(start + chrono::Days::new(i as u64), close))
            .collect()
    }

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn change_basic() {
        // Closes: 100, 110, 121
        // change[1]: (110-100)/100*100 = 10%
        // change[2]: (121-110)/110*100 = 10%
        let result = daily_change(&make_points(&[100.0, 110.0, 121.0]));

        assert_eq!(result.len(), 3);
        assert!(result[0].pct.is_nan());
        assert_approx(result[1].pct, 10.0);
        assert_approx(result[2].pct, 10.0);
    }

    #[test]
    fn change_negative() {
        let result = daily_change(&make_points(&[100.0, 90.0]));
        assert_approx(result[1].pct, -10.0);
    }

    #[test]
    fn change_empty_series() {
        assert!(daily_change(&[]).is_empty());
    }

    #[test]
    fn change_single_point_is_undefined() {
        let result = daily_change(&make_points(&[100.0]));
        assert_eq!(result.len(), 1);
        assert!(!result[0].is_defined());
    }

    #[test]
    fn change_zero_prior_close_guarded() {
        let result = daily_change(&make_points(&[0.0, 50.0]));
        assert!(result[1].pct.is_nan());
    }

    #[test]
    fn change_nan_propagation() {
        let mut points = make_points(&[100.0, 110.0, 120.0]);
        points[1].close = f64::NAN;
        let result = daily_change(&points);
        assert!(result[1].pct.is_nan()); // curr NaN
        assert!(result[2].pct.is_nan()); // prev NaN
    }

    #[test]
    fn change_keeps_dates_aligned() {
        let points = make_points(&[15_000.0, 15_150.0, 15_100.0]);
        let result = daily_change(&points);
        for (rate, change) in points.iter().zip(result.iter()) {
            assert_eq!(rate.date, change.date);
        }
    }

    #[test]
    fn latest_change_skips_sentinels() {
        let mut points = make_points(&[100.0, 110.0, 120.0]);
        points[1].close = f64::NAN;
        let changes = daily_change(&points);
        // change[2] has a NaN prior, change[1] has a NaN curr, change[0] is
        // the leading sentinel, so nothing is defined.
        assert!(latest_change(&changes).is_none());

        let changes = daily_change(&make_points(&[100.0, 110.0, 99.0]));
        let latest = latest_change(&changes).unwrap();
        assert_eq!(latest.date, changes[2].date);
        assert_approx(latest.pct, -10.0);
    }

    #[test]
    fn change_bounds_over_defined_points() {
        let changes = daily_change(&make_points(&[100.0, 110.0, 99.0]));
        let (lo, hi) = change_bounds(&changes).unwrap();
        assert_approx(lo, -10.0);
        assert_approx(hi, 10.0);

        assert!(change_bounds(&daily_change(&make_points(&[100.0]))).is_none());
    }
}
