//! Kinematic aggregates over an immutable sample sequence.
//!
//! Statistics over an empty set are NaN. Accelerations that come out as NaN
//! (a `0 / 0` quotient) count as missing and are skipped; infinite ones are
//! kept and propagate into the mean and max.

use crate::geodesy::point_to_point_distance_km;
use crate::trajectory::TrajectorySample;

const SECONDS_PER_HOUR: f64 = 3600.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

/// Instantaneous acceleration in km/h² for every sample after the first:
/// `(v[i] - v[i-1]) / dt[i] * 3600`, with `dt` in seconds.
///
/// The result has one entry per consecutive pair, NaN entries removed.
pub fn accelerations(samples: &[TrajectorySample]) -> Vec<f64> {
    samples
        .windows(2)
        .map(|pair| {
            let dt = (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64 / 1000.0;
            let dv = pair[1].speed_kmh - pair[0].speed_kmh;
            dv / dt * SECONDS_PER_HOUR
        })
        .filter(|a| !a.is_nan())
        .collect()
}

/// Sum of the geodesic distances between consecutive samples, in km.
pub fn total_distance_km(samples: &[TrajectorySample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| {
            point_to_point_distance_km(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}

/// Minutes between the first and last sample; zero for fewer than two.
pub fn duration_minutes(samples: &[TrajectorySample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => {
            (last.timestamp - first.timestamp).num_milliseconds() as f64 / MILLIS_PER_MINUTE
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn sample(offset_s: i64, lat: f64, lon: f64, speed: f64) -> TrajectorySample {
        TrajectorySample {
            timestamp: t0() + TimeDelta::seconds(offset_s),
            latitude: lat,
            longitude: lon,
            speed_kmh: speed,
        }
    }

    #[test]
    fn mean_median_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(mean(&v), 2.8);
        assert_eq!(median(&v), 3.0);
        assert_eq!(max(&v), 5.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn empty_statistics_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(max(&[]).is_nan());
    }

    #[test]
    fn acceleration_per_hour() {
        // +10 km/h over 10 s is 3600 km/h².
        let samples = [sample(0, 0.0, 0.0, 20.0), sample(10, 0.0, 0.0, 30.0)];
        assert_eq!(accelerations(&samples), vec![3600.0]);
    }

    #[test]
    fn zero_time_delta() {
        let samples = [
            sample(0, 0.0, 0.0, 20.0),
            sample(0, 0.0, 0.0, 20.0),
            sample(0, 0.0, 0.0, 25.0),
            sample(10, 0.0, 0.0, 15.0),
        ];
        let acc = accelerations(&samples);
        // 0/0 is dropped, 5/0 stays infinite.
        assert_eq!(acc.len(), 2);
        assert_eq!(acc[0], f64::INFINITY);
        assert_eq!(acc[1], -3600.0);
        assert_eq!(max(&acc), f64::INFINITY);
        assert_eq!(mean(&acc), f64::INFINITY);
    }

    #[test]
    fn single_sample() {
        let samples = [sample(0, 45.0, 4.8, 12.0)];
        assert!(accelerations(&samples).is_empty());
        assert_eq!(total_distance_km(&samples), 0.0);
        assert_eq!(duration_minutes(&samples), 0.0);
    }

    #[test]
    fn duration_uses_first_and_last() {
        let samples = [
            sample(0, 0.0, 0.0, 0.0),
            sample(420, 0.0, 0.0, 0.0),
            sample(600, 0.0, 0.0, 0.0),
        ];
        assert_eq!(duration_minutes(&samples), 10.0);
    }

    #[test]
    fn distance_sums_consecutive_pairs() {
        let samples = [
            sample(0, 45.0, 4.8, 0.0),
            sample(60, 45.01, 4.8, 0.0),
            sample(120, 45.0, 4.8, 0.0),
        ];
        let leg = point_to_point_distance_km(45.0, 4.8, 45.01, 4.8);
        assert!((total_distance_km(&samples) - 2.0 * leg).abs() < 1e-9);
    }
}
