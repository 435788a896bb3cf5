use serde::Serialize;

use super::kinematics::{accelerations, duration_minutes, max, mean, median, total_distance_km};
use crate::table::Identified;
use crate::trajectory::TrajectorySample;

/// Motion summary of one trajectory file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryFeatures {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Duree_mn")]
    pub duration_min: f64,
    #[serde(rename = "Distance_km")]
    pub distance_km: f64,
    #[serde(rename = "Vitesse_moy_kmph")]
    pub speed_mean_kmh: f64,
    #[serde(rename = "Vitesse_med_kmph")]
    pub speed_median_kmh: f64,
    #[serde(rename = "Vitesse_max_kmph")]
    pub speed_max_kmh: f64,
    #[serde(rename = "Acceleration_moy_kmph2")]
    pub accel_mean_kmh2: f64,
    #[serde(rename = "Acceleration_max_kmph2")]
    pub accel_max_kmh2: f64,
}

impl TrajectoryFeatures {
    /// `None` when there are no samples.
    pub fn from_samples(id: impl Into<String>, samples: &[TrajectorySample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let speeds: Vec<f64> = samples.iter().map(|s| s.speed_kmh).collect();
        let accel = accelerations(samples);

        Some(Self {
            id: id.into(),
            duration_min: duration_minutes(samples),
            distance_km: total_distance_km(samples),
            speed_mean_kmh: mean(&speeds),
            speed_median_kmh: median(&speeds),
            speed_max_kmh: max(&speeds),
            accel_mean_kmh2: mean(&accel),
            accel_max_kmh2: max(&accel),
        })
    }
}

impl Identified for TrajectoryFeatures {
    fn id(&self) -> &str {
        &self.id
    }
}
