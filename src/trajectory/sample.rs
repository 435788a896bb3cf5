use std::io::Read;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::table::has_columns;
use crate::trajectory::TrajectoryError;

pub const REQUIRED_COLUMNS: [&str; 4] = ["Temps", "Latitude", "Longitude", "Vitesse"];

/// One GPS fix, in file order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_kmh: f64,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    #[serde(rename = "Temps")]
    time: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Vitesse")]
    speed: f64,
}

/// Read every sample from a trajectory table.
///
/// A table without data rows is empty whatever its header holds. Otherwise
/// every column in [`REQUIRED_COLUMNS`] must be present; other columns are
/// ignored.
pub fn parse_samples<R: Read>(
    reader: &mut csv::Reader<R>,
    timestamp_format: &str,
) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let headers = reader.headers()?.clone();
    if let Err(missing) = has_columns(&headers, &REQUIRED_COLUMNS) {
        if reader.records().next().is_none() {
            return Ok(Vec::new());
        }
        return Err(TrajectoryError::MissingColumn(missing));
    }

    let mut samples = Vec::new();
    for (i, record) in reader.deserialize::<RawSample>().enumerate() {
        let raw = record?;
        let timestamp = NaiveDateTime::parse_from_str(&raw.time, timestamp_format)
            .map_err(|source| TrajectoryError::MalformedTimestamp {
                row: i + 1,
                value: raw.time.clone(),
                source,
            })?;
        samples.push(TrajectorySample {
            timestamp,
            latitude: raw.latitude,
            longitude: raw.longitude,
            speed_kmh: raw.speed,
        });
    }

    Ok(samples)
}
