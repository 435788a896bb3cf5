use std::io::Read;

use geo::Coord;
use serde::Deserialize;

use crate::parcel::ParcelError;
use crate::table::has_columns;

pub const REQUIRED_COLUMNS: [&str; 2] = ["Latitude", "Longitude"];

/// One boundary point of a parcel, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParcelVertex {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl From<ParcelVertex> for Coord<f64> {
    fn from(v: ParcelVertex) -> Self {
        Coord {
            x: v.longitude,
            y: v.latitude,
        }
    }
}

/// Read the vertex ring of a parcel table.
///
/// Returns `None` when the table lacks a `Latitude` or `Longitude` column.
pub fn parse_vertices<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Option<Vec<ParcelVertex>>, ParcelError> {
    let headers = reader.headers()?;
    if let Err(missing) = has_columns(headers, &REQUIRED_COLUMNS) {
        log::debug!("No '{}' column, not a parcel table", missing);
        return Ok(None);
    }

    let vertices = reader
        .deserialize::<ParcelVertex>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(vertices))
}
