use geo::Coord;
use serde::Serialize;

use crate::geodesy::{project_and_measure_polygon, GeodesyError, HemispherePolicy};
use crate::parcel::ParcelVertex;
use crate::table::Identified;

const HECTARES_PER_M2: f64 = 1e-4;
const KM_PER_M: f64 = 1e-3;

/// Geometric summary of one parcel file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelFeatures {
    #[serde(rename = "Parcelle")]
    pub id: String,
    #[serde(rename = "Surface_ha")]
    pub area_ha: f64,
    #[serde(rename = "Perimetre_km")]
    pub perimeter_km: f64,
    /// Raw vertex count, a repeated closing vertex included.
    #[serde(rename = "Complexite")]
    pub complexity: usize,
}

impl ParcelFeatures {
    pub fn from_vertices(
        id: impl Into<String>,
        vertices: &[ParcelVertex],
        policy: HemispherePolicy,
    ) -> Result<Self, GeodesyError> {
        let ring: Vec<Coord<f64>> = vertices.iter().copied().map(Coord::from).collect();
        let measure = project_and_measure_polygon(&ring, policy)?;
        let id = id.into();

        log::debug!("Parcel {} measured in EPSG:{}", id, measure.zone.epsg());

        Ok(Self {
            id,
            area_ha: measure.area_m2 * HECTARES_PER_M2,
            perimeter_km: measure.perimeter_m * KM_PER_M,
            complexity: vertices.len(),
        })
    }
}

impl Identified for ParcelFeatures {
    fn id(&self) -> &str {
        &self.id
    }
}
