use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesyError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("non-finite coordinate (lon {lon}, lat {lat})")]
    NonFiniteCoordinate { lon: f64, lat: f64 },
    #[error("polygon centroid is undefined")]
    NoCentroid,
}
