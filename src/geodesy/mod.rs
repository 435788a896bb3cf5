//! Distance and planar measurement primitives used by the extractors.
//!
//! The pipelines only see [`point_to_point_distance_km`] and
//! [`project_and_measure_polygon`]; the geodesy library and the projection
//! formulas stay behind this module.

mod distance;
mod error;
mod polygon;
mod utm;

pub use distance::point_to_point_distance_km;
pub use error::GeodesyError;
pub use polygon::{project_and_measure_polygon, PolygonMeasure};
pub use utm::{Hemisphere, HemispherePolicy, UtmZone};
