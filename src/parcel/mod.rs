mod error;
mod extractor;
mod features;
mod vertex;

pub use error::ParcelError;
pub use extractor::{ParcelFeatureExtractor, ParcelReport};
pub use features::ParcelFeatures;
pub use vertex::{parse_vertices, ParcelVertex, REQUIRED_COLUMNS};
