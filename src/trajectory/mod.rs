mod error;
mod extractor;
mod features;
mod kinematics;
mod sample;

pub use error::TrajectoryError;
pub use extractor::{TrajectoryFeatureExtractor, TrajectoryReport};
pub use features::TrajectoryFeatures;
pub use sample::{parse_samples, TrajectorySample, REQUIRED_COLUMNS};
