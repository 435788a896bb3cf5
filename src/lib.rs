//! Per-file feature extraction for GPS trajectories and land parcels.
//!
//! Each extractor reads a directory of CSV files and produces one output row
//! per successfully processed file, together with the list of files that
//! failed.

pub mod config;
pub mod geodesy;
pub mod parcel;
pub mod table;
pub mod trajectory;

pub use config::{Config, ConfigError};
pub use parcel::{ParcelError, ParcelFeatureExtractor, ParcelFeatures};
pub use table::{BatchReport, FileFailure, OutputFormat, TableError};
pub use trajectory::{TrajectoryError, TrajectoryFeatureExtractor, TrajectoryFeatures};
