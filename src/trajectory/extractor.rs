use std::path::Path;

use crate::config::{Config, DEFAULT_TIMESTAMP_FORMAT};
use crate::table::{collect_rows, file_id, list_files, open_csv, BatchReport, TableError};
use crate::trajectory::{parse_samples, TrajectoryError, TrajectoryFeatures};

pub type TrajectoryReport = BatchReport<TrajectoryFeatures, TrajectoryError>;

/// Computes one [`TrajectoryFeatures`] row per trajectory file in a directory.
#[derive(Debug, Clone)]
pub struct TrajectoryFeatureExtractor {
    timestamp_format: String,
    extension: String,
    sort_by_id: bool,
}

impl Default for TrajectoryFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TrajectoryFeatureExtractor {
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            extension: "csv".to_string(),
            sort_by_id: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            timestamp_format: config.timestamp_format.clone(),
            extension: config.extension.clone(),
            sort_by_id: config.sort_by_id,
        }
    }

    pub fn sorted(mut self, sort_by_id: bool) -> Self {
        self.sort_by_id = sort_by_id;
        self
    }

    /// Features for a single file, or `None` if it holds no samples.
    pub fn extract_file(&self, path: &Path) -> Result<Option<TrajectoryFeatures>, TrajectoryError> {
        let mut reader = open_csv(path)?;
        let samples = parse_samples(&mut reader, &self.timestamp_format)?;
        Ok(TrajectoryFeatures::from_samples(file_id(path), &samples))
    }

    /// Process every matching file in `dir`.
    ///
    /// Per-file failures are logged and collected in the report; only a
    /// directory that cannot be listed is an error.
    pub fn extract_dir(&self, dir: &Path) -> Result<TrajectoryReport, TableError> {
        let files = list_files(dir, &self.extension)?;
        log::info!(
            "Extracting trajectory features from {} files in {}",
            files.len(),
            dir.display()
        );

        let mut report = collect_rows(&files, |path| self.extract_file(path));
        if self.sort_by_id {
            report.sort_by_id();
        }
        Ok(report)
    }
}
