use std::path::Path;

use crate::config::Config;
use crate::geodesy::HemispherePolicy;
use crate::parcel::{parse_vertices, ParcelError, ParcelFeatures};
use crate::table::{collect_rows, file_id, list_files, open_csv, BatchReport, TableError};

pub type ParcelReport = BatchReport<ParcelFeatures, ParcelError>;

/// Computes one [`ParcelFeatures`] row per parcel file in a directory.
#[derive(Debug, Clone)]
pub struct ParcelFeatureExtractor {
    hemisphere: HemispherePolicy,
    extension: String,
    sort_by_id: bool,
}

impl Default for ParcelFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParcelFeatureExtractor {
    pub fn new() -> Self {
        Self {
            hemisphere: HemispherePolicy::default(),
            extension: "csv".to_string(),
            sort_by_id: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            hemisphere: config.hemisphere,
            extension: config.extension.clone(),
            sort_by_id: config.sort_by_id,
        }
    }

    pub fn sorted(mut self, sort_by_id: bool) -> Self {
        self.sort_by_id = sort_by_id;
        self
    }

    pub fn with_hemisphere(mut self, hemisphere: HemispherePolicy) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    /// Features for a single file.
    ///
    /// `None` when the file has no `Latitude`/`Longitude` pair or no rows.
    pub fn extract_file(&self, path: &Path) -> Result<Option<ParcelFeatures>, ParcelError> {
        let mut reader = open_csv(path)?;
        let Some(vertices) = parse_vertices(&mut reader)? else {
            return Ok(None);
        };
        if vertices.is_empty() {
            return Ok(None);
        }

        let features = ParcelFeatures::from_vertices(file_id(path), &vertices, self.hemisphere)?;
        Ok(Some(features))
    }

    /// Process every matching file in `dir`.
    ///
    /// Per-file failures are logged and collected in the report; only a
    /// directory that cannot be listed is an error.
    pub fn extract_dir(&self, dir: &Path) -> Result<ParcelReport, TableError> {
        let files = list_files(dir, &self.extension)?;
        log::info!(
            "Extracting parcel features from {} files in {}",
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
