use thiserror::Error;

use crate::geodesy::GeodesyError;

#[derive(Debug, Error)]
pub enum ParcelError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("degenerate geometry: {0}")]
    Degenerate(#[from] GeodesyError),
}
