use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: malformed timestamp '{value}': {source}")]
    MalformedTimestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
