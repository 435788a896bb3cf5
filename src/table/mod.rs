mod error;
mod report;
mod scan;
mod writer;

pub use error::TableError;
pub use report::{collect_rows, BatchReport, FileFailure, Identified};
pub use scan::{file_id, has_columns, list_files, open_csv};
pub use writer::{write_rows, OutputFormat};
