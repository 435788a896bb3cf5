use std::io::Write;

use serde::Serialize;

use crate::table::TableError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Write `rows` as a table with one record per row.
///
/// CSV output has a header line taken from the serialized field names. JSON
/// output is an array of objects; non-finite floats become `null`.
pub fn write_rows<R, W>(rows: &[R], format: OutputFormat, mut out: W) -> Result<(), TableError>
where
    R: Serialize,
    W: Write,
{
    match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
