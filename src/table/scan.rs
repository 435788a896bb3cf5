use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::table::TableError;

/// List the regular files in `dir` whose extension equals `extension`.
///
/// Entries are returned in directory-listing order, which is platform
/// dependent.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, TableError> {
    if !dir.is_dir() {
        return Err(TableError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Row identifier for a file: its name without the extension.
pub fn file_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// CSV reader that trims data fields; header names are matched exactly.
pub fn open_csv(path: &Path) -> Result<csv::Reader<File>, csv::Error> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new().trim(Trim::Fields).from_reader(file))
}

/// First of `required` that is absent from `headers`, if any.
pub fn has_columns<'a>(headers: &StringRecord, required: &[&'a str]) -> Result<(), &'a str> {
    match required
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        Some(missing) => Err(*missing),
        None => Ok(()),
    }
}
