use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Output rows keyed by the file they were computed from.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug)]
pub struct FileFailure<E> {
    pub path: PathBuf,
    pub error: E,
}

/// Result of running an extractor over a directory.
///
/// `rows` holds exactly the successfully processed files; files that were
/// skipped (empty, or lacking optional columns) appear in neither list.
#[derive(Debug)]
pub struct BatchReport<R, E> {
    pub rows: Vec<R>,
    pub failures: Vec<FileFailure<E>>,
}

impl<R, E> Default for BatchReport<R, E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<R: Identified, E> BatchReport<R, E> {
    pub fn sort_by_id(&mut self) {
        self.rows.sort_by(|a, b| a.id().cmp(b.id()));
        self.failures.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }
}

/// Run `process` over every file, keeping going past per-file failures.
///
/// `Ok(None)` means the file was skipped on purpose.
pub fn collect_rows<R, E, F>(files: &[PathBuf], mut process: F) -> BatchReport<R, E>
where
    E: Display,
    F: FnMut(&Path) -> Result<Option<R>, E>,
{
    let mut report = BatchReport::default();

    for path in files {
        match process(path) {
            Ok(Some(row)) => {
                log::debug!("Processed {}", path.display());
                report.rows.push(row);
            }
            Ok(None) => {
                log::debug!("Skipped {}", path.display());
            }
            Err(e) => {
                log::warn!("Failed to process {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error: e,
                });
            }
        }
    }

    log::info!(
        "Processed {} of {} files ({} failed)",
        report.rows.len(),
        files.len(),
        report.failures.len()
    );
    report
}
