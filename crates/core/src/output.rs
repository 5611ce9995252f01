//! Output documents on disk.
//!
//! A document's file name is derived from the repository and major version.
//! An existing file means the document was already generated: it is skipped
//! and never overwritten.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes changelog documents into a directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Creates a writer targeting `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a writer targeting the current working directory.
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Directory documents are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name of the document for `repository` at `major`.
    #[must_use]
    pub fn file_name(repository: &str, major: u64) -> String {
        format!("{repository}.v{major}.md")
    }

    /// Full path of the document for `repository` at `major`.
    #[must_use]
    pub fn path(&self, repository: &str, major: u64) -> PathBuf {
        self.dir.join(Self::file_name(repository, major))
    }

    /// Whether the document was already generated.
    #[must_use]
    pub fn exists(&self, repository: &str, major: u64) -> bool {
        self.path(repository, major).exists()
    }

    /// Writes a new document.
    ///
    /// # Errors
    ///
    /// Fails if the file already exists or cannot be written.
    pub fn write(&self, repository: &str, major: u64, contents: &str) -> Result<PathBuf> {
        let path = self.path(repository, major);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote changelog");
        Ok(path)
    }
}
