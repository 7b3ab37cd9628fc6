//! File-based data source.
//!
//! Reads a status snapshot from a JSON file on every fetch.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{SnapshotSource, StatusSnapshot};
use crate::error::PollError;

/// A data source that reads status snapshots from a JSON file.
///
/// Useful for replaying a captured `/data` response, or for pointing the
/// dashboard at a file another process keeps rewriting. The file is read
/// fresh each cycle, so the last successful read is always what's shown.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    async fn fetch(&mut self) -> Result<StatusSnapshot, PollError> {
        let content = tokio::fs::read(&self.path).await?;
        StatusSnapshot::from_slice(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
