//! Student dataset sources.
//!
//! A [`StudentSource`] produces the full list of student records on every
//! call. Nothing is cached between calls, so edits to the backing file are
//! visible to the next request.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::student::StudentRecord;

/// Read-only provider of student records.
#[async_trait]
pub trait StudentSource: Send + Sync {
    /// Load the complete dataset in its original order.
    async fn load(&self) -> Result<Vec<StudentRecord>, CoreError>;
}

/// Parse raw dataset text (a JSON array of records).
///
/// Fails with [`CoreError::DataFormat`] if the text is not JSON, is not an
/// array, or holds a record without a string `name` and numeric `total`.
pub fn parse_students(raw: &str) -> Result<Vec<StudentRecord>, CoreError> {
    Ok(serde_json::from_str(raw)?)
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// Dataset stored as a JSON file, re-read on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StudentSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<StudentRecord>, CoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to read student data");
            CoreError::DataUnavailable(e)
        })?;

        parse_students(&raw).inspect_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to parse student data");
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Fixed in-memory dataset.
///
/// Counts how many times it has been loaded, which lets callers confirm
/// that rejected requests never reach the data.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<StudentRecord>,
    loads: AtomicUsize,
}

impl MemorySource {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of completed [`StudentSource::load`] calls.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentSource for MemorySource {
    async fn load(&self) -> Result<Vec<StudentRecord>, CoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}
