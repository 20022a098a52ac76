use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use mindgen_core::models::record::ReportRecord;

use crate::error::StorageError;

/// History of composed reports, persisted as one pretty-printed JSON array
/// that is rewritten on every append.
pub struct ReportHistory {
    path: PathBuf,
}

impl ReportHistory {
    /// No I/O happens here; the file may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order. A missing file reads as empty.
    pub fn load(&self) -> Result<Vec<ReportRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        let records = serde_json::from_slice(&bytes)?;
        Ok(records)
    }

    /// Append one record to the history.
    pub fn append(&self, record: &ReportRecord) -> Result<(), StorageError> {
        let mut records = self.load()?;
        records.push(record.clone());
        let body = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, body)?;
        info!(
            record_id = %record.id,
            username = %record.username,
            "saved report record"
        );
        Ok(())
    }

    /// A user's records, newest first.
    pub fn for_user(&self, username: &str) -> Result<Vec<ReportRecord>, StorageError> {
        let mut records: Vec<ReportRecord> = self
            .load()?
            .into_iter()
            .filter(|record| record.username == username)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Fetch one record by id, checking ownership. A record owned by a
    /// different user is reported as not found.
    pub fn get(&self, id: Uuid, username: &str) -> Result<ReportRecord, StorageError> {
        self.load()?
            .into_iter()
            .find(|record| record.id == id && record.username == username)
            .ok_or(StorageError::NotFound { id })
    }
}
