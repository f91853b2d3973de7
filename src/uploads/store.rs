//! In-memory upload storage.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use serde_json::Value;

use crate::observability::metrics;
use crate::uploads::types::{UploadData, UploadRecord};

/// Why a payload could not be turned into an upload record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Missing \"data\" field in request")]
    MissingData,

    #[error("\"data\" field must be a dictionary/object")]
    DataNotObject,
}

#[derive(Default)]
struct StoreInner {
    /// Last id handed out. Never rewound, so ids are not reused after a reset.
    last_id: u64,
    records: Vec<UploadRecord>,
}

/// A thread-safe, append-only sequence of upload records.
#[derive(Clone, Default)]
pub struct UploadStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl UploadStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // Critical sections never panic halfway through a mutation.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Extract `data` from a raw request payload and append it.
    pub fn append_payload(&self, payload: &Value) -> Result<UploadRecord, UploadRejection> {
        let data = payload
            .as_object()
            .and_then(|body| body.get("data"))
            .ok_or(UploadRejection::MissingData)?;

        match data {
            Value::Object(map) => Ok(self.append(map.clone())),
            _ => Err(UploadRejection::DataNotObject),
        }
    }

    /// Append a record with the next id and the current timestamp.
    pub fn append(&self, data: UploadData) -> UploadRecord {
        let mut inner = self.lock();
        inner.last_id += 1;

        let record = UploadRecord {
            id: inner.last_id,
            data,
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        };
        inner.records.push(record.clone());

        metrics::record_upload(inner.records.len());
        record
    }

    /// Snapshot of the current records.
    pub fn list(&self) -> (usize, Vec<UploadRecord>) {
        let inner = self.lock();
        (inner.records.len(), inner.records.clone())
    }

    /// Drop every record. Returns how many were removed.
    pub fn reset(&self) -> usize {
        let mut inner = self.lock();
        let dropped = inner.records.len();
        inner.records.clear();

        metrics::record_uploads_reset();
        dropped
    }
}
