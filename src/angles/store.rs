//! File-backed angle storage.
//!
//! The whole set lives in one JSON file that is replaced on every save.
//! Writes go to a sibling temporary file first and are renamed into place,
//! so readers see either the old set or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::observability::metrics;

/// Number of label slots (`angle1` .. `angle5`).
pub const SLOT_COUNT: u8 = 5;

/// Errors reading or writing the angle file. A missing file is not an error.
#[derive(Debug, Error)]
pub enum AngleStoreError {
    #[error("Failed to access angle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode angles: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Angle file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The persisted angle mapping.
///
/// Normally holds `angle1` .. `angle5`, but any keys and values are kept
/// exactly as saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleSet(Map<String, Value>);

impl AngleSet {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Raw value stored for `angle{slot}`.
    pub fn angle(&self, slot: u8) -> Option<&Value> {
        self.0.get(&format!("angle{slot}"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Persists the last saved `AngleSet` to a single file.
#[derive(Clone)]
pub struct AngleStore {
    path: PathBuf,
    /// Serializes saves so concurrent writers cannot interleave.
    write_lock: Arc<Mutex<()>>,
}

impl AngleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored set.
    pub async fn save(&self, angles: &AngleSet) -> Result<(), AngleStoreError> {
        let bytes = serde_json::to_vec(angles).map_err(AngleStoreError::Encode)?;

        let _guard = self.write_lock.lock().await;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, &bytes).await.map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| self.io_err(e))?;

        metrics::record_angles_saved();
        tracing::debug!(path = ?self.path, bytes = bytes.len(), "Angles persisted");
        Ok(())
    }

    /// Read the stored set. Returns an empty set if nothing was saved yet.
    pub async fn load(&self) -> Result<AngleSet, AngleStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AngleSet::default()),
            Err(e) => return Err(self.io_err(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| AngleStoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, source: std::io::Error) -> AngleStoreError {
        AngleStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
