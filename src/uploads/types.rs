//! Upload record types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A submitted mapping of item name to count. Values are not restricted to
/// integers; anything JSON can hold is kept as-is.
pub type UploadData = Map<String, Value>;

/// One stored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// 1-based, strictly increasing for the lifetime of the process.
    pub id: u64,
    pub data: UploadData,
    /// Local time, ISO-8601 without offset, microsecond precision.
    pub timestamp: String,
}

/// Body of `POST /upload/` on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub upload: UploadRecord,
}

/// Body of `GET /uploads/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadList {
    pub count: usize,
    pub uploads: Vec<UploadRecord>,
}
