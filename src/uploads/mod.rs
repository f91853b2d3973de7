//! Upload intake.
//!
//! # Data Flow
//! ```text
//! POST /upload/
//!     → security::api_key (x-api-key present, optionally allow-listed)
//!     → handlers.rs (JSON body, `data` must be an object)
//!     → store.rs (next id, timestamp, append)
//! GET /uploads/  → store snapshot
//! POST /reset/   → store cleared, id counter kept
//! ```

pub mod handlers;
pub mod store;
pub mod types;

pub use store::{UploadRejection, UploadStore};
pub use types::{UploadData, UploadList, UploadRecord, UploadResponse};
