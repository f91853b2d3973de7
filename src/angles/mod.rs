//! Angle entry and QR label text.
//!
//! # Data Flow
//! ```text
//! POST /save_angles → store.rs (write temp file, rename over angles file)
//! GET  /get_angles  → store.rs (missing file = empty set, corrupt = error)
//! GET  /qr{1..5}    → store.rs → label.rs ("{n}_{angle}_MotorBrew")
//! ```

pub mod handlers;
pub mod label;
pub mod store;

pub use label::{render_label, LabelSlot};
pub use store::{AngleSet, AngleStore, AngleStoreError};
