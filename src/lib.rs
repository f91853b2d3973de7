//! MotorBrew intake service library.
//!
//! Two groups of endpoints share one server:
//! - uploads: keyed item counts posted behind `x-api-key`, kept in memory
//! - angles: five persisted angles and the QR label text derived from them

pub mod angles;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod uploads;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
