//! Startup configuration resolution.
//!
//! Fail fast: a config file that is given but unreadable or invalid is
//! fatal. No file means built-in defaults.

use std::path::Path;

use crate::config::{load_config, validation::validate_config, ConfigError, ServiceConfig};

pub fn resolve_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = ServiceConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}
