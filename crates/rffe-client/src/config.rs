//! Batch configuration: the JSON document consumed by the batch runner
//!
//! Key order of the `commands` object is the execution order before the
//! attenuation reordering policy is applied, which is why this crate
//! enables `serde_json`'s `preserve_order` feature.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::session::DEFAULT_PORT;

/// Parsed batch configuration.
///
/// ```json
/// {
///   "server_ip": "192.168.0.90",
///   "server_port": 5000,
///   "commands": {
///     "set_rf_band": "BAND_2_6GHZ",
///     "set_switches": { "mixer_switch": "BYPASS" },
///     "set_frontend_attenuation": 10,
///     "get_status": true
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Device address; may be omitted when the CLI supplies `--ip`
    #[serde(default)]
    pub server_ip: Option<String>,

    /// Device control port
    #[serde(default = "default_port")]
    pub server_port: u16,

    /// Command name to argument, in execution order
    #[serde(default)]
    pub commands: Map<String, Value>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl BatchConfig {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
