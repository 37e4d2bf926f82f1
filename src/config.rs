//! Run configuration.
//!
//! The config file is a JSON object resolving to exactly three non-empty
//! strings — where to read, where to write, and how to authenticate —
//! plus an optional request timeout. Any missing or empty attribute is a
//! fatal error before a single transfer starts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};

/// Config path used when the CLI does not provide one.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for one copy run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the local workbook that will be copied
    pub source: String,
    /// Id of the destination spreadsheet
    pub destination: String,
    /// Path to the credential file used to authenticate
    pub credentials: String,
    /// Upper bound for a single remote call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    /// Read and validate the config file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Config(format!(
                "path to config file does not exist ({})",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path)
            .map_err(|error| Error::Config(format!("failed to read {}: {error}", path.display())))?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|error| Error::Config(format!("malformed config file: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (attribute, value) in [
            ("source", &self.source),
            ("destination", &self.destination),
            ("credentials", &self.credentials),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!(
                    "attribute must not be empty ({attribute})"
                )));
            }
        }
        Ok(())
    }
}
