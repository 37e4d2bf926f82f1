//! Credential provider.
//!
//! Kept deliberately thin: the OAuth handshake that mints and refreshes
//! tokens is outside this tool's scope. The credential file is a JSON
//! object carrying a bearer access token under `access_token` (or the
//! shorter `token`), and this module only reads it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};

#[derive(Debug, Deserialize)]
struct StoredCredential {
    access_token: Option<String>,
    token: Option<String>,
}

/// Read the bearer access token from the credential file at `path`.
pub fn load_access_token<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::Authentication(format!(
            "path to credential file does not exist ({})",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path).map_err(|error| {
        Error::Authentication(format!("failed to read {}: {error}", path.display()))
    })?;
    let credential: StoredCredential = serde_json::from_str(&raw)
        .map_err(|error| Error::Authentication(format!("malformed credential file: {error}")))?;

    credential
        .access_token
        .or(credential.token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Authentication("credential file carries no access token".to_string()))
}
