use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No API key file at {0}")]
    Missing(PathBuf),

    #[error("Could not read API key file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("API key file {0} is empty")]
    Empty(PathBuf),

    #[error("Could not find home directory")]
    NoHomeDir,
}

/// Bearer token for the CRM API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the token out of logs
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// `~/.config/attio/api_key`
pub fn default_key_path() -> Result<PathBuf, CredentialError> {
    let home = dirs::home_dir().ok_or(CredentialError::NoHomeDir)?;
    Ok(home.join(".config").join("attio").join("api_key"))
}

/// Read the API key file, trimming surrounding whitespace.
pub fn load_api_key(path: &Path) -> Result<ApiKey, CredentialError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CredentialError::Missing(path.to_path_buf())
        } else {
            CredentialError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(CredentialError::Empty(path.to_path_buf()));
    }
    Ok(ApiKey::new(token))
}
