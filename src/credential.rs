use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CredentialError;

/// Bearer token for the completion API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn load(path: &Path) -> Result<Self, CredentialError> {
        let resolved = expand_home(path)?;
        let file = File::open(&resolved).map_err(|source| CredentialError::Read {
            path: resolved.clone(),
            source,
        })?;

        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|source| CredentialError::Read {
                path: resolved.clone(),
                source,
            })?;

        let token = first_line.trim();
        if token.is_empty() {
            return Err(CredentialError::Empty(resolved));
        }
        debug!(path = %resolved.display(), "loaded API key");
        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

fn expand_home(path: &Path) -> Result<PathBuf, CredentialError> {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| CredentialError::NoHomeDir(path.display().to_string())),
        Err(_) => Ok(path.to_path_buf()),
    }
}
