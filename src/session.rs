use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Durable store for the signed-in username
///
/// One file, one value. Read once at startup, rewritten on sign-in/sign-up,
/// removed on sign-out. Nothing else is persisted client-side; the value is
/// trusted at face value until the recommender rejects it.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the persisted username, if any
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let username = contents.trim();
                if username.is_empty() {
                    None
                } else {
                    Some(username.to_string())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                None
            }
        }
    }

    /// Persist the username, replacing any previous value
    pub fn save(&self, username: &str) -> AppResult<()> {
        std::fs::write(&self.path, username)?;
        Ok(())
    }

    /// Remove the persisted username; absent file counts as cleared
    pub fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
