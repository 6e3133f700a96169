//! Session persistence — write-through transcript storage.
//!
//! DESIGN
//! ======
//! The transcript is written after every mutation and read once when a
//! session opens. [`FileStore`] keeps one JSON array in a well-known
//! file, standing in for the browser session storage of the original
//! surface; [`MemoryStore`] backs tests and ephemeral sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ClientError;
use crate::turn::ChatTurn;

/// Storage seam for the session transcript.
pub trait SessionStore {
    /// Load the persisted transcript. `None` when nothing was persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when persisted content exists but cannot be read
    /// or parsed; callers degrade this to a fresh session.
    fn load(&self) -> Result<Option<Vec<ChatTurn>>, ClientError>;

    /// Persist the full transcript, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error when the transcript cannot be serialized or
    /// written.
    fn save(&self, turns: &[ChatTurn]) -> Result<(), ClientError>;

    /// Drop any persisted transcript. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when existing content cannot be removed.
    fn clear(&self) -> Result<(), ClientError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

/// One JSON file holding the serialized transcript array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<Vec<ChatTurn>>, ClientError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let turns: Vec<ChatTurn> = serde_json::from_str(&text)?;
                Ok(Some(turns))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(ClientError::Storage(error)),
        }
    }

    fn save(&self, turns: &[ChatTurn]) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(turns)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ClientError::Storage(error)),
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store. Clones share the same underlying transcript, which
/// lets tests keep a handle for inspection after handing the store off.
#[derive(Clone, Default)]
pub struct MemoryStore {
    turns: Arc<Mutex<Option<Vec<ChatTurn>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<ChatTurn>>> {
        self.turns.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<ChatTurn>>, ClientError> {
        Ok(self.lock().clone())
    }

    fn save(&self, turns: &[ChatTurn]) -> Result<(), ClientError> {
        *self.lock() = Some(turns.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
