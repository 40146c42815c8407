//! Persistence gateway
//!
//! Three independent keyed blobs. The store only moves JSON text around; parsing and
//! migration live with the types that own the data.

use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The persisted blobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Stats,
    UpgradeLevels,
    Player,
}

impl StoreKey {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stats => "wordrun_stats",
            Self::UpgradeLevels => "wordrun_upgradeLevels",
            Self::Player => "wordrun_player",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Keyed blob storage
pub trait Store {
    /// Raw contents for a key, `None` if nothing was ever saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the backing medium exists but cannot be read.
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Replace the contents for a key
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the contents could not be written.
    fn save(&mut self, key: StoreKey, contents: &str) -> Result<(), StoreError>;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, or `./.wordrun` when none can be resolved
    #[must_use]
    pub fn default_dir() -> PathBuf {
        ProjectDirs::from("", "", "wordrun").map_or_else(
            || PathBuf::from(".wordrun"),
            |dirs| dirs.data_dir().to_path_buf(),
        )
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl Store for FileStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no saved {} yet", key.name());
                Ok(None)
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn save(&mut self, key: StoreKey, contents: &str) -> Result<(), StoreError> {
        let path = self.path(key);
        let write = |path: &Path| -> io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, contents)?;
            fs::rename(&tmp, path)
        };
        write(&path).map_err(|source| StoreError::Write { path, source })?;
        log::debug!("saved {}", key.name());
        Ok(())
    }
}

/// Volatile store for tests and throwaway profiles
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: FxHashMap<StoreKey, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, as if an earlier version had saved it
    #[must_use]
    pub fn with(mut self, key: StoreKey, contents: impl Into<String>) -> Self {
        self.blobs.insert(key, contents.into());
        self
    }
}

impl Store for MemoryStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(&key).cloned())
    }

    fn save(&mut self, key: StoreKey, contents: &str) -> Result<(), StoreError> {
        self.blobs.insert(key, contents.to_string());
        Ok(())
    }
}
