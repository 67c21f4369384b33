//! Filesystem-backed key-value store.
//!
//! Each key maps to one file under the store directory. Disk-full conditions
//! surface as `KvError::CapacityExceeded` so the catalog store's degrade
//! path works against real storage, not just the in-memory quota.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::r#trait::{KeyValueStore, KvError};

#[derive(Debug, Clone)]
pub struct FsKvStore {
    dir: PathBuf,
}

impl FsKvStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, KvError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(io_to_kv)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are caller-controlled constants, but keep them filename-safe.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

fn io_to_kv(err: std::io::Error) -> KvError {
    match err.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => KvError::CapacityExceeded,
        _ => KvError::Backend(err.to_string()),
    }
}

impl KeyValueStore for FsKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_to_kv(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(key);
        // Write-then-rename so a failed write never clobbers the old value.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            io_to_kv(e)
        })?;
        std::fs::rename(&tmp, &path).map_err(io_to_kv)
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_to_kv(e)),
        }
    }
}
