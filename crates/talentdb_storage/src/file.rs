//! File-based storage backend.

use crate::backend::KvBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// A persistent backend storing one file per key.
///
/// File names are the lower-hex encoding of the key bytes, so arbitrary
/// key characters (`:` separators in particular) never reach the file
/// system. Writes go to a temporary file first and are renamed into
/// place, so readers observe either the old or the new value, never a
/// partial write. Rename is also what serializes same-key writes: the
/// last rename wins whole.
///
/// # Example
///
/// ```rust,ignore
/// use talentdb_storage::{KvBackend, FileBackend};
///
/// let backend = FileBackend::open("./data")?;
/// backend.put("e:user:u1", br#"{"id":"u1","name":"Alice"}"#)?;
/// ```
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
    /// Counter for unique temp file names within this process.
    tmp_counter: Mutex<u64>,
}

impl FileBackend {
    /// Opens a file backend rooted at `path`, creating the directory if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let root = path.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            tmp_counter: Mutex::new(0),
        })
    }

    /// Returns the root directory of this backend.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(hex::encode(key.as_bytes()))
    }

    fn next_tmp_path(&self) -> PathBuf {
        let mut counter = self.tmp_counter.lock();
        *counter += 1;
        self.root
            .join(format!(".tmp-{}-{}", std::process::id(), *counter))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let tmp = self.next_tmp_path();
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.key_path(key))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with(".tmp-") {
                continue;
            }
            let bytes = hex::decode(name)
                .map_err(|e| StorageError::Corrupted(format!("bad key file name {name}: {e}")))?;
            let key = String::from_utf8(bytes)
                .map_err(|e| StorageError::Corrupted(format!("non-utf8 key in {name}: {e}")))?;
            if key.starts_with(prefix) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
