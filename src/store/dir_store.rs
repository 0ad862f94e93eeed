//! This module provides a `Store` that maps to a real directory on the host system.
//!
//! ### Key Features:
//! - **Rooted keys**: relative keys are resolved against the store root; absolute keys
//!   (import only) are used as they are.
//! - **Raw payload**: content is written and read as plain bytes, with no header or metadata.
//! - **Root creation**: a missing root directory is created on construction.

use std::io;
use std::path::{Path, PathBuf};

use crate::core::{FsError, Result, Store};

/// A `Store` backed by a host directory.
///
/// ### Example:
/// ```
/// use memshell::{DirStore, Store};
///
/// let root = std::env::temp_dir().join("memshell_doc_store");
/// let mut store = DirStore::new(&root).unwrap();
/// store.write("note.txt", b"Hello").unwrap();
/// assert_eq!(store.read("note.txt").unwrap(), b"Hello");
/// # std::fs::remove_dir_all(root).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Creates a store rooted at the host directory `root`.
    /// If `root` does not exist it will be created.
    /// An error is returned if `root` is empty or exists but is not a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let target = root.display().to_string();

        if root.as_os_str().is_empty() {
            return Err(FsError::io(
                target,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid root path: empty"),
            ));
        }
        if root.exists() && !root.is_dir() {
            return Err(FsError::io(
                target,
                io::Error::new(io::ErrorKind::InvalidInput, "store root is not a directory"),
            ));
        }
        if !root.exists() {
            std::fs::create_dir_all(root).map_err(|e| FsError::io(&target, e))?;
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the host directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `key` to a host path.
    pub fn to_host(&self, key: &str) -> PathBuf {
        let key = Path::new(key);
        if key.is_absolute() {
            key.to_path_buf()
        } else {
            self.root.join(key)
        }
    }
}

impl Store for DirStore {
    fn read(&self, key: &str) -> Result<Vec<u8>> {
        let host = self.to_host(key);
        if host.is_dir() {
            return Err(FsError::io(
                key,
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            ));
        }
        std::fs::read(&host).map_err(|e| FsError::io(key, e))
    }

    fn write(&mut self, key: &str, content: &[u8]) -> Result<()> {
        let host = self.to_host(key);
        std::fs::write(&host, content).map_err(|e| FsError::io(key, e))
    }

    fn exists(&self, key: &str) -> bool {
        self.to_host(key).is_file()
    }
}
