//! This module provides a `Store` kept entirely in memory.

use std::collections::BTreeMap;
use std::io;

use crate::core::{FsError, Result, Store};

/// An in-memory `Store`, keyed by the exact key string.
///
/// Useful for tests and for sessions that should not touch the host.
/// Keys are not normalized: `a.txt` and `./a.txt` are different resources.
#[derive(Debug, Default, Clone)]
pub struct MapStore {
    entries: BTreeMap<String, Vec<u8>>,
    read_only: bool,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `write()` fail, simulating an unwritable store.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl Store for MapStore {
    fn read(&self, key: &str) -> Result<Vec<u8>> {
        self.entries.get(key).cloned().ok_or_else(|| {
            FsError::io(
                key,
                io::Error::new(io::ErrorKind::NotFound, "no such resource"),
            )
        })
    }

    fn write(&mut self, key: &str, content: &[u8]) -> Result<()> {
        if self.read_only {
            return Err(FsError::io(
                key,
                io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            ));
        }
        self.entries.insert(key.to_string(), content.to_vec());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
