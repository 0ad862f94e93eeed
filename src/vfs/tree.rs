//! This module provides the in-memory directory tree with a current-directory cursor.
//!
//! ### Key Features:
//! - **Arena storage**: directories live in a `SlotMap`; parents are referenced by key,
//!   so parent/child links never form an ownership cycle.
//! - **Single-name operations**: every operation resolves one bare name among the
//!   children of the cursor; there is no multi-segment path resolution.
//! - **Insertion order**: child directories and files are kept in creation order,
//!   lookups are linear and case-sensitive, first exact match wins.

use slotmap::SlotMap;
use tracing::debug;

use crate::config::Config;
use crate::core::{FsError, Result, utils};
use crate::vfs::node::{DirId, Directory, Entry, EntryType, File};

/// An in-memory hierarchical namespace of directories and files.
///
/// ### Invariants
///
/// 1. **Root existence**: `root` is always present in `arena`, has no parent and is
///    never removed.
/// 2. **Valid cursor**: `cwd` always names a live directory reachable from `root`.
///    Removal only ever targets a child of `cwd`, so the cursor cannot be detached.
/// 3. **Uniqueness**: within a directory, child directory names are pairwise distinct
///    and file names are pairwise distinct. A file and a directory may share a name.
/// 4. **Atomicity**: an operation that returns an error leaves the tree unchanged.
///
/// ### Example
///
/// ```
/// use memshell::DirTree;
///
/// let mut tree = DirTree::new();
/// tree.mkdir("docs").unwrap();
/// tree.cd("docs").unwrap();
/// tree.mkfile("note.txt").unwrap();
/// assert_eq!(tree.pwd(), "/docs");
/// ```
pub struct DirTree {
    arena: SlotMap<DirId, Directory>,
    root: DirId,
    cwd: DirId,
    config: Config,
}

impl Default for DirTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirTree {
    /// Creates a tree holding only the root, with the cursor on it.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Directory::new(config.root_label(), None));
        Self {
            arena,
            root,
            cwd: root,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> DirId {
        self.root
    }

    /// Returns the cursor.
    pub fn cwd(&self) -> DirId {
        self.cwd
    }

    /// Returns the directory under the cursor.
    pub fn current(&self) -> &Directory {
        &self.arena[self.cwd] // cursor is always live
    }

    fn current_mut(&mut self) -> &mut Directory {
        &mut self.arena[self.cwd]
    }

    /// Number of directories in the tree, root included.
    pub fn dir_count(&self) -> usize {
        self.arena.len()
    }

    fn validate(&self, name: &str) -> Result<()> {
        utils::validate_name(name, self.config.separator(), &[self.config.parent_token()])
    }

    fn find_child(&self, name: &str) -> Option<(usize, DirId)> {
        self.current()
            .children()
            .iter()
            .enumerate()
            .find(|&(_, id)| self.arena[*id].name() == name)
            .map(|(pos, id)| (pos, *id))
    }

    /// Creates an empty directory `name` under the cursor.
    /// An error is returned if a child directory with that name already exists.
    pub fn mkdir(&mut self, name: &str) -> Result<()> {
        self.validate(name)?;
        if self.find_child(name).is_some() {
            debug!(name, "mkdir rejected: directory exists");
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        let cwd = self.cwd;
        let id = self.arena.insert(Directory::new(name, Some(cwd)));
        self.current_mut().children_mut().push(id);
        debug!(name, "directory created");
        Ok(())
    }

    /// Creates a file `name` with no content under the cursor.
    /// An error is returned if a file with that name already exists.
    pub fn mkfile(&mut self, name: &str) -> Result<()> {
        self.validate(name)?;
        if self.current().file_position(name).is_some() {
            debug!(name, "mkfile rejected: file exists");
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        self.current_mut().files_mut().push(File::new(name));
        debug!(name, "file created");
        Ok(())
    }

    /// Moves the cursor.
    /// * `name` - a child directory name, or the parent token.
    ///
    /// Moving to the parent of the root is a no-op. An error is returned, and the cursor
    /// is left in place, if no child directory matches.
    pub fn cd(&mut self, name: &str) -> Result<()> {
        if name == self.config.parent_token() {
            if let Some(parent) = self.current().parent() {
                self.cwd = parent;
            }
            return Ok(());
        }
        match self.find_child(name) {
            Some((_, id)) => {
                self.cwd = id;
                Ok(())
            }
            None => Err(FsError::NotFound(name.to_string())),
        }
    }

    /// Detaches the file `name` from the cursor and hands it back to the caller.
    pub fn rm(&mut self, name: &str) -> Result<File> {
        let pos = self
            .current()
            .file_position(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        let file = self.current_mut().files_mut().remove(pos);
        debug!(name, "file removed");
        Ok(file)
    }

    /// Removes the child directory `name` of the cursor.
    ///
    /// # Returns
    /// * `Ok(())` - the directory was empty and is gone.
    /// * `Err(FsError::NotFound)` - there is no such child directory.
    /// * `Err(FsError::NotEmpty)` - the directory still owns a directory or a file;
    ///   it stays attached.
    pub fn rmdir(&mut self, name: &str) -> Result<()> {
        let (pos, id) = self
            .find_child(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        if !self.arena[id].is_empty() {
            debug!(name, "rmdir rejected: directory not empty");
            return Err(FsError::NotEmpty(name.to_string()));
        }
        self.current_mut().children_mut().remove(pos);
        self.arena.remove(id);
        debug!(name, "directory removed");
        Ok(())
    }

    /// Returns an iterator over the cursor's child directories, then its files,
    /// each group in creation order.
    ///
    /// The iterator borrows the tree, so every call reflects the live state.
    pub fn ls(&self) -> impl Iterator<Item = Entry<'_>> {
        let current = self.current();
        let dirs = current
            .children()
            .iter()
            .map(|id| Entry::new(EntryType::Directory, self.arena[*id].name()));
        let files = current
            .files()
            .iter()
            .map(|f| Entry::new(EntryType::File, f.name()));
        dirs.chain(files)
    }

    /// Renders the absolute path of the cursor.
    /// The root alone renders as the configured root label.
    pub fn pwd(&self) -> String {
        let mut names = Vec::new();
        let mut id = self.cwd;
        while let Some(parent) = self.arena[id].parent() {
            names.push(self.arena[id].name());
            id = parent;
        }
        utils::render_path(
            self.config.root_label(),
            self.config.separator(),
            names.into_iter().rev(),
        )
    }

    /// Looks up the file `name` under the cursor.
    pub fn find_file(&self, name: &str) -> Option<&File> {
        self.current().files().iter().find(|f| f.name() == name)
    }

    pub(crate) fn find_file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.current_mut()
            .files_mut()
            .iter_mut()
            .find(|f| f.name() == name)
    }
}
