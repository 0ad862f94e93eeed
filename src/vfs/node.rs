use std::fmt;

use slotmap::new_key_type;

new_key_type! { pub struct DirId; }

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A file: a name and an optional content buffer (`None` until first written).
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
    content: Option<Vec<u8>>,
}

impl File {
    pub fn new(name: impl Into<String>) -> File {
        File {
            name: name.into(),
            content: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: &[u8]) {
        self.content = Some(content.to_vec());
    }

    pub fn len(&self) -> usize {
        self.content.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A directory node stored in the tree arena.
///
/// `parent` is a plain arena key, so it never keeps its target alive;
/// ownership only flows from a directory to its `children` and `files`.
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    parent: Option<DirId>,
    children: Vec<DirId>,
    files: Vec<File>,
}

impl Directory {
    pub(crate) fn new(name: impl Into<String>, parent: Option<DirId>) -> Directory {
        Directory {
            name: name.into(),
            parent,
            children: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.files.is_empty()
    }

    pub(crate) fn children(&self) -> &[DirId] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<DirId> {
        &mut self.children
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub(crate) fn files_mut(&mut self) -> &mut Vec<File> {
        &mut self.files
    }

    /// Position of the first file named exactly `name`.
    pub(crate) fn file_position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name == name)
    }
}

/// One row of a directory listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    entry_type: EntryType,
    name: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(entry_type: EntryType, name: &'a str) -> Entry<'a> {
        Entry { entry_type, name }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry_type {
            EntryType::Directory => write!(f, "[D] {}", self.name),
            EntryType::File => write!(f, "[F] {}", self.name),
        }
    }
}
