mod editor;
mod node;
mod tree;

pub use editor::EMPTY_CONTENT;
pub use node::{DirId, Directory, Entry, EntryType, File};
pub use tree::DirTree;
