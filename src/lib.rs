//! An interactive, in-memory filesystem driven by a small command language.
//!
//! ### Overview
//!
//! `memshell` keeps a hierarchical namespace of directories and files entirely in memory
//! and lets a single user manipulate it one command at a time: create and remove
//! directories and files, move a current-directory cursor, list children, edit and view
//! file content, and move single files to and from the host via `import`/`export`.
//!
//! **Key ideas**:
//! - **Explicit context**: there is no global state; each `Shell` (or bare `DirTree`)
//!   is an independent namespace.
//! - **Safe tree**: directories live in an arena, parents are non-owning keys, and the
//!   cursor can never point at a removed directory.
//! - **Atomic commands**: a failing command leaves the namespace untouched.
//! - **Pluggable store**: import/export go through the `Store` trait, with a host
//!   directory (`DirStore`) and an in-memory (`MapStore`) implementation.
//!
//! ### Example
//!
//! ```
//! use memshell::{Config, MapStore, Outcome, Shell};
//!
//! let mut shell = Shell::new(Config::default(), MapStore::new());
//! let mut no_input = std::io::empty();
//! shell.run_line("mkdir docs", &mut no_input).unwrap();
//! shell.run_line("touch a.txt", &mut no_input).unwrap();
//! let listing = shell.run_line("ls", &mut no_input).unwrap();
//! assert_eq!(listing, Outcome::Print("[D] docs\n[F] a.txt".to_string()));
//! ```

mod config;
mod core;
mod shell;
mod store;
mod vfs;

pub use config::Config;
pub use crate::core::{FsError, Result, Store};
pub use shell::{Command, Outcome, Shell, USAGE};
pub use store::{DirStore, MapStore};
pub use vfs::{DirId, DirTree, Directory, EMPTY_CONTENT, Entry, EntryType, File};
