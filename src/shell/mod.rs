//! The command dispatcher: one `Shell` owns a namespace and an external store,
//! and runs parsed commands against them.

mod command;

use std::io::BufRead;

use tracing::debug;

pub use command::{Command, USAGE};

use crate::config::Config;
use crate::core::{Result, Store};
use crate::vfs::DirTree;

/// What the caller should do after a command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to display.
    Silent,
    /// Text to display, without a trailing newline.
    Print(String),
    /// Leave the session.
    Exit,
}

/// A namespace session: the directory tree, its cursor and the store used for
/// import and export. Several shells can coexist; they share nothing.
pub struct Shell<S: Store> {
    tree: DirTree,
    store: S,
}

impl<S: Store> Shell<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            tree: DirTree::with_config(config),
            store,
        }
    }

    pub fn tree(&self) -> &DirTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DirTree {
        &mut self.tree
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        self.tree.config()
    }

    /// Parses and runs one input line. A blank line is `Outcome::Silent`.
    /// `input` supplies the content lines for `edit`.
    pub fn run_line<R: BufRead>(&mut self, line: &str, input: &mut R) -> Result<Outcome> {
        match Command::parse(line)? {
            Some(command) => self.execute(command, input),
            None => Ok(Outcome::Silent),
        }
    }

    /// Runs `command` against the tree.
    /// On error the namespace is left exactly as it was.
    pub fn execute<R: BufRead>(&mut self, command: Command, input: &mut R) -> Result<Outcome> {
        debug!(?command, "execute");
        let outcome = match command {
            Command::Mkdir(name) => {
                self.tree.mkdir(&name)?;
                Outcome::Silent
            }
            Command::Touch(name) => {
                self.tree.mkfile(&name)?;
                Outcome::Silent
            }
            Command::Cd(name) => {
                self.tree.cd(&name)?;
                Outcome::Silent
            }
            Command::Ls => {
                let listing = self
                    .tree
                    .ls()
                    .map(|entry| entry.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                if listing.is_empty() {
                    Outcome::Silent
                } else {
                    Outcome::Print(listing)
                }
            }
            Command::Pwd => Outcome::Print(self.tree.pwd()),
            Command::Rm(name) => {
                self.tree.rm(&name)?;
                Outcome::Print("File deleted successfully.".to_string())
            }
            Command::Rmdir(name) => {
                self.tree.rmdir(&name)?;
                Outcome::Print("Directory deleted successfully.".to_string())
            }
            Command::Edit(name) => {
                self.tree.edit(&name, input)?;
                Outcome::Silent
            }
            Command::View(name) => {
                let content = self.tree.view(&name)?;
                Outcome::Print(content.trim_end_matches('\n').to_string())
            }
            Command::Export(name) => {
                self.tree.export(&name, &mut self.store)?;
                Outcome::Print(format!("Exported {name}."))
            }
            Command::Import(path) => {
                self.tree.import(&path, &self.store)?;
                Outcome::Print(format!("Imported {path}."))
            }
            Command::Help => Outcome::Print(help_text()),
            Command::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }
}

fn help_text() -> String {
    let width = USAGE.iter().map(|(u, _)| u.len()).max().unwrap_or(0);
    USAGE
        .iter()
        .map(|(usage, about)| format!("  {usage:<width$}  {about}"))
        .collect::<Vec<_>>()
        .join("\n")
}
