use crate::core::{FsError, Result};

/// A parsed shell command: a verb and its single argument, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mkdir(String),
    Touch(String),
    Cd(String),
    Ls,
    Pwd,
    Rm(String),
    Rmdir(String),
    Edit(String),
    View(String),
    Export(String),
    Import(String),
    Help,
    Exit,
}

/// Verbs and their usage, as printed by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("mkdir <name>", "create a directory"),
    ("touch <name>", "create an empty file"),
    ("cd <name|..>", "change directory"),
    ("ls", "list directories, then files"),
    ("pwd", "print the current path"),
    ("rm <name>", "remove a file"),
    ("rmdir <name>", "remove an empty directory"),
    ("edit <name>", "replace file content line by line"),
    ("cat <name>", "print file content (alias: view)"),
    ("export <name>", "write a file to the host store"),
    ("import <path>", "read a host file into the current directory"),
    ("help", "show this help"),
    ("exit", "quit (alias: quit)"),
];

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Unknown verbs, a missing argument, an
    /// argument given to a verb that takes none, and extra tokens all produce the
    /// same `FsError::InvalidCommand`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let arg = tokens.next();
        if tokens.next().is_some() {
            return Err(FsError::InvalidCommand(line.trim().to_string()));
        }
        Self::from_parts(verb, arg)
            .map(Some)
            .ok_or_else(|| FsError::InvalidCommand(line.trim().to_string()))
    }

    /// Maps an already tokenized verb and optional argument to a command.
    /// Returns `None` when the verb is unknown or the arity is wrong.
    pub fn from_parts(verb: &str, arg: Option<&str>) -> Option<Command> {
        let command = match (verb, arg) {
            ("mkdir", Some(a)) => Command::Mkdir(a.to_string()),
            ("touch", Some(a)) => Command::Touch(a.to_string()),
            ("cd", Some(a)) => Command::Cd(a.to_string()),
            ("rm", Some(a)) => Command::Rm(a.to_string()),
            ("rmdir", Some(a)) => Command::Rmdir(a.to_string()),
            ("edit", Some(a)) => Command::Edit(a.to_string()),
            ("cat" | "view", Some(a)) => Command::View(a.to_string()),
            ("export", Some(a)) => Command::Export(a.to_string()),
            ("import", Some(a)) => Command::Import(a.to_string()),
            ("ls", None) => Command::Ls,
            ("pwd", None) => Command::Pwd,
            ("help", None) => Command::Help,
            ("exit" | "quit", None) => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}
