use thiserror::Error;

/// Errors reported by namespace operations and the command dispatcher.
///
/// Every variant is recoverable: the shell reports it and keeps going.
/// No operation that returns an error leaves the namespace modified.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("directory {0} is not empty")]
    NotEmpty(String),
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("content of {name} is too large: {len} bytes (limit {limit})")]
    ContentTooLarge {
        name: String,
        len: usize,
        limit: usize,
    },
    #[error("i/o error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
    /// Unknown verb and wrong argument count are deliberately reported
    /// the same way.
    #[error("invalid command or missing argument: {0:?}")]
    InvalidCommand(String),
}

impl FsError {
    pub(crate) fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        FsError::Io {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

/// External store used by import and export.
///
/// Keys are plain file names on export and caller-supplied paths on
/// import; how they map onto storage is up to the implementation.
pub trait Store {
    /// Reads the whole resource at `key`.
    fn read(&self, key: &str) -> Result<Vec<u8>>;

    /// Creates or replaces the resource at `key` with `content`.
    fn write(&mut self, key: &str, content: &[u8]) -> Result<()>;

    /// Returns true if a resource exists at `key`.
    fn exists(&self, key: &str) -> bool;
}

pub mod utils {
    use super::{FsError, Result};

    /// Checks that `name` can be used as a single entry name.
    /// `reserved` holds tokens (like the parent token) that must not name an entry.
    pub fn validate_name(name: &str, separator: &str, reserved: &[&str]) -> Result<()> {
        if name.is_empty()
            || name.chars().any(char::is_whitespace)
            || (!separator.is_empty() && name.contains(separator))
            || name == "."
            || reserved.contains(&name)
        {
            return Err(FsError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Joins `components` (outermost first) under `root_label`.
    /// A separator is only inserted when the text so far does not already end with one.
    pub fn render_path<'a, I>(root_label: &str, separator: &str, components: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut path = root_label.to_string();
        for component in components {
            if !path.ends_with(separator) {
                path.push_str(separator);
            }
            path.push_str(component);
        }
        path
    }

    /// Returns the last `separator`-delimited segment of `path`, ignoring trailing separators.
    pub fn last_component<'a>(path: &'a str, separator: &str) -> Option<&'a str> {
        if separator.is_empty() {
            return (!path.is_empty()).then_some(path);
        }
        let trimmed = path.trim_end_matches(separator);
        let name = match trimmed.rfind(separator) {
            Some(pos) => &trimmed[pos + separator.len()..],
            None => trimmed,
        };
        if name.is_empty() { None } else { Some(name) }
    }

}
