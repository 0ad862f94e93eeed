use std::path::{Path, PathBuf};

/// Runtime settings shared by the namespace, the editor and the shell.
///
/// Built with `Config::default()` and adjusted through the `with_*` setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root_label: String,
    separator: String,
    parent_token: String,
    edit_terminator: String,
    max_content_len: Option<usize>,
    store_root: PathBuf,
    prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_label: "/".to_string(),
            separator: "/".to_string(),
            parent_token: "..".to_string(),
            edit_terminator: ":wq".to_string(),
            max_content_len: None,
            store_root: PathBuf::from("."),
            prompt: ">> ".to_string(),
        }
    }
}

impl Config {
    /// How the root directory is rendered by `pwd`.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Argument of `cd` that moves the cursor to the parent directory.
    pub fn parent_token(&self) -> &str {
        &self.parent_token
    }

    /// Line that ends `edit` input.
    pub fn edit_terminator(&self) -> &str {
        &self.edit_terminator
    }

    /// Upper bound on file content in bytes; `None` means unbounded.
    pub fn max_content_len(&self) -> Option<usize> {
        self.max_content_len
    }

    /// Host directory used by `DirStore`.
    pub fn store_root(&self) -> &Path {
        &self.store_root
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_parent_token(mut self, token: impl Into<String>) -> Self {
        self.parent_token = token.into();
        self
    }

    pub fn with_edit_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.edit_terminator = terminator.into();
        self
    }

    pub fn with_max_content_len(mut self, limit: Option<usize>) -> Self {
        self.max_content_len = limit;
        self
    }

    pub fn with_store_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.store_root = root.as_ref().to_path_buf();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
