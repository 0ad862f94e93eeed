//! Content operations on single files of a `DirTree`: replace, read, interactive
//! line-by-line editing, and transfer to or from an external `Store`.

use std::borrow::Cow;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::core::{FsError, Result, Store, utils};
use crate::vfs::tree::DirTree;

/// Shown by `view` for a file that has no content.
pub const EMPTY_CONTENT: &str = "(empty)";

impl DirTree {
    fn check_len(&self, name: &str, content: &[u8]) -> Result<()> {
        match self.config().max_content_len() {
            Some(limit) if content.len() > limit => Err(FsError::ContentTooLarge {
                name: name.to_string(),
                len: content.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Replaces the entire content of the file `name` under the cursor.
    ///
    /// Content longer than the configured limit is rejected with
    /// `FsError::ContentTooLarge`; it is never truncated.
    pub fn write(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.check_len(name, content)?;
        let file = self
            .find_file_mut(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        file.set_content(content);
        debug!(name, len = file.len(), "content replaced");
        Ok(())
    }

    /// Returns the content of the file `name`, empty if it was never written.
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        let file = self
            .find_file(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        Ok(file.content().map(<[u8]>::to_vec).unwrap_or_default())
    }

    /// Returns printable content of the file `name`.
    /// A file without content (unset or zero-length) renders as `EMPTY_CONTENT`;
    /// bytes that are not valid UTF-8 are shown as U+FFFD.
    pub fn view(&self, name: &str) -> Result<Cow<'_, str>> {
        let file = self
            .find_file(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        if file.is_empty() {
            return Ok(Cow::Borrowed(EMPTY_CONTENT));
        }
        Ok(String::from_utf8_lossy(file.content().unwrap_or_default()))
    }

    /// Replaces the content of the file `name` with lines read from `input`.
    ///
    /// Reading stops at a line equal to the configured terminator or at end of input.
    /// Lines are taken as raw bytes, so any content is accepted and the input is always
    /// consumed through the terminator. Each accepted line is stored followed by `\n`.
    /// The file is checked before and replaced only after all input has been read.
    pub fn edit<R: BufRead>(&mut self, name: &str, input: &mut R) -> Result<()> {
        if self.find_file(name).is_none() {
            return Err(FsError::NotFound(name.to_string()));
        }
        let content = read_until_terminator(input, self.config().edit_terminator())
            .map_err(|e| FsError::io("input", e))?;
        self.write(name, &content)
    }

    /// Writes the content of the file `name` to `store` under the same name.
    pub fn export<S: Store + ?Sized>(&self, name: &str, store: &mut S) -> Result<()> {
        let content = self.read(name)?;
        let replaced = store.exists(name);
        store.write(name, &content).inspect_err(|e| {
            warn!(name, error = %e, "export failed");
        })?;
        debug!(name, len = content.len(), replaced, "file exported");
        Ok(())
    }

    /// Reads `path` from `store` into a file of the cursor named after the last
    /// component of `path`.
    ///
    /// An existing file with that name is overwritten; otherwise it is created.
    /// The namespace is only touched once the whole resource has been read.
    pub fn import<S: Store + ?Sized>(&mut self, path: &str, store: &S) -> Result<()> {
        let name = utils::last_component(path, self.config().separator())
            .ok_or_else(|| FsError::InvalidName(path.to_string()))?
            .to_string();
        let content = store.read(path).inspect_err(|e| {
            warn!(path, error = %e, "import failed");
        })?;
        self.check_len(&name, &content)?;
        if self.find_file(&name).is_none() {
            self.mkfile(&name)?;
        }
        self.write(&name, &content)?;
        debug!(path, name = %name, len = content.len(), "file imported");
        Ok(())
    }
}

fn read_until_terminator<R: BufRead>(input: &mut R, terminator: &str) -> std::io::Result<Vec<u8>> {
    let mut content = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = trim_line_end(&line);
        if text == terminator.as_bytes() {
            break;
        }
        content.extend_from_slice(text);
        content.push(b'\n');
    }
    Ok(content)
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;
    use crate::config::Config;
    use crate::store::MapStore;

    fn setup_test_tree() -> DirTree {
        let mut tree = DirTree::new();
        tree.mkfile("a.txt").unwrap();
        tree
    }

    mod write_read {
        use super::*;

        #[test]
        fn test_write_replaces_wholesale() -> Result<()> {
            let mut tree = setup_test_tree();
            tree.write("a.txt", b"first version")?;
            tree.write("a.txt", b"v2")?;
            assert_eq!(tree.read("a.txt")?, b"v2");
            Ok(())
        }

        #[test]
        fn test_write_missing_file() {
            let mut tree = setup_test_tree();
            assert!(matches!(tree.write("nope", b"x"), Err(FsError::NotFound(_))));
        }

        #[test]
        fn test_read_unset_is_empty() -> Result<()> {
            let tree = setup_test_tree();
            assert!(tree.read("a.txt")?.is_empty());
            Ok(())
        }

        #[test]
        fn test_view() -> Result<()> {
            let mut tree = setup_test_tree();
            assert_eq!(tree.view("a.txt")?, EMPTY_CONTENT);
            tree.write("a.txt", b"hello")?;
            assert_eq!(tree.view("a.txt")?, "hello");
            tree.write("a.txt", b"bad \xff byte")?;
            assert_eq!(tree.view("a.txt")?, "bad \u{FFFD} byte");
            assert!(matches!(tree.view("b.txt"), Err(FsError::NotFound(_))));
            Ok(())
        }

        #[test]
        fn test_content_limit_rejects() -> Result<()> {
            let mut tree = DirTree::with_config(Config::default().with_max_content_len(Some(4)));
            tree.mkfile("a.txt")?;
            tree.write("a.txt", b"1234")?;

            let result = tree.write("a.txt", b"12345");
            assert!(matches!(
                result,
                Err(FsError::ContentTooLarge { len: 5, limit: 4, .. })
            ));
            // previous content is kept, nothing is truncated
            assert_eq!(tree.read("a.txt")?, b"1234");
            Ok(())
        }
    }

    mod edit {
        use super::*;

        #[test]
        fn test_edit_until_terminator() -> Result<()> {
            let mut tree = setup_test_tree();
            let mut input = Cursor::new("line one\nline two\n:wq\nnot read\n");
            tree.edit("a.txt", &mut input)?;
            assert_eq!(tree.read("a.txt")?, b"line one\nline two\n");
            Ok(())
        }

        #[test]
        fn test_edit_until_eof() -> Result<()> {
            let mut tree = setup_test_tree();
            let mut input = Cursor::new("only\r\nlines");
            tree.edit("a.txt", &mut input)?;
            assert_eq!(tree.read("a.txt")?, b"only\nlines\n");
            Ok(())
        }

        #[test]
        fn test_edit_empty_input() -> Result<()> {
            let mut tree = setup_test_tree();
            tree.write("a.txt", b"old")?;
            tree.edit("a.txt", &mut Cursor::new(":wq\n"))?;
            assert_eq!(tree.view("a.txt")?, EMPTY_CONTENT);
            Ok(())
        }

        #[test]
        fn test_edit_non_utf8_line() -> Result<()> {
            let mut tree = setup_test_tree();
            tree.mkfile("keep")?;
            let mut input = Cursor::new(&b"line \xff\nrm keep\n:wq\nls\n"[..]);

            tree.edit("a.txt", &mut input)?;
            assert_eq!(tree.read("a.txt")?, b"line \xff\nrm keep\n");
            assert!(tree.find_file("keep").is_some());

            // only the line after the terminator is left for the caller
            let mut rest = String::new();
            input.read_to_string(&mut rest).unwrap();
            assert_eq!(rest, "ls\n");
            Ok(())
        }

        #[test]
        fn test_edit_missing_file_consumes_nothing() {
            let mut tree = setup_test_tree();
            let mut input = Cursor::new("keep me\n");
            assert!(matches!(tree.edit("nope", &mut input), Err(FsError::NotFound(_))));
            assert_eq!(input.position(), 0);
        }

        #[test]
        fn test_edit_custom_terminator() -> Result<()> {
            let mut tree = DirTree::with_config(Config::default().with_edit_terminator("EOF"));
            tree.mkfile("a.txt")?;
            tree.edit("a.txt", &mut Cursor::new(":wq\nEOF\n"))?;
            assert_eq!(tree.read("a.txt")?, b":wq\n");
            Ok(())
        }
    }

    mod transfer {
        use super::*;

        #[test]
        fn test_export_then_import_round_trip() -> Result<()> {
            let mut store = MapStore::new();
            let mut tree = setup_test_tree();
            tree.write("a.txt", b"hello\nworld\n")?;

            tree.export("a.txt", &mut store)?;
            tree.write("a.txt", b"changed")?;
            tree.import("a.txt", &store)?;
            assert_eq!(tree.read("a.txt")?, b"hello\nworld\n");

            // repeating without edits changes nothing
            tree.export("a.txt", &mut store)?;
            tree.import("a.txt", &store)?;
            assert_eq!(tree.read("a.txt")?, b"hello\nworld\n");
            assert_eq!(tree.current().files().len(), 1);
            Ok(())
        }

        #[test]
        fn test_export_missing_file() {
            let mut store = MapStore::new();
            let tree = setup_test_tree();
            assert!(matches!(tree.export("nope", &mut store), Err(FsError::NotFound(_))));
            assert!(!store.exists("nope"));
        }

        #[test]
        fn test_import_creates_file() -> Result<()> {
            let mut store = MapStore::new();
            store.write("notes/todo.txt", b"buy milk")?;

            let mut tree = DirTree::new();
            tree.import("notes/todo.txt", &store)?;
            assert_eq!(tree.read("todo.txt")?, b"buy milk");
            Ok(())
        }

        #[test]
        fn test_import_unreadable() {
            let store = MapStore::new();
            let mut tree = DirTree::new();
            assert!(matches!(tree.import("ghost", &store), Err(FsError::Io { .. })));
            assert_eq!(tree.ls().count(), 0);
        }

        #[test]
        fn test_import_too_large_leaves_tree_unchanged() -> Result<()> {
            let mut store = MapStore::new();
            store.write("big", b"0123456789")?;
            let mut tree = DirTree::with_config(Config::default().with_max_content_len(Some(3)));
            assert!(matches!(
                tree.import("big", &store),
                Err(FsError::ContentTooLarge { .. })
            ));
            assert!(tree.find_file("big").is_none());
            Ok(())
        }

        #[test]
        fn test_import_path_without_name() {
            let store = MapStore::new();
            let mut tree = DirTree::new();
            assert!(matches!(tree.import("/", &store), Err(FsError::InvalidName(_))));
        }
    }
}
