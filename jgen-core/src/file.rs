use std::path::{Path, PathBuf};

use eyre::Result;

/// Line terminator used when generated lines are joined into file content.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator used when generated lines are joined into file content.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Join lines with [`LINE_ENDING`], terminating the last line as well.
///
/// An empty slice produces an empty string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push_str(LINE_ENDING);
    }
    content
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk.
    ///
    /// Missing parent directories are created. I/O failures are returned
    /// with the original [`std::io::Error`] as the report's root cause.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.rules(), || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    rules: &FileRules,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        tracing::debug!(path = %path.display(), "keeping existing file");
        return Ok(WriteResult::Skipped);
    }
    let content = match &rules.header {
        Some(header) => format!("{header}{LINE_ENDING}{}", content()),
        None => content(),
    };
    write_file(path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file with precomputed content and a fixed location.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.rules, || self.content.clone())
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Optional first line, e.g. a license or "generated" banner.
    pub header: Option<String>,
}

impl FileRules {
    /// Rules for files the user is expected to edit afterwards.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Banner;

    impl GeneratedFile for Banner {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("com").join("acme").join("Banner.java")
        }

        fn rules(&self) -> FileRules {
            FileRules {
                overwrite: Overwrite::Always,
                header: Some("// generated".to_string()),
            }
        }

        fn render(&self) -> String {
            join_lines(&["class Banner{", "}"])
        }
    }

    #[test]
    fn test_join_lines_terminates_every_line() {
        assert_eq!(
            join_lines(&["a", "", "b"]),
            format!("a{LINE_ENDING}{LINE_ENDING}b{LINE_ENDING}")
        );
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("Test.java");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_write_prepends_header() {
        let temp = TempDir::new().unwrap();

        let result = Banner.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("com/acme/Banner.java")).unwrap();
        assert_eq!(
            written,
            format!("// generated{LINE_ENDING}class Banner{{{LINE_ENDING}}}{LINE_ENDING}")
        );
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.java");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Existing.java");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write").with_rules(FileRules::if_missing());
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_failure_keeps_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let file = File::new(blocker.join("Nested.java"), "content");
        let err = file.write().unwrap_err();

        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
