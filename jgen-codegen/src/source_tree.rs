//! Batch registration and writing of generated source files.
//!
//! # Example
//!
//! ```ignore
//! let mut tree = SourceTree::new();
//! tree.register_generated(&JavaFile::new(&widget));
//! tree.register_generated(&JavaFile::new(&gadget));
//!
//! let stats = tree.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use jgencode_core::{File, FileRules, GeneratedFile, Overwrite, WriteResult};

/// A file waiting to be written, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path relative to the output root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
    /// Write rules.
    pub rules: FileRules,
}

impl SourceEntry {
    /// Create an entry that always overwrites.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Snapshot a [`GeneratedFile`], keeping its relative path and rules.
    pub fn from_generated<F: GeneratedFile + ?Sized>(file: &F) -> Self {
        Self {
            path: file.path(Path::new("")),
            content: file.render(),
            rules: file.rules(),
        }
    }

    /// Override the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }

    /// Write this entry below `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(base.join(&self.path), self.content.clone())
            .with_rules(self.rules.clone())
            .write()
    }
}

/// Collects generated files and writes them in one pass.
///
/// Entries are written in path order so that runs are reproducible.
#[derive(Debug, Default)]
pub struct SourceTree {
    entries: Vec<SourceEntry>,
}

impl SourceTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry. A later entry for the same path replaces the earlier one.
    pub fn register(&mut self, entry: SourceEntry) {
        self.entries.retain(|e| e.path != entry.path);
        self.entries.push(entry);
    }

    /// Register a [`GeneratedFile`].
    pub fn register_generated<F: GeneratedFile + ?Sized>(&mut self, file: &F) {
        self.register(SourceEntry::from_generated(file));
    }

    /// All entries in path order.
    pub fn entries(&self) -> impl Iterator<Item = &SourceEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));
        sorted.into_iter()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write all entries below `base`, stopping at the first failure.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        tracing::debug!(
            written = stats.written,
            skipped = stats.skipped,
            "source tree written"
        );
        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    /// Paths of written files.
    pub written_paths: Vec<PathBuf>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}
