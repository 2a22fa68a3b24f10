//! Writing definitions to disk.

use std::path::{Path, PathBuf};

use jgencode_core::{FileRules, GeneratedFile, Overwrite};

use crate::{config::RenderConfig, definition::Definition};

/// A [`Definition`] placed at `<root>/<package path>/<ClassName>.<ext>`.
///
/// ```no_run
/// use std::path::Path;
///
/// use jgencode::{JavaFile, new_class_builder};
/// use jgencode_core::GeneratedFile;
///
/// let definition = new_class_builder("com.acme", "Widget").build()?;
/// JavaFile::new(&definition).write(Path::new("src/main/java"))?;
/// # Ok::<(), eyre::Report>(())
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile<'a> {
    definition: &'a Definition,
    extension: String,
    rules: FileRules,
}

impl<'a> JavaFile<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self {
            definition,
            extension: "java".to_string(),
            rules: FileRules::default(),
        }
    }

    /// Take the extension from a render configuration.
    pub fn with_config(mut self, config: &RenderConfig) -> Self {
        self.extension = config.extension.clone();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }

    /// First line written above the source, e.g. a "generated" banner.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.rules.header = Some(header.into());
        self
    }

    pub fn definition(&self) -> &Definition {
        self.definition
    }
}

impl GeneratedFile for JavaFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.definition.relative_path(&self.extension))
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        self.definition.content()
    }
}
