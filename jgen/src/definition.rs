//! Rendered units.

use std::path::{Path, PathBuf};

use jgencode_core::join_lines;

use crate::{modifier::ModifierSet, unit::DeclarationKind};

/// The result of building a unit: its source lines plus what a file writer
/// needs to place them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub(crate) class_name: String,
    pub(crate) package_name: String,
    pub(crate) package_path: PathBuf,
    pub(crate) modifiers: ModifierSet,
    pub(crate) kind: DeclarationKind,
    pub(crate) lines: Vec<String>,
}

impl Definition {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Package as a relative directory, `com/acme/model` for `com.acme.model`.
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Source lines without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// File content: every line followed by the platform line terminator.
    pub fn content(&self) -> String {
        join_lines(&self.lines)
    }

    /// `Widget.java` for extension `java`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.class_name, extension)
    }

    /// Location relative to an output root.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        self.package_path.join(self.file_name(extension))
    }
}

#[cfg(test)]
mod tests {
    use jgencode_core::LINE_ENDING;

    use crate::unit::new_class_builder;

    #[test]
    fn test_content_terminates_every_line() {
        let definition = new_class_builder("com.acme", "Widget").build().unwrap();

        let content = definition.content();
        assert!(content.ends_with(&format!("}}{LINE_ENDING}")));
        assert_eq!(content.matches(LINE_ENDING).count(), definition.lines().len());
    }

    #[test]
    fn test_relative_path() {
        let definition = new_class_builder("com.acme.model", "Widget").build().unwrap();
        assert_eq!(
            definition.relative_path("java"),
            std::path::Path::new("com/acme/model/Widget.java")
        );

        let default_package = new_class_builder("", "Main").build().unwrap();
        assert_eq!(
            default_package.relative_path("java"),
            std::path::Path::new("Main.java")
        );
    }
}
