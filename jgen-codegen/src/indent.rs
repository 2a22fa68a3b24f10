//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the usual Java style.
    pub const JAVA: Self = Self::Spaces(4);

    /// 2-space indentation (Google Java style).
    pub const COMPACT: Self = Self::Spaces(2);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// The string for `level` indent levels.
    pub fn repeat(&self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
