//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Descriptors render themselves to fragments once, when they are frozen.
//! Fragments carry nesting but no concrete indentation, so the same
//! fragments can later be laid out with whatever [`Indent`](crate::Indent)
//! the caller configured.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeFragment {
    /// A single line of code.
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Return a copy with every occurrence of `from` replaced by `to`
    /// in all nested text.
    pub fn replace(&self, from: &str, to: &str) -> Self {
        match self {
            Self::Line(s) => Self::Line(s.replace(from, to)),
            Self::Blank => Self::Blank,
            Self::Block {
                header,
                body,
                close,
            } => Self::Block {
                header: header.replace(from, to),
                body: body.iter().map(|f| f.replace(from, to)).collect(),
                close: close.as_ref().map(|c| c.replace(from, to)),
            },
            Self::Indent(fragments) => {
                Self::Indent(fragments.iter().map(|f| f.replace(from, to)).collect())
            }
        }
    }
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for descriptors to enable them to be rendered
/// through CodeBuilder without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
    }

    #[test]
    fn test_replace_reaches_nested_text() {
        let block = CodeFragment::block(
            "public {_X_}(){",
            vec![CodeFragment::indent(vec![CodeFragment::line("new {_X_}();")])],
            Some("} // {_X_}".to_string()),
        );

        let replaced = block.replace("{_X_}", "Widget");

        assert_eq!(
            replaced,
            CodeFragment::block(
                "public Widget(){",
                vec![CodeFragment::indent(vec![CodeFragment::line("new Widget();")])],
                Some("} // Widget".to_string()),
            )
        );
    }
}
