//! Code builder utility for generating properly indented source lines.

use crate::{CodeFragment, Indent, Renderable};

/// Fluent API for building source code line by line with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for loops.
///
/// The output is a list of lines without terminators; blank lines are empty
/// strings and never carry indentation.
///
/// # Example (Consuming API)
///
/// ```
/// use jgencode_codegen::CodeBuilder;
///
/// let lines = CodeBuilder::java()
///     .line("class Foo{")
///     .indent()
///     .line("int x;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(lines, vec!["class Foo{", "    int x;", "}"]);
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use jgencode_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("class Foo{")
///     .push_indent()
///     .push_line("int x;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = self.indent.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    /// Emit pre-rendered fragments (mutable).
    pub fn emit_fragments(&mut self, fragments: &[CodeFragment]) -> &mut Self {
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the lines produced so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the builder and return the generated lines.
    pub fn build(self) -> Vec<String> {
        self.lines
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let lines = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(lines, vec!["int x = 1;"]);
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let lines = CodeBuilder::java()
            .indent()
            .line("int x;")
            .blank()
            .line("int y;")
            .build();

        assert_eq!(lines, vec!["    int x;", "", "    int y;"]);
    }

    #[test]
    fn test_dedent_saturates() {
        let builder = CodeBuilder::java().dedent().dedent();
        assert_eq!(builder.current_indent(), 0);
    }

    #[test]
    fn test_tab_indent() {
        let lines = CodeBuilder::new(Indent::Tab)
            .line("void f(){")
            .indent()
            .line("return;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(lines, vec!["void f(){", "\treturn;", "}"]);
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("@Table("),
                    CodeFragment::indent(vec![CodeFragment::line("name = \"t\"")]),
                    CodeFragment::line(")"),
                    CodeFragment::Block {
                        header: "void f(){".to_string(),
                        body: vec![CodeFragment::line("g();")],
                        close: Some("}".to_string()),
                    },
                ]
            }
        }

        let mut builder = CodeBuilder::new(Indent::COMPACT);
        builder.push_indent().emit(&BlockNode);
        assert_eq!(
            builder.build(),
            vec![
                "  @Table(",
                "    name = \"t\"",
                "  )",
                "  void f(){",
                "    g();",
                "  }"
            ]
        );
    }
}
