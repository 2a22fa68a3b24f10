//! Language-agnostic code generation building blocks for jgencode.
//!
//! - [`CodeBuilder`] - Fluent API for building indented source lines
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`ImportSet`] - Sorted, deduplicated import names
//! - [`SourceTree`] - Batch writing of generated files

mod code_builder;
mod imports;
mod indent;
mod renderable;
mod source_tree;

pub use code_builder::CodeBuilder;
pub use imports::ImportSet;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use source_tree::{SourceEntry, SourceTree, WriteStats};
