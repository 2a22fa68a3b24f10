//! Core utilities for the jgencode source generator.
//!
//! This crate holds the pieces that do not know anything about the
//! generated language: writing generated files to disk and a handful of
//! string helpers shared by the renderers.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, LINE_ENDING, Overwrite, WriteResult, join_lines};
// String utilities
pub use utils::{capitalize, is_blank, package_path, split_qualified};
