//! Core utilities for the margo Go scaffolding tool.
//!
//! This crate provides the language-agnostic pieces the generators build
//! on: identifier casing, package path merging, and file writing.

mod casing;
mod file;
mod paths;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use casing::{to_alias, to_camel_case, to_pascal_case, to_snake_case};
// Path utilities
pub use paths::merge_paths;
