//! Path constants for generated Go files.

/// Directory generated repositories live under, relative to the module root.
pub const REPOSITORIES_DIR: &str = "repositories";

/// File extension for Go source files.
pub const FILE_EXTENSION: &str = "go";
