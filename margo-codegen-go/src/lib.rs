//! Go source model and renderer for the margo scaffolding tool.
//!
//! The [`ast`] module models the small slice of Go that generated files
//! use (package clause, imports, interfaces, structs, bound functions)
//! and renders it deterministically through [`CodeBuilder`].
//! [`EntityName`] derives every naming variant a generated file needs
//! from a single identifier, and [`Repository`] composes the repository
//! interface/struct archetype from one.

mod builder;
mod entity;
mod repository;

pub mod ast;
pub mod paths;

pub use builder::{CodeBuilder, Indent};
pub use entity::EntityName;
pub use repository::Repository;
