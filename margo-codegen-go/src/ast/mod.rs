//! Go AST builders for the constructs generated files use.
//!
//! Every node is a value type built once through a fluent API and
//! rendered through [`CodeBuilder`](crate::CodeBuilder). Each declaration
//! owns its leading newline, so nodes concatenate into a file without any
//! extra separators. No escaping is performed; callers supply valid Go
//! identifiers and types.

mod file;
mod func;
mod imports;
mod interface;
mod structs;

pub use file::SourceFile;
pub use func::{FuncDecl, Receiver};
pub use imports::{Import, dedup_by_path};
pub use interface::{Arg, Interface, Method};
pub use structs::{Field, Struct};
