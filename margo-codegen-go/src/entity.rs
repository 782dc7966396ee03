//! Naming derivations for a scaffolded entity.

use margo_core::{merge_paths, to_alias, to_camel_case, to_pascal_case, to_snake_case};

use crate::ast::Import;
use crate::paths;

/// A raw identifier plus its directory and module context.
///
/// Every naming-convention variant a generated file needs is derived on
/// demand from these three fields. The value never changes after
/// construction, so the derivations stay consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    name: String,
    dir_path: String,
    base_pkg: String,
}

impl EntityName {
    pub fn new(
        name: impl Into<String>,
        dir_path: impl Into<String>,
        base_pkg: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dir_path: dir_path.into(),
            base_pkg: base_pkg.into(),
        }
    }

    pub fn pascal_case(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn camel_case(&self) -> String {
        to_camel_case(&self.name)
    }

    pub fn snake_case(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Short receiver alias, e.g. `XptoStructNameRepository` -> `xsnr`.
    pub fn alias(&self) -> String {
        to_alias(&self.name)
    }

    /// Package-qualified type name, e.g. `structs.XptoStructName`.
    pub fn type_name(&self) -> String {
        format!("{}.{}", self.import_name(), self.pascal_case())
    }

    /// The identifier other files refer to this entity's package by: the
    /// last segment of the merged package path, underscores removed.
    pub fn import_name(&self) -> String {
        let full_pkg = merge_paths(&[&self.base_pkg, &self.dir_path]);
        let trimmed = full_pkg.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        last.replace('_', "")
    }

    /// The import declaration pulling in this entity's package. The alias
    /// is omitted when the path's last segment already matches it.
    pub fn file_import(&self) -> Import {
        let full_pkg = merge_paths(&[&self.base_pkg, &self.dir_path]);
        let path = full_pkg.trim_end_matches('/').to_string();
        let import_name = self.import_name();

        if path.ends_with(&import_name) {
            Import::new(path)
        } else {
            Import::new(path).alias(import_name)
        }
    }

    /// Path of the generated file: `<dir>/<snake_case>.go`, rooted at
    /// `./` when the directory is empty.
    pub fn file_path(&self) -> String {
        let stem = merge_paths(&[&self.dir_path, &self.snake_case()]);
        format!("{}.{}", stem, paths::FILE_EXTENSION)
    }
}
