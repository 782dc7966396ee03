//! Go import declarations.

use crate::CodeBuilder;

/// A single Go import, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    path: String,
    alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    /// Alias the imported package (`alias "path"`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The import path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The inline form used inside an import declaration.
    pub fn spec(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

/// Drop duplicate imports, keeping the first occurrence of each path.
///
/// Aliases are ignored for the comparison; the first-seen alias wins.
pub fn dedup_by_path(imports: Vec<Import>) -> Vec<Import> {
    let mut kept: Vec<Import> = Vec::with_capacity(imports.len());
    for import in imports {
        if !kept.iter().any(|seen| seen.path == import.path) {
            kept.push(import);
        }
    }
    kept
}

/// Render an import block in the order given: nothing when empty, a single
/// `import` line for one import, a parenthesized group otherwise.
pub(crate) fn render_block(imports: &[Import], builder: CodeBuilder) -> CodeBuilder {
    match imports {
        [] => builder,
        [only] => builder.blank().line(&format!("import {}", only.spec())),
        _ => builder
            .blank()
            .line("import (")
            .indent()
            .each(imports, |b, import| b.line(&import.spec()))
            .dedent()
            .line(")"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_without_alias() {
        assert_eq!(Import::new("context").spec(), "\"context\"");
    }

    #[test]
    fn test_spec_with_alias() {
        let import = Import::new("github.com/acme/shop/repositories/user_account").alias("useraccount");
        assert_eq!(
            import.spec(),
            "useraccount \"github.com/acme/shop/repositories/user_account\""
        );
    }

    #[test]
    fn test_render_block_empty() {
        let code = render_block(&[], CodeBuilder::go()).build();
        assert_eq!(code, "");
    }

    #[test]
    fn test_render_block_single() {
        let code = render_block(&[Import::new("context")], CodeBuilder::go()).build();
        assert_eq!(code, "\nimport \"context\"\n");
    }

    #[test]
    fn test_render_block_grouped_preserves_order() {
        let imports = vec![
            Import::new("github.com/google/uuid"),
            Import::new("context"),
        ];
        let code = render_block(&imports, CodeBuilder::go()).build();
        assert_eq!(
            code,
            "\nimport (\n\t\"github.com/google/uuid\"\n\t\"context\"\n)\n"
        );
    }

    #[test]
    fn test_dedup_by_path_keeps_first_alias() {
        let deduped = dedup_by_path(vec![
            Import::new("context"),
            Import::new("github.com/google/uuid"),
            Import::new("context").alias("ctx"),
        ]);

        assert_eq!(
            deduped,
            vec![Import::new("context"), Import::new("github.com/google/uuid")]
        );
    }
}
