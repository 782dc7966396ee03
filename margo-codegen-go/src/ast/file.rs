//! Top-level Go source file composition.

use crate::CodeBuilder;
use crate::ast::{FuncDecl, Import, Interface, Struct, imports};

/// Builder for a complete Go source file.
///
/// Sections render in a fixed order: package clause, import block, free
/// functions, interfaces, structs. Imports render in the order they were
/// added; callers are responsible for deduplicating and ordering them.
#[derive(Debug, Clone)]
pub struct SourceFile {
    package: String,
    imports: Vec<Import>,
    funcs: Vec<FuncDecl>,
    interfaces: Vec<Interface>,
    structs: Vec<Struct>,
}

impl SourceFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            funcs: Vec::new(),
            interfaces: Vec::new(),
            structs: Vec::new(),
        }
    }

    /// Add an import declaration.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a free function.
    pub fn func(mut self, func: FuncDecl) -> Self {
        self.funcs.push(func);
        self
    }

    /// Add an interface declaration.
    pub fn interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Add a struct declaration.
    pub fn structure(mut self, structure: Struct) -> Self {
        self.structs.push(structure);
        self
    }

    /// Render the whole file.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::go().line(&format!("package {}", self.package));
        let builder = imports::render_block(&self.imports, builder);
        let builder = self.funcs.iter().fold(builder, |b, func| func.render(b));
        let builder = self
            .interfaces
            .iter()
            .fold(builder, |b, interface| interface.render(b));
        let builder = self
            .structs
            .iter()
            .fold(builder, |b, structure| structure.render(b));
        builder.build()
    }
}
