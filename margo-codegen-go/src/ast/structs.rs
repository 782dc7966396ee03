//! Go struct builders.

use crate::CodeBuilder;
use crate::ast::FuncDecl;

/// A struct field. The type is optional (embedded fields carry none) and
/// the tag, when present, is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: Option<String>,
    tag: Option<String>,
}

impl Field {
    /// An embedded field (`Name` alone).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            tag: None,
        }
    }

    /// A typed field (`Name Type`).
    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            tag: None,
        }
    }

    /// Attach a struct tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    fn spec(&self) -> String {
        let mut spec = self.name.clone();
        if let Some(ty) = &self.ty {
            spec.push(' ');
            spec.push_str(ty);
        }
        if let Some(tag) = &self.tag {
            spec.push(' ');
            spec.push_str(tag);
        }
        spec
    }
}

/// Builder for a Go struct declaration and the functions bound to it.
///
/// Bound functions render immediately after the declaration; each one
/// opens with its own newline, so no separator is inserted here.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
    impls: Vec<FuncDecl>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            impls: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Bind a function implementation to this struct.
    pub fn implement(mut self, func: FuncDecl) -> Self {
        self.impls.push(func);
        self
    }

    /// Render the declaration and its bound functions to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = builder.blank();
        let builder = if self.fields.is_empty() {
            builder.line(&format!("type {} struct {{}}", self.name))
        } else {
            builder
                .line(&format!("type {} struct {{", self.name))
                .indent()
                .each(&self.fields, |b, field| b.line(&field.spec()))
                .dedent()
                .line("}")
        };
        self.impls.iter().fold(builder, |b, func| func.render(b))
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::go()).build()
    }
}
