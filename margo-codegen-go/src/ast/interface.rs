//! Go interface and method signature builders.

use crate::CodeBuilder;

/// An entry in a parameter or result list, optionally named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    name: Option<String>,
    ty: String,
}

impl Arg {
    /// A named argument (`name type`).
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    /// A bare argument (`type` only).
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }

    fn is_named(&self) -> bool {
        self.name.is_some()
    }

    fn spec(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {}", name, self.ty),
            None => self.ty.clone(),
        }
    }
}

fn join_args(args: &[Arg]) -> String {
    args.iter().map(Arg::spec).collect::<Vec<_>>().join(", ")
}

/// A method signature: name, parameters, results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    params: Vec<Arg>,
    results: Vec<Arg>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, arg: Arg) -> Self {
        self.params.push(arg);
        self
    }

    /// Append a result.
    pub fn result(mut self, arg: Arg) -> Self {
        self.results.push(arg);
        self
    }

    /// Format the signature, e.g. `Get(ctx context.Context) (e Entity, err error)`.
    ///
    /// Results are parenthesized whenever there is more than one of them,
    /// or a single one that is named.
    pub fn signature(&self) -> String {
        let mut sig = format!("{}({})", self.name, join_args(&self.params));
        match self.results.as_slice() {
            [] => {}
            [only] if !only.is_named() => {
                sig.push(' ');
                sig.push_str(&only.spec());
            }
            results => {
                sig.push_str(" (");
                sig.push_str(&join_args(results));
                sig.push(')');
            }
        }
        sig
    }
}

/// Builder for a Go interface declaration.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add a method to the interface.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Render the declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = builder.blank();
        if self.methods.is_empty() {
            return builder.line(&format!("type {} interface {{}}", self.name));
        }
        builder
            .line(&format!("type {} interface {{", self.name))
            .indent()
            .each(&self.methods, |b, method| b.line(&method.signature()))
            .dedent()
            .line("}")
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::go()).build()
    }
}
