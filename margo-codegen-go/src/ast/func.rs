//! Go function declarations, free or bound to a receiver.

use crate::CodeBuilder;
use crate::ast::Method;

/// A method receiver (`(alias Type)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    alias: Option<String>,
    ty: String,
}

impl Receiver {
    /// A receiver without a binding name (`(Type)`).
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            alias: None,
            ty: ty.into(),
        }
    }

    /// A receiver bound to an alias (`(alias Type)`).
    pub fn aliased(alias: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ty: ty.into(),
        }
    }

    fn spec(&self) -> String {
        match &self.alias {
            Some(alias) => format!("({} {})", alias, self.ty),
            None => format!("({})", self.ty),
        }
    }
}

/// Builder for a `func` declaration with a literal-line body.
///
/// Body lines are opaque text: they are indented one level and copied
/// verbatim, never parsed or reformatted.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    receiver: Option<Receiver>,
    method: Method,
    body: Vec<String>,
}

impl FuncDecl {
    pub fn new(method: Method) -> Self {
        Self {
            receiver: None,
            method,
            body: Vec::new(),
        }
    }

    /// Bind the function to a receiver.
    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Append a literal body line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Render the declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let header = match &self.receiver {
            Some(receiver) => format!("func {} {} {{", receiver.spec(), self.method.signature()),
            None => format!("func {} {{", self.method.signature()),
        };
        builder
            .blank()
            .line(&header)
            .indent()
            .each(&self.body, |b, line| b.line(line))
            .dedent()
            .line("}")
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::go()).build()
    }
}
