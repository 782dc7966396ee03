//! The repository archetype: an interface plus a stub implementation.

use std::path::{Path, PathBuf};

use margo_core::{FileRules, GeneratedFile, Overwrite, merge_paths};

use crate::ast::{
    Arg, FuncDecl, Import, Interface, Method, Receiver, SourceFile, Struct, dedup_by_path,
};
use crate::entity::EntityName;
use crate::paths;

const CONTEXT_PKG: &str = "context";
const CONTEXT_TYPE: &str = "context.Context";
const ID_PKG: &str = "github.com/google/uuid";
const ID_TYPE: &str = "uuid.UUID";

/// Composes the repository interface/struct pair for one entity.
///
/// The interface declares the canonical `GetAll` and `Get` methods; a
/// struct of the same name carries empty-bodied stubs for both, ready
/// for a hand-written storage backend. The generated file lives under
/// `repositories/<entity_snake_case>/` in the target module.
#[derive(Debug, Clone)]
pub struct Repository {
    repo_name: EntityName,
    entity: EntityName,
}

impl Repository {
    pub fn new(entity: EntityName, base_pkg: impl Into<String>) -> Self {
        let repo_name = EntityName::new(
            format!("{}Repository", entity.pascal_case()),
            merge_paths(&[paths::REPOSITORIES_DIR, &entity.snake_case()]),
            base_pkg,
        );
        Self { repo_name, entity }
    }

    /// The interface declaring the repository contract.
    pub fn interface(&self) -> Interface {
        Interface::new(self.repo_name.pascal_case())
            .method(self.get_all_method())
            .method(self.get_method())
    }

    /// Imports the generated file needs, exactly one entry per path.
    pub fn imports(&self) -> Vec<Import> {
        dedup_by_path(vec![
            Import::new(ID_PKG),
            Import::new(CONTEXT_PKG),
            self.entity.file_import(),
        ])
    }

    /// The struct stub implementing the interface.
    pub fn stub(&self) -> Struct {
        let receiver = Receiver::aliased(self.repo_name.alias(), self.repo_name.pascal_case());
        Struct::new(self.repo_name.pascal_case())
            .implement(FuncDecl::new(self.get_all_method()).receiver(receiver.clone()))
            .implement(FuncDecl::new(self.get_method()).receiver(receiver))
    }

    /// Assemble the full source file: package clause, imports, stub struct.
    ///
    /// The interface is exposed separately through [`Repository::interface`]
    /// and is not serialized into the stub file.
    pub fn source_file(&self) -> SourceFile {
        SourceFile::new(self.repo_name.import_name())
            .imports(self.imports())
            .structure(self.stub())
    }

    /// Where the generated file lands, relative to the module root.
    pub fn file_path(&self) -> String {
        self.repo_name.file_path()
    }

    fn get_all_method(&self) -> Method {
        Method::new("GetAll")
            .param(Arg::named("ctx", CONTEXT_TYPE))
            .result(Arg::named(
                self.entity.camel_case(),
                format!("[]{}", self.entity.type_name()),
            ))
            .result(Arg::named("err", "error"))
    }

    fn get_method(&self) -> Method {
        Method::new("Get")
            .param(Arg::named("ctx", CONTEXT_TYPE))
            .param(Arg::named("id", ID_TYPE))
            .result(Arg::named(self.entity.camel_case(), self.entity.type_name()))
            .result(Arg::named("err", "error"))
    }
}

impl GeneratedFile for Repository {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_path())
    }

    fn rules(&self) -> FileRules {
        // Stubs are meant to be filled in by hand; never clobber them.
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        self.source_file().render()
    }
}
