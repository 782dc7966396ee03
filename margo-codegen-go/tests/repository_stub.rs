//! End-to-end tests for the repository archetype: compose, render, write.

use std::fs;

use margo_codegen_go::{EntityName, Repository};
use margo_core::{GeneratedFile, WriteResult};
use tempfile::TempDir;

fn user_account_repository() -> Repository {
    Repository::new(
        EntityName::new("user_account", "src/entities", "github.com/acme/shop"),
        "github.com/acme/shop",
    )
}

#[test]
fn test_rendered_stub_for_snake_case_entity() {
    let code = user_account_repository().render();

    let want = "package useraccount\n\
                \n\
                import (\n\
                \t\"github.com/google/uuid\"\n\
                \t\"context\"\n\
                \t\"github.com/acme/shop/src/entities\"\n\
                )\n\
                \n\
                type UserAccountRepository struct {}\n\
                \n\
                func (uar UserAccountRepository) GetAll(ctx context.Context) (userAccount []entities.UserAccount, err error) {\n\
                }\n\
                \n\
                func (uar UserAccountRepository) Get(ctx context.Context, id uuid.UUID) (userAccount entities.UserAccount, err error) {\n\
                }\n";
    assert_eq!(code, want);
}

#[test]
fn test_write_creates_stub_under_repositories_dir() {
    let temp = TempDir::new().unwrap();
    let repository = user_account_repository();

    let result = repository.write(temp.path()).unwrap();

    assert_eq!(result, WriteResult::Written);
    let path = temp
        .path()
        .join("repositories/user_account/user_account_repository.go");
    assert_eq!(fs::read_to_string(&path).unwrap(), repository.render());
}

#[test]
fn test_write_never_clobbers_an_existing_stub() {
    let temp = TempDir::new().unwrap();
    let repository = user_account_repository();
    let path = repository.path(temp.path());

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "package useraccount // edited by hand\n").unwrap();

    let result = repository.write(temp.path()).unwrap();

    assert_eq!(result, WriteResult::Skipped);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "package useraccount // edited by hand\n"
    );
}
