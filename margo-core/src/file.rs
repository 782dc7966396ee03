use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk under `base`
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (regenerated code)
    #[default]
    Always,
    /// Only create if the file doesn't exist (stubs the user edits)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct StubFile {
        name: &'static str,
        content: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for StubFile {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = StubFile {
            name: "a.go",
            content: "package a\n",
            rules: FileRules::default(),
        };

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("nested").join("a.go")).unwrap();
        assert_eq!(written, "package a\n");
    }

    #[test]
    fn test_write_always_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let file = StubFile {
            name: "b.go",
            content: "package b\n",
            rules: FileRules::default(),
        };

        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("b.go"), "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("nested").join("b.go")).unwrap();
        assert_eq!(written, "package b\n");
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let file = StubFile {
            name: "c.go",
            content: "package c\n",
            rules: FileRules {
                overwrite: Overwrite::IfMissing,
            },
        };

        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("c.go"), "original").unwrap();

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        let kept = fs::read_to_string(temp.path().join("nested").join("c.go")).unwrap();
        assert_eq!(kept, "original");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let file = StubFile {
            name: "d.go",
            content: "package d\n",
            rules: FileRules {
                overwrite: Overwrite::IfMissing,
            },
        };

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(temp.path().join("nested").join("d.go").exists());
    }
}
