//! @acp:module "Directory Templates"
//! @acp:summary "Template tree read from a directory on disk"
//! @acp:domain cli
//! @acp:layer service

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{EntryKind, TemplateEntry, TemplateSource};
use crate::error::{DroidError, Result};

/// Template store rooted at a local directory
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Convert an absolute walk path into a slash-separated relative path
    fn relative_path(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            DroidError::InvalidTemplatePath {
                path: path.display().to_string(),
                reason: "outside of template root".to_string(),
            }
        })?;

        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component.as_os_str().to_str().ok_or_else(|| {
                DroidError::InvalidTemplatePath {
                    path: relative.display().to_string(),
                    reason: "not valid UTF-8".to_string(),
                }
            })?;
            segments.push(segment);
        }
        Ok(segments.join("/"))
    }
}

impl TemplateSource for DirectoryTemplates {
    fn name(&self) -> String {
        self.root.display().to_string()
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| DroidError::Read {
                path: e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| self.root.display().to_string()),
                source: io::Error::from(e),
            })?;

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(TemplateEntry {
                path: self.relative_path(entry.path())?,
                kind,
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = path
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        std::fs::read(&full_path).map_err(|source| DroidError::Read {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_entries_are_relative_and_sorted() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("app/src")).unwrap();
        std::fs::write(temp.path().join("app/src/Main.kt"), "fun main() {}").unwrap();
        std::fs::write(temp.path().join("gradlew"), "#!/bin/sh").unwrap();

        let store = DirectoryTemplates::new(temp.path());
        let entries = store.entries().unwrap();

        assert_eq!(
            entries,
            vec![
                TemplateEntry::directory("app"),
                TemplateEntry::directory("app/src"),
                TemplateEntry::file("app/src/Main.kt"),
                TemplateEntry::file("gradlew"),
            ]
        );
    }

    #[test]
    fn test_directory_read() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("app")).unwrap();
        std::fs::write(temp.path().join("app/notes.txt"), "{{APP_NAME}}").unwrap();

        let store = DirectoryTemplates::new(temp.path());

        assert_eq!(store.read("app/notes.txt").unwrap(), b"{{APP_NAME}}".to_vec());
        assert!(matches!(
            store.read("app/missing.txt"),
            Err(DroidError::Read { .. })
        ));
    }

    #[test]
    fn test_missing_root_is_read_error() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryTemplates::new(temp.path().join("nope"));
        assert!(matches!(store.entries(), Err(DroidError::Read { .. })));
    }
}
