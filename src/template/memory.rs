//! @acp:module "Memory Templates"
//! @acp:summary "In-memory template tree for tests and programmatic callers"
//! @acp:domain cli
//! @acp:layer service

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use super::{entries_from_files, TemplateEntry, TemplateSource};
use crate::error::{DroidError, Result};

/// Template store backed by a path-to-bytes map
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; ancestor directories are listed automatically
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add a directory entry that has no files below it
    pub fn with_dir(mut self, path: impl Into<String>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl TemplateSource for MemoryTemplates {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        Ok(entries_from_files(self.files.keys(), &self.dirs))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| DroidError::Read {
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such template file"),
        })
    }
}
