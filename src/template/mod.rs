//! @acp:module "Template Stores"
//! @acp:summary "Read-only, path-addressable template trees"
//! @acp:domain cli
//! @acp:layer service
//!
//! A template store lists its entries and hands out raw bytes by
//! slash-separated relative path. The materializer only talks to the
//! [`TemplateSource`] trait, so tests can swap the bundled Android
//! template for a small synthetic tree.
//!
//! ## Stores
//!
//! - [`BundledTemplates`] - the project template compiled into the binary
//! - [`DirectoryTemplates`] - a template root on disk (`--template-dir`)
//! - [`MemoryTemplates`] - an in-memory tree

pub mod bundled;
pub mod directory;
pub mod memory;

use std::collections::BTreeSet;

pub use bundled::BundledTemplates;
pub use directory::DirectoryTemplates;
pub use memory::MemoryTemplates;

use crate::error::Result;

/// Kind of a template entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a template tree, addressed relative to the template root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateEntry {
    /// Slash-separated path, never starting with `/`
    pub path: String,
    pub kind: EntryKind,
}

impl TemplateEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Capability over a template tree: list entries, read bytes by path
pub trait TemplateSource {
    /// Short label for log and CLI output
    fn name(&self) -> String;

    /// Every entry below the root; the root itself is not listed
    fn entries(&self) -> Result<Vec<TemplateEntry>>;

    /// Raw bytes of the file entry at `path`
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Build a sorted entry list from file paths, adding every ancestor directory.
///
/// Stores that only know files (embedded assets, in-memory maps) use this so
/// the materializer still sees the intermediate directory entries.
pub fn entries_from_files<I, S>(files: I, extra_dirs: &BTreeSet<String>) -> Vec<TemplateEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dirs: BTreeSet<String> = extra_dirs.clone();
    let mut file_paths: BTreeSet<String> = BTreeSet::new();

    for file in files {
        let file = file.as_ref();
        let mut end = 0;
        while let Some(offset) = file[end..].find('/') {
            end += offset;
            dirs.insert(file[..end].to_string());
            end += 1;
        }
        file_paths.insert(file.to_string());
    }

    let mut entries: Vec<TemplateEntry> = dirs
        .into_iter()
        .map(TemplateEntry::directory)
        .chain(file_paths.into_iter().map(TemplateEntry::file))
        .collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}
