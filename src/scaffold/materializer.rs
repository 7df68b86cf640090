//! @acp:module "Tree Materializer"
//! @acp:summary "Walks a template store and writes the rendered project tree"
//! @acp:domain cli
//! @acp:layer service
//!
//! Materialization runs in two passes. Planning maps every entry through
//! the [`PathMapper`] and fails early on bad paths or destination
//! collisions. Execution then creates directories and writes rendered
//! files in lexical path order, stopping at the first I/O failure.
//! Already-written files are left in place; cleanup is up to the caller.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::path_mapper::{Mapping, PathMapper};
use super::renderer::{render, PlaceholderTable};
use crate::config::{BuildVersions, RenderConfig};
use crate::error::{DroidError, Result};
use crate::template::{TemplateEntry, TemplateSource};

/// Wrapper launcher script that must stay executable
pub const LAUNCHER_SCRIPT: &str = "gradlew";

/// Mode for the launcher script and for created directories
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Mode for every other generated file
pub const FILE_MODE: u32 = 0o644;

/// A template entry paired with its mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub source: TemplateEntry,
    pub mapping: Mapping,
}

impl PlannedEntry {
    pub fn destination(&self) -> Option<&str> {
        self.mapping.destination()
    }
}

/// Counts from a completed materialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
}

/// Permission bits for a generated file, decided by its base name
pub fn file_mode(file_name: &str) -> u32 {
    if file_name == LAUNCHER_SCRIPT {
        EXECUTABLE_MODE
    } else {
        FILE_MODE
    }
}

/// @acp:summary "Drives the template walk for one generation run"
pub struct TreeMaterializer<'a> {
    source: &'a dyn TemplateSource,
}

impl<'a> TreeMaterializer<'a> {
    pub fn new(source: &'a dyn TemplateSource) -> Self {
        Self { source }
    }

    /// Map every template entry without touching the filesystem.
    ///
    /// Entries come back in lexical path order.
    pub fn plan(&self, config: &RenderConfig) -> Result<Vec<PlannedEntry>> {
        let mapper = PathMapper::new(&config.package_name);
        let mut entries = self.source.entries()?;
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let mut claimed: HashMap<String, String> = HashMap::new();
        let mut planned = Vec::with_capacity(entries.len());

        for entry in entries {
            let mapping = mapper.map(&entry.path)?;

            if let Some(dest) = mapping.destination() {
                if let Some(first) = claimed.insert(dest.to_string(), entry.path.clone()) {
                    return Err(DroidError::DuplicateDestination {
                        path: dest.to_string(),
                        first,
                        second: entry.path,
                    });
                }
            }

            planned.push(PlannedEntry {
                source: entry,
                mapping,
            });
        }

        Ok(planned)
    }

    /// Materialize the template into an existing `output_dir`
    pub fn materialize(&self, output_dir: &Path, config: &RenderConfig) -> Result<MaterializeReport> {
        if !output_dir.is_dir() {
            return Err(DroidError::DirectoryCreation {
                path: output_dir.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "output directory does not exist",
                ),
            });
        }

        let table = PlaceholderTable::from_config(config, &BuildVersions::CURRENT)?;
        let plan = self.plan(config)?;
        let mut report = MaterializeReport::default();

        for planned in &plan {
            let Some(dest) = planned.destination() else {
                debug!(path = %planned.source.path, "skipping placeholder ancestor");
                report.skipped += 1;
                continue;
            };
            let dest_path = join_relative(output_dir, dest);

            if planned.source.is_dir() {
                create_dir(&dest_path)?;
                debug!(from = %planned.source.path, to = %dest, "created directory");
                report.directories += 1;
            } else {
                self.write_file(&planned.source, &dest_path, &table)?;
                debug!(from = %planned.source.path, to = %dest, "wrote file");
                report.files += 1;
            }
        }

        info!(
            source = %self.source.name(),
            output = %output_dir.display(),
            directories = report.directories,
            files = report.files,
            skipped = report.skipped,
            "materialized template"
        );

        Ok(report)
    }

    fn write_file(&self, entry: &TemplateEntry, dest_path: &Path, table: &PlaceholderTable) -> Result<()> {
        let raw = self.source.read(&entry.path)?;
        let rendered = render(&raw, table);

        if let Some(parent) = dest_path.parent() {
            if !parent.is_dir() {
                warn!(
                    path = %entry.path,
                    "parent directory was not created by the walk, creating it"
                );
                create_dir(parent)?;
            }
        }

        let write_err = |source: io::Error| DroidError::Write {
            path: dest_path.to_path_buf(),
            source,
        };

        fs::write(dest_path, rendered).map_err(write_err)?;
        set_mode(dest_path, file_mode(entry.file_name())).map_err(write_err)?;
        Ok(())
    }
}

/// Join a slash-separated relative path onto `root`
fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(EXECUTABLE_MODE);
    }

    builder.create(path).map_err(|source| DroidError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
