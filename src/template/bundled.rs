//! @acp:module "Bundled Templates"
//! @acp:summary "Android Compose project template embedded at compile time"
//! @acp:domain cli
//! @acp:layer service

use std::collections::BTreeSet;
use std::io;

use rust_embed::RustEmbed;

use super::{entries_from_files, TemplateEntry, TemplateSource};
use crate::error::{DroidError, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// The template tree shipped inside the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for BundledTemplates {
    fn name(&self) -> String {
        "bundled".to_string()
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        Ok(entries_from_files(Assets::iter(), &BTreeSet::new()))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        Assets::get(path)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| DroidError::Read {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not in bundled templates"),
            })
    }
}
