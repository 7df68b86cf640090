//! @acp:module "Content Renderer"
//! @acp:summary "Placeholder table and literal token substitution"
//! @acp:domain cli
//! @acp:layer service
//!
//! Tokens use the `{{NAME}}` form, where NAME is `[A-Za-z0-9_]+`.
//! Rendering is a single left-to-right pass over the raw bytes:
//! replacement text is emitted and never rescanned, and unknown
//! `{{...}}` sequences are copied through.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

use crate::config::{BuildVersions, RenderConfig};
use crate::error::{DroidError, Result};

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// @acp:summary "Token name to replacement value mapping for one run"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderTable {
    values: BTreeMap<String, String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for a generation run: answers plus build-tool versions
    pub fn from_config(config: &RenderConfig, versions: &BuildVersions) -> Result<Self> {
        let mut table = Self::new();
        table.insert("APP_NAME", &config.app_name)?;
        table.insert("PACKAGE_NAME", &config.package_name)?;
        table.insert("MIN_SDK", &config.min_sdk)?;
        table.insert("GRADLE_VERSION", versions.gradle)?;
        table.insert("AGP_VERSION", versions.agp)?;
        table.insert("KOTLIN_VERSION", versions.kotlin)?;
        table.insert("CBOM_VERSION", versions.compose_bom)?;
        Ok(table)
    }

    /// Add a token; values must not contain token delimiters
    pub fn insert(&mut self, token: &str, value: &str) -> Result<()> {
        let reject = |reason: &str| {
            Err(DroidError::InvalidPlaceholder {
                token: token.to_string(),
                reason: reason.to_string(),
            })
        };

        if token.is_empty()
            || !token
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return reject("token name must be non-empty ASCII letters, digits or '_'");
        }
        if value.contains("{{") || value.contains("}}") {
            return reject("value contains a token delimiter");
        }

        self.values.insert(token.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Substitute every known `{{TOKEN}}` in `raw`
pub fn render(raw: &[u8], table: &PlaceholderTable) -> Vec<u8> {
    TOKEN_PATTERN
        .replace_all(raw, |caps: &Captures| {
            let value = std::str::from_utf8(&caps[1])
                .ok()
                .and_then(|name| table.get(name));
            match value {
                Some(value) => value.as_bytes().to_vec(),
                None => caps[0].to_vec(),
            }
        })
        .into_owned()
}
