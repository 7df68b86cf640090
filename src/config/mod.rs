//! @acp:module "Configuration"
//! @acp:summary "Render configuration, answers file loading and build-tool constants"
//! @acp:domain cli
//! @acp:layer config

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DroidError, Result};

/// Package identifier the bundled template is written against
pub const PLACEHOLDER_PACKAGE: &str = "com.example.app";

/// Lowest selectable minimum SDK level
pub const MIN_SDK_FLOOR: u32 = 21;

/// Highest selectable minimum SDK level
pub const MIN_SDK_CEILING: u32 = 36;

fn default_app_name() -> String {
    "Mad".to_string()
}

fn default_package_name() -> String {
    "com.example.myapp".to_string()
}

fn default_min_sdk() -> String {
    "24".to_string()
}

/// @acp:summary "Answers that drive one project generation"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Human-readable application name, also the default output directory
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Dot-separated package identifier (e.g. `com.example.myapp`)
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Minimum Android SDK level, kept as its string form
    #[serde(default = "default_min_sdk")]
    pub min_sdk: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            package_name: default_package_name(),
            min_sdk: default_min_sdk(),
        }
    }
}

impl RenderConfig {
    pub fn new(
        app_name: impl Into<String>,
        package_name: impl Into<String>,
        min_sdk: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            package_name: package_name.into(),
            min_sdk: min_sdk.into(),
        }
    }

    /// @acp:summary "Load answers from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Check the answers against the accepted input boundary.
    ///
    /// The materializer trusts a validated config and never repeats these checks.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(DroidError::InvalidConfig("app name is required".to_string()));
        }
        if self.app_name.contains("{{") || self.app_name.contains("}}") {
            return Err(DroidError::InvalidConfig(format!(
                "app name '{}' must not contain '{{{{' or '}}}}'",
                self.app_name
            )));
        }
        if !is_valid_package_name(&self.package_name) {
            return Err(DroidError::InvalidConfig(format!(
                "invalid package name '{}'. Use: com.example.appname",
                self.package_name
            )));
        }
        if !min_sdk_levels().any(|level| level.to_string() == self.min_sdk) {
            return Err(DroidError::InvalidConfig(format!(
                "minimum SDK '{}' is not one of {}..={}",
                self.min_sdk, MIN_SDK_FLOOR, MIN_SDK_CEILING
            )));
        }
        Ok(())
    }
}

/// Regex for package identifiers: dot-separated `[a-z][a-z0-9_]*` tokens
static PACKAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").unwrap()
});

/// Check a package identifier against [`PACKAGE_PATTERN`]
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_PATTERN.is_match(name)
}

/// Selectable minimum SDK levels, lowest first
pub fn min_sdk_levels() -> impl Iterator<Item = u32> {
    MIN_SDK_FLOOR..=MIN_SDK_CEILING
}

/// @acp:summary "Build-tool versions injected into every generated project"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildVersions {
    pub agp: &'static str,
    pub kotlin: &'static str,
    pub gradle: &'static str,
    pub compose_bom: &'static str,
}

impl BuildVersions {
    /// Versions the bundled template is tested against
    pub const CURRENT: BuildVersions = BuildVersions {
        agp: "8.13.2",
        kotlin: "2.3.0",
        gradle: "9.2.1",
        compose_bom: "2025.12.01",
    };
}

impl Default for BuildVersions {
    fn default() -> Self {
        Self::CURRENT
    }
}
