#![forbid(unsafe_code)]

//! @acp:module "Droid Library"
//! @acp:summary "Android project generation from a bundled Gradle template"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Droid
//!
//! Generates an Android Jetpack Compose project from a template tree.
//!
//! ## Features
//!
//! - **Package relocation**: sources under the placeholder package move to your package path
//! - **Placeholder rendering**: `{{APP_NAME}}`, `{{PACKAGE_NAME}}`, `{{MIN_SDK}}` and build-tool versions
//! - **Launcher permissions**: `gradlew` is always written executable
//! - **Injectable stores**: bundled, on-disk or in-memory templates
//!
//! ## Example
//!
//! ```rust,no_run
//! use droid::{BundledTemplates, RenderConfig, TreeMaterializer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RenderConfig::new("Mad", "com.example.myapp", "24");
//!     config.validate()?;
//!
//!     std::fs::create_dir_all("Mad")?;
//!     let templates = BundledTemplates::new();
//!     let report = TreeMaterializer::new(&templates).materialize("Mad".as_ref(), &config)?;
//!     println!("wrote {} files", report.files);
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod scaffold;
pub mod template;

// Re-exports
pub use config::{BuildVersions, RenderConfig, PLACEHOLDER_PACKAGE};
pub use error::{DroidError, Result};
pub use scaffold::{
    render, MaterializeReport, Mapping, PathMapper, PlaceholderTable, PlannedEntry,
    TreeMaterializer,
};
pub use template::{
    BundledTemplates, DirectoryTemplates, EntryKind, MemoryTemplates, TemplateEntry,
    TemplateSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
