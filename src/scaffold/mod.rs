//! @acp:module "Scaffold"
//! @acp:summary "Template materialization engine"
//! @acp:domain cli
//! @acp:layer feature
//!
//! Turns a template store plus a [`RenderConfig`](crate::config::RenderConfig)
//! into a project directory:
//!
//! - [`PathMapper`] decides where each entry lands (or that it is skipped)
//! - [`render`] substitutes `{{TOKEN}}` placeholders in file contents
//! - [`TreeMaterializer`] walks the store and writes the output tree

pub mod materializer;
pub mod path_mapper;
pub mod readme;
pub mod renderer;

pub use materializer::{
    file_mode, MaterializeReport, PlannedEntry, TreeMaterializer, EXECUTABLE_MODE, FILE_MODE,
    LAUNCHER_SCRIPT,
};
pub use path_mapper::{validate_template_path, Mapping, PathMapper, ANCHOR_BASE, SOURCE_PACKAGE_PATH};
pub use readme::{readme_contents, write_readme};
pub use renderer::{render, PlaceholderTable};
