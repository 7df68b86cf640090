//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod new;
pub mod templates;
pub mod versions;

use std::path::Path;

pub use new::{execute_new, next_step_command, resolve_config, NewOptions};
pub use templates::{execute_templates, TemplatesOptions};
pub use versions::{execute_versions, versions_json, VersionsOptions};

use crate::template::{BundledTemplates, DirectoryTemplates, TemplateSource};

/// Template store for a command: a directory override or the bundled template
pub fn open_template_source(template_dir: Option<&Path>) -> Box<dyn TemplateSource> {
    match template_dir {
        Some(dir) => {
            tracing::debug!(template_dir = %dir.display(), "using template directory");
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(BundledTemplates::new()),
    }
}
