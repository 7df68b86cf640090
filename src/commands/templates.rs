//! @acp:module "Templates Command"
//! @acp:summary "List template entries and where they would land"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use super::open_template_source;
use crate::config::is_valid_package_name;
use crate::scaffold::{Mapping, PathMapper};

/// Options for the templates command
#[derive(Debug, Clone)]
pub struct TemplatesOptions {
    /// Template root on disk instead of the bundled template
    pub template_dir: Option<PathBuf>,
    /// Package used to preview mapped destinations
    pub package: String,
}

/// Execute the templates command
pub fn execute_templates(options: TemplatesOptions) -> Result<()> {
    if !is_valid_package_name(&options.package) {
        bail!("Invalid package name '{}'. Use: com.example.appname", options.package);
    }

    let source = open_template_source(options.template_dir.as_deref());
    let mapper = PathMapper::new(&options.package);
    let mut entries = source.entries()?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    println!(
        "{} {} template ({} entries)",
        style("→").cyan(),
        source.name(),
        entries.len()
    );

    for entry in &entries {
        let marker = if entry.is_dir() { "d" } else { "f" };
        match mapper.map(&entry.path)? {
            Mapping::Destination(dest) if dest == entry.path => {
                println!("  {} {}", style(marker).dim(), entry.path);
            }
            Mapping::Destination(dest) => {
                println!(
                    "  {} {} {} {}",
                    style(marker).dim(),
                    entry.path,
                    style("→").dim(),
                    style(dest).cyan()
                );
            }
            Mapping::Skip => {
                println!(
                    "  {} {} {}",
                    style(marker).dim(),
                    style(&entry.path).dim(),
                    style("(skipped)").yellow()
                );
            }
        }
    }

    Ok(())
}
