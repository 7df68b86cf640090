//! @acp:module "Versions Command"
//! @acp:summary "Show build-tool versions injected into generated projects"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::{min_sdk_levels, BuildVersions, PLACEHOLDER_PACKAGE};

/// Options for the versions command
#[derive(Debug, Clone, Default)]
pub struct VersionsOptions {
    /// Output as JSON
    pub json: bool,
}

/// JSON view of the build-tool versions
pub fn versions_json(versions: &BuildVersions) -> serde_json::Value {
    serde_json::json!({
        "agp": versions.agp,
        "kotlin": versions.kotlin,
        "gradle": versions.gradle,
        "composeBom": versions.compose_bom,
        "minSdkLevels": min_sdk_levels().map(|level| level.to_string()).collect::<Vec<_>>(),
        "placeholderPackage": PLACEHOLDER_PACKAGE,
    })
}

/// Execute the versions command
pub fn execute_versions(options: VersionsOptions) -> Result<()> {
    let versions = BuildVersions::CURRENT;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&versions_json(&versions))?);
        return Ok(());
    }

    println!("{}", style("Build System Versions").bold());
    println!("  Target AGP Version:     {}", style(versions.agp).cyan());
    println!("  Target Kotlin Version:  {}", style(versions.kotlin).cyan());
    println!("  Target Gradle Wrapper:  {}", style(versions.gradle).cyan());
    println!("  Compose BOM:            {}", style(versions.compose_bom).cyan());

    let levels: Vec<String> = min_sdk_levels().map(|level| level.to_string()).collect();
    println!("  Minimum SDK levels:     {}", levels.join(", "));

    Ok(())
}
