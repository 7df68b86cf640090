//! @acp:module "New Command"
//! @acp:summary "Generate a new Android project from the template"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `droid new`: resolves the answers, prepares the output
//! directory, runs the materializer and prints the next steps.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;

use super::open_template_source;
use crate::config::RenderConfig;
use crate::scaffold::{write_readme, Mapping, MaterializeReport, TreeMaterializer};

/// Options for the new command
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Application name
    pub name: Option<String>,
    /// Package identifier
    pub package: Option<String>,
    /// Minimum SDK level
    pub min_sdk: Option<String>,
    /// JSON answers file
    pub answers: Option<PathBuf>,
    /// Output directory (defaults to ./<app name>)
    pub output: Option<PathBuf>,
    /// Template root on disk instead of the bundled template
    pub template_dir: Option<PathBuf>,
    /// Replace an existing output directory
    pub force: bool,
    /// Print the mapping plan without writing
    pub dry_run: bool,
    /// Skip README.md generation
    pub no_readme: bool,
    /// Leave partial output behind on failure
    pub keep_partial: bool,
}

/// Merge flags, answers file and defaults (flags win)
pub fn resolve_config(options: &NewOptions) -> Result<RenderConfig> {
    let mut config = match &options.answers {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load answers file {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(name) = &options.name {
        config.app_name = name.clone();
    }
    if let Some(package) = &options.package {
        config.package_name = package.clone();
    }
    if let Some(min_sdk) = &options.min_sdk {
        config.min_sdk = min_sdk.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Build command to suggest for the host OS
pub fn next_step_command(os: &str) -> &'static str {
    match os {
        "windows" => "gradle buildDebug",
        _ => "./gradlew buildDebug",
    }
}

/// Execute the new command
pub fn execute_new(options: NewOptions) -> Result<()> {
    let config = resolve_config(&options)?;
    let output_dir = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.app_name));
    let source = open_template_source(options.template_dir.as_deref());
    let materializer = TreeMaterializer::new(source.as_ref());

    if options.dry_run {
        return print_plan(&materializer, &config, &output_dir);
    }

    if output_dir.exists() {
        if !options.force {
            bail!(
                "Directory '{}' already exists. Use --force to overwrite.",
                output_dir.display()
            );
        }
        let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
        ensure_removable(&output_dir, &cwd)?;
        std::fs::remove_dir_all(&output_dir)
            .with_context(|| format!("Failed to remove {}", output_dir.display()))?;
    }

    println!(
        "{} Generating {} in {} ...",
        style("→").cyan(),
        style(&config.app_name).bold(),
        output_dir.display()
    );

    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create project directory {}", output_dir.display())
    })?;

    let report = match generate(&materializer, &output_dir, &config, options.no_readme) {
        Ok(report) => report,
        Err(e) => {
            if !options.keep_partial {
                remove_partial_output(&output_dir);
            }
            return Err(e);
        }
    };

    println!(
        "{} Success! {} files, {} directories",
        style("✓").green(),
        report.files,
        report.directories
    );

    let abs_path = std::path::absolute(&output_dir).unwrap_or_else(|_| output_dir.clone());
    println!("\n{}", style("Next steps:").bold());
    println!("  $ cd {}", style(abs_path.display()).cyan());
    println!(
        "  $ {}",
        style(next_step_command(std::env::consts::OS)).cyan()
    );

    Ok(())
}

/// Materialize the template and add the README
fn generate(
    materializer: &TreeMaterializer,
    output_dir: &Path,
    config: &RenderConfig,
    no_readme: bool,
) -> Result<MaterializeReport> {
    let report = materializer
        .materialize(output_dir, config)
        .context("Failed to generate project")?;

    if !no_readme {
        write_readme(output_dir, config).context("Failed to write README.md")?;
    }

    Ok(report)
}

/// Refuse to replace a directory that is, or contains, the working directory
fn ensure_removable(output_dir: &Path, cwd: &Path) -> Result<()> {
    let target = output_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", output_dir.display()))?;
    let cwd = cwd
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", cwd.display()))?;

    if cwd.starts_with(&target) {
        bail!(
            "Refusing to replace '{}': it contains the current directory",
            output_dir.display()
        );
    }
    Ok(())
}

fn print_plan(materializer: &TreeMaterializer, config: &RenderConfig, output_dir: &Path) -> Result<()> {
    let plan = materializer.plan(config)?;

    println!(
        "{} Dry run: {} entries for {} ({})",
        style("→").cyan(),
        plan.len(),
        style(&config.package_name).bold(),
        output_dir.display()
    );
    for planned in &plan {
        match &planned.mapping {
            Mapping::Destination(dest) if *dest == planned.source.path => {
                println!("  {}", dest);
            }
            Mapping::Destination(dest) => {
                println!("  {} {} {}", planned.source.path, style("→").dim(), dest);
            }
            Mapping::Skip => {
                println!("  {} {}", style(&planned.source.path).dim(), style("(skipped)").yellow());
            }
        }
    }

    Ok(())
}

fn remove_partial_output(output_dir: &Path) {
    if let Err(e) = std::fs::remove_dir_all(output_dir) {
        tracing::warn!(
            output = %output_dir.display(),
            error = %e,
            "failed to remove partial output"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&NewOptions::default()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_flags_override_answers_file() {
        let temp = TempDir::new().unwrap();
        let answers = temp.path().join("answers.json");
        std::fs::write(
            &answers,
            r#"{"appName": "FromFile", "packageName": "io.file", "minSdk": "30"}"#,
        )
        .unwrap();

        let options = NewOptions {
            answers: Some(answers),
            package: Some("io.flag".to_string()),
            ..Default::default()
        };
        let config = resolve_config(&options).unwrap();

        assert_eq!(config.app_name, "FromFile");
        assert_eq!(config.package_name, "io.flag");
        assert_eq!(config.min_sdk, "30");
    }

    #[test]
    fn test_resolve_config_rejects_invalid_package() {
        let options = NewOptions {
            package: Some("Not.Valid".to_string()),
            ..Default::default()
        };
        assert!(resolve_config(&options).is_err());
    }

    #[test]
    fn test_force_never_removes_working_directory() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let nested = project.join("app/src");
        std::fs::create_dir_all(&nested).unwrap();

        let err = ensure_removable(&project, &project).unwrap_err();
        assert!(err.to_string().contains("contains the current directory"));
        assert!(ensure_removable(&project, &nested).is_err());
        assert!(ensure_removable(&project.join("app/../"), &nested).is_err());
        assert!(ensure_removable(temp.path(), &nested).is_err());
        assert!(project.is_dir());
    }

    #[test]
    fn test_force_allows_sibling_directory() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("Mad");
        let cwd = temp.path().join("work");
        std::fs::create_dir_all(&old).unwrap();
        std::fs::create_dir_all(&cwd).unwrap();

        assert!(ensure_removable(&old, &cwd).is_ok());
        assert!(ensure_removable(&old, temp.path()).is_ok());
    }

    #[test]
    fn test_next_step_command() {
        assert_eq!(next_step_command("windows"), "gradle buildDebug");
        assert_eq!(next_step_command("linux"), "./gradlew buildDebug");
        assert_eq!(next_step_command("macos"), "./gradlew buildDebug");
    }
}
