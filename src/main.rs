#![forbid(unsafe_code)]
//! Droid Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use droid::commands::{
    execute_new, execute_templates, execute_versions, NewOptions, TemplatesOptions,
    VersionsOptions,
};
use droid::logging::setup_logging;

#[derive(Parser)]
#[command(name = "droid")]
#[command(about = "Generate Android Jetpack Compose projects from a bundled template")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new project
    New {
        /// Application name (also the default output directory)
        #[arg(env = "DROID_APP_NAME")]
        name: Option<String>,

        /// Package identifier, e.g. com.example.myapp
        #[arg(short, long, env = "DROID_PACKAGE")]
        package: Option<String>,

        /// Minimum SDK level (21-36)
        #[arg(long, env = "DROID_MIN_SDK")]
        min_sdk: Option<String>,

        /// JSON answers file (appName, packageName, minSdk)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output directory (default: ./<name>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use a template directory instead of the bundled template
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Overwrite the output directory if it exists
        #[arg(short, long)]
        force: bool,

        /// Show where every template entry would go, write nothing
        #[arg(long)]
        dry_run: bool,

        /// Don't write README.md
        #[arg(long)]
        no_readme: bool,

        /// Keep partially generated output when generation fails
        #[arg(long)]
        keep_partial: bool,
    },

    /// Show target build-tool versions
    Versions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template entries and their mapped destinations
    Templates {
        /// Use a template directory instead of the bundled template
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Package used to preview destinations
        #[arg(short, long, default_value = "com.example.myapp")]
        package: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::New {
            name,
            package,
            min_sdk,
            answers,
            output,
            template_dir,
            force,
            dry_run,
            no_readme,
            keep_partial,
        } => {
            let options = NewOptions {
                name,
                package,
                min_sdk,
                answers,
                output,
                template_dir,
                force,
                dry_run,
                no_readme,
                keep_partial,
            };
            execute_new(options)?;
        }

        Commands::Versions { json } => {
            execute_versions(VersionsOptions { json })?;
        }

        Commands::Templates {
            template_dir,
            package,
        } => {
            execute_templates(TemplatesOptions {
                template_dir,
                package,
            })?;
        }
    }

    Ok(())
}
