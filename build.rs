//! Build script for the bundled project template.
//!
//! The template tree under `templates/` is embedded at compile time, so the
//! crate must be rebuilt whenever a template file changes. The wrapper
//! launcher is also checked here: shipping a template without it produces
//! projects that cannot build.

use std::path::Path;

fn main() {
    let template_root = Path::new("templates");

    if !template_root.join("gradlew").is_file() {
        panic!(
            "Bundled template is missing its wrapper launcher: {:?}",
            template_root.join("gradlew")
        );
    }

    println!("cargo:rerun-if-changed=templates");
}
