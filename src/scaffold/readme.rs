//! @acp:module "Project README"
//! @acp:summary "README written into every generated project"
//! @acp:domain cli
//! @acp:layer output

use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::error::{DroidError, Result};

/// README contents for a generated project
pub fn readme_contents(config: &RenderConfig) -> String {
    format!(
        r#"# {app}

Generated by droid-cli.

## To build this project

1. Make sure you have the Android SDK installed.
2. Then, set ANDROID_HOME to the path you installed SDK on.
3. Run:
   ./gradlew build
4. adb shell am start -n {package}/.MainActivity
   or
   adb shell monkey -p {package} -c android.intent.category.LAUNCHER 1
"#,
        app = config.app_name,
        package = config.package_name,
    )
}

/// Write `README.md` into `output_dir`, replacing any template copy
pub fn write_readme(output_dir: &Path, config: &RenderConfig) -> Result<PathBuf> {
    let path = output_dir.join("README.md");
    std::fs::write(&path, readme_contents(config)).map_err(|source| DroidError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
