//! @acp:module "Path Mapper"
//! @acp:summary "Maps template-relative paths to destination paths for a target package"
//! @acp:domain cli
//! @acp:layer service
//!
//! Source files in the template live under a placeholder package directory
//! (the anchor). Mapping swaps that directory for the user's package path
//! and drops the anchor's own ancestor directories when the package
//! changes, so the generated project has no empty `com/example` leftovers.
//!
//! Pure string logic; nothing here touches the filesystem.

use crate::config::PLACEHOLDER_PACKAGE;
use crate::error::{DroidError, Result};

/// Prefix under which package-structured sources live
pub const ANCHOR_BASE: &str = "app/src/main/java/";

/// Placeholder package directory inside [`ANCHOR_BASE`]
pub const SOURCE_PACKAGE_PATH: &str = "com/example/rockstarcompose";

/// Outcome of mapping one template entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapping {
    /// Slash-separated destination, relative to the output directory
    Destination(String),
    /// No filesystem entry is created for this template entry
    Skip,
}

impl Mapping {
    pub fn destination(&self) -> Option<&str> {
        match self {
            Mapping::Destination(path) => Some(path),
            Mapping::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Mapping::Skip)
    }
}

/// @acp:summary "Rewrites anchored template paths for one target package"
#[derive(Debug, Clone)]
pub struct PathMapper {
    anchor_base: String,
    anchor: String,
    target_path: String,
    package_changed: bool,
}

impl PathMapper {
    /// Mapper for the bundled template layout
    pub fn new(package_name: &str) -> Self {
        Self::with_anchor(ANCHOR_BASE, SOURCE_PACKAGE_PATH, PLACEHOLDER_PACKAGE, package_name)
    }

    /// Mapper for a custom anchor layout.
    ///
    /// `anchor_base` is treated as a directory prefix whether or not it ends in `/`.
    pub fn with_anchor(
        anchor_base: &str,
        anchor: &str,
        placeholder_package: &str,
        package_name: &str,
    ) -> Self {
        let anchor_base = if anchor_base.ends_with('/') {
            anchor_base.to_string()
        } else {
            format!("{}/", anchor_base)
        };

        Self {
            anchor_base,
            anchor: anchor.trim_matches('/').to_string(),
            target_path: package_name.replace('.', "/"),
            package_changed: package_name != placeholder_package,
        }
    }

    /// Map a template-relative path to its destination
    pub fn map(&self, path: &str) -> Result<Mapping> {
        validate_template_path(path)?;

        let Some(remainder) = path.strip_prefix(&self.anchor_base) else {
            return Ok(Mapping::Destination(path.to_string()));
        };

        if let Some(idx) = path.find(&self.anchor) {
            let prefix = &path[..idx];
            let suffix = &path[idx + self.anchor.len()..];
            return Ok(Mapping::Destination(format!(
                "{}{}{}",
                prefix, self.target_path, suffix
            )));
        }

        if self.package_changed && self.is_anchor_ancestor(remainder) {
            return Ok(Mapping::Skip);
        }

        Ok(Mapping::Destination(path.to_string()))
    }

    /// True when `remainder` names a directory strictly above the anchor
    fn is_anchor_ancestor(&self, remainder: &str) -> bool {
        self.anchor
            .strip_prefix(remainder)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Reject paths that are empty, absolute, or step outside the template root
pub fn validate_template_path(path: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(DroidError::InvalidTemplatePath {
            path: path.to_string(),
            reason: reason.to_string(),
        })
    };

    if path.is_empty() {
        return invalid("path is empty");
    }
    if path.starts_with('/') {
        return invalid("path is absolute");
    }
    if path.contains('\\') {
        return invalid("path must use '/' separators");
    }
    for segment in path.split('/') {
        match segment {
            "" => return invalid("path has an empty segment"),
            "." | ".." => return invalid("path has a relative segment"),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(path: &str) -> Mapping {
        Mapping::Destination(path.to_string())
    }

    #[test]
    fn test_paths_outside_anchor_base_unchanged() {
        let mapper = PathMapper::new("org.foo.bar");

        assert_eq!(mapper.map("gradlew").unwrap(), dest("gradlew"));
        assert_eq!(
            mapper.map("app/src/main/res/values/strings.xml").unwrap(),
            dest("app/src/main/res/values/strings.xml")
        );
        assert_eq!(
            mapper.map("app/src/main/java").unwrap(),
            dest("app/src/main/java")
        );
    }

    #[test]
    fn test_anchor_is_replaced() {
        let mapper = PathMapper::new("com.example.myapp");

        assert_eq!(
            mapper
                .map("app/src/main/java/com/example/rockstarcompose/MainActivity.kt")
                .unwrap(),
            dest("app/src/main/java/com/example/myapp/MainActivity.kt")
        );
        assert_eq!(
            mapper
                .map("app/src/main/java/com/example/rockstarcompose")
                .unwrap(),
            dest("app/src/main/java/com/example/myapp")
        );
        assert_eq!(
            mapper
                .map("app/src/main/java/com/example/rockstarcompose/ui/theme/Theme.kt")
                .unwrap(),
            dest("app/src/main/java/com/example/myapp/ui/theme/Theme.kt")
        );
    }

    #[test]
    fn test_ancestors_skipped_when_package_changes() {
        let mapper = PathMapper::new("org.foo.bar");

        assert_eq!(mapper.map("app/src/main/java/com").unwrap(), Mapping::Skip);
        assert_eq!(
            mapper.map("app/src/main/java/com/example").unwrap(),
            Mapping::Skip
        );
    }

    #[test]
    fn test_ancestors_kept_for_placeholder_package() {
        let mapper = PathMapper::new(PLACEHOLDER_PACKAGE);

        assert_eq!(
            mapper.map("app/src/main/java/com").unwrap(),
            dest("app/src/main/java/com")
        );
        assert_eq!(
            mapper.map("app/src/main/java/com/example").unwrap(),
            dest("app/src/main/java/com/example")
        );
    }

    #[test]
    fn test_non_ancestor_siblings_pass_through() {
        let mapper = PathMapper::new("org.foo.bar");

        // Shares a string prefix with "com" but not a path segment
        assert_eq!(
            mapper.map("app/src/main/java/co").unwrap(),
            dest("app/src/main/java/co")
        );
        assert_eq!(
            mapper.map("app/src/main/java/com/example/Util.kt").unwrap(),
            dest("app/src/main/java/com/example/Util.kt")
        );
        assert_eq!(
            mapper.map("app/src/main/java/net").unwrap(),
            dest("app/src/main/java/net")
        );
    }

    #[test]
    fn test_deeper_anchor_ancestors_computed_generically() {
        let mapper = PathMapper::with_anchor(
            "app/src/main/kotlin",
            "io/acme/labs/template",
            "io.acme.labs.template",
            "dev.me",
        );

        assert_eq!(mapper.map("app/src/main/kotlin/io").unwrap(), Mapping::Skip);
        assert_eq!(
            mapper.map("app/src/main/kotlin/io/acme/labs").unwrap(),
            Mapping::Skip
        );
        assert_eq!(
            mapper
                .map("app/src/main/kotlin/io/acme/labs/template/App.kt")
                .unwrap(),
            dest("app/src/main/kotlin/dev/me/App.kt")
        );
    }

    #[test]
    fn test_invalid_paths_rejected() {
        let mapper = PathMapper::new("com.example.myapp");

        for path in ["", "/etc/passwd", "app/../secret", "app//src", "app/", "./app", "app\\src"] {
            assert!(
                matches!(mapper.map(path), Err(DroidError::InvalidTemplatePath { .. })),
                "expected {:?} to be rejected",
                path
            );
        }
    }
}
