//! Property-based tests for package path mapping
//!
//! Checked over generated package identifiers against the bundled template
//! layout and a synthetic tree.

use std::collections::HashSet;

use droid::scaffold::{ANCHOR_BASE, SOURCE_PACKAGE_PATH};
use droid::{
    render, BundledTemplates, Mapping, MemoryTemplates, PathMapper, PlaceholderTable,
    RenderConfig, TemplateSource, TreeMaterializer, PLACEHOLDER_PACKAGE,
};
use proptest::prelude::*;

/// Valid package identifiers: dot-separated `[a-z][a-z0-9_]*` tokens
fn package_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..5).prop_map(|parts| parts.join("."))
}

/// Template-relative paths that never enter the anchor base
fn unanchored_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9_.-]{1,10}", 1..6)
        .prop_map(|parts| parts.join("/"))
        .prop_filter("must be a valid, unanchored path", |path| {
            !path.starts_with(ANCHOR_BASE)
                && path.split('/').all(|segment| segment != "." && segment != "..")
        })
}

fn synthetic_store() -> MemoryTemplates {
    MemoryTemplates::new()
        .with_file(
            "app/src/main/java/com/example/rockstarcompose/MainActivity.kt",
            "package {{PACKAGE_NAME}}",
        )
        .with_file(
            "app/src/main/java/com/example/rockstarcompose/data/Repository.kt",
            "package {{PACKAGE_NAME}}.data",
        )
        .with_file("app/src/main/res/values/strings.xml", "{{APP_NAME}}")
        .with_file("gradlew", "#!/bin/sh")
}

proptest! {
    /// Paths outside the anchor base map to themselves for any package
    #[test]
    fn prop_unanchored_paths_unchanged(
        path in unanchored_path(),
        package in package_name(),
    ) {
        let mapper = PathMapper::new(&package);
        prop_assert_eq!(mapper.map(&path).unwrap(), Mapping::Destination(path.clone()));
    }

    /// Files under the anchor land under the package path
    #[test]
    fn prop_anchored_files_relocated(
        package in package_name(),
        file in "[A-Z][A-Za-z]{0,10}\\.kt",
    ) {
        let mapper = PathMapper::new(&package);
        let source = format!("{}{}/{}", ANCHOR_BASE, SOURCE_PACKAGE_PATH, file);
        let expected = format!("{}{}/{}", ANCHOR_BASE, package.replace('.', "/"), file);

        prop_assert_eq!(mapper.map(&source).unwrap(), Mapping::Destination(expected));
    }

    /// Anchor ancestors are skipped exactly when the package changes
    #[test]
    fn prop_ancestors_skipped_only_for_new_package(package in package_name()) {
        let mapper = PathMapper::new(&package);
        let changed = package != PLACEHOLDER_PACKAGE;

        for ancestor in ["app/src/main/java/com", "app/src/main/java/com/example"] {
            prop_assert_eq!(mapper.map(ancestor).unwrap().is_skip(), changed);
        }
    }

    /// No two bundled entries share a destination
    #[test]
    fn prop_bundled_destinations_unique(package in package_name()) {
        let store = BundledTemplates::new();
        let config = RenderConfig::new("Mad", package, "24");
        let plan = TreeMaterializer::new(&store).plan(&config).unwrap();

        let mut seen = HashSet::new();
        for planned in &plan {
            if let Some(dest) = planned.destination() {
                prop_assert!(seen.insert(dest.to_string()), "duplicate destination {}", dest);
            }
        }

        let files = store.entries().unwrap().iter().filter(|e| !e.is_dir()).count();
        let planned_files = plan
            .iter()
            .filter(|p| !p.source.is_dir() && p.destination().is_some())
            .count();
        prop_assert_eq!(files, planned_files);
    }

    /// Materialized anchored files carry the package in path and content
    #[test]
    fn prop_materialized_sources_follow_package(package in package_name()) {
        let temp = tempfile::TempDir::new().unwrap();
        let store = synthetic_store();
        let config = RenderConfig::new("Mad", package.clone(), "24");

        TreeMaterializer::new(&store).materialize(temp.path(), &config).unwrap();

        let package_dir = temp.path()
            .join("app/src/main/java")
            .join(package.replace('.', "/"));
        let activity = std::fs::read_to_string(package_dir.join("MainActivity.kt")).unwrap();
        let repository = std::fs::read_to_string(package_dir.join("data/Repository.kt")).unwrap();

        prop_assert_eq!(activity, format!("package {}", package));
        prop_assert_eq!(repository, format!("package {}.data", package));
    }

    /// Rendering content without token delimiters is the identity
    #[test]
    fn prop_render_without_tokens_is_identity(raw in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assume!(!raw.windows(2).any(|w| w == b"{{"));
        let table = PlaceholderTable::from_config(
            &RenderConfig::default(),
            &droid::BuildVersions::CURRENT,
        ).unwrap();

        prop_assert_eq!(render(&raw, &table), raw);
    }
}
