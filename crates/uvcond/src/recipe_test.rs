// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn sample_recipe() -> Recipe {
    Recipe {
        name: Some("foo".to_string()),
        python: Some("3.11".to_string()),
        description: None,
        deps: Deps {
            packages: vec!["a".to_string(), "b".to_string()],
            pinned: vec!["a==1.0".to_string(), "b==2.0".to_string()],
        },
        post_install: PostInstall {
            commands: vec!["echo hi".to_string()],
        },
    }
}

#[rstest]
fn test_round_trip() {
    let recipe = sample_recipe();
    let text = recipe.to_toml_string();
    let parsed = Recipe::from_toml_str(&text).expect("written recipe should parse");
    assert_eq!(parsed, recipe);
}

#[rstest]
fn test_parse_recipe_table() {
    let text = r#"
[recipe]
name = "web"
python = "3.12"
description = "API sandbox"

[recipe.deps]
packages = ["flask"]
pinned = ["flask==3.0.2"]

[recipe.post_install]
commands = ["flask --version"]
"#;
    let recipe = Recipe::from_toml_str(text).expect("should parse full recipe");
    assert_eq!(recipe.name.as_deref(), Some("web"));
    assert_eq!(recipe.python.as_deref(), Some("3.12"));
    assert_eq!(recipe.description.as_deref(), Some("API sandbox"));
    assert_eq!(recipe.deps.packages, vec!["flask"]);
    assert_eq!(recipe.deps.pinned, vec!["flask==3.0.2"]);
    assert_eq!(recipe.post_install.commands, vec!["flask --version"]);
}

#[rstest]
fn test_parse_top_level_keys_for_compat() {
    // Early recipes had no [recipe] table.
    let text = r#"
name = "legacy"
python = "3.9"

[deps]
packages = ["requests"]
"#;
    let recipe = Recipe::from_toml_str(text).expect("should parse legacy layout");
    assert_eq!(recipe.name.as_deref(), Some("legacy"));
    assert_eq!(recipe.python.as_deref(), Some("3.9"));
    assert_eq!(recipe.deps.packages, vec!["requests"]);
}

#[rstest]
fn test_parse_minimal_recipe() {
    let recipe = Recipe::from_toml_str("[recipe]\nname = \"bare\"\n").expect("should parse");
    assert_eq!(recipe.name.as_deref(), Some("bare"));
    assert!(recipe.python.is_none());
    assert!(recipe.deps.is_empty());
    assert!(recipe.post_install.commands.is_empty());
}

#[rstest]
fn test_parse_invalid_toml() {
    let result = Recipe::from_toml_str("[recipe\nname = ");
    assert!(matches!(result, Err(crate::Error::InvalidToml { .. })));
}

#[rstest]
fn test_load_missing_file() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let result = Recipe::load(&tmp.path().join("recipe.toml"));
    assert!(matches!(result, Err(crate::Error::ReadFailed { .. })));
}

#[rstest]
fn test_unknown_keys_are_dropped_on_rewrite() {
    let text = "[recipe]\nname = \"x\"\nfuture_key = \"kept?\"\n";
    let recipe = Recipe::from_toml_str(text).expect("unknown keys should not fail parsing");
    assert!(!recipe.to_toml_string().contains("future_key"));
}

#[rstest]
fn test_absent_fields_are_omitted() {
    let recipe = Recipe {
        name: Some("bare".to_string()),
        ..Default::default()
    };
    let text = recipe.to_toml_string();
    assert!(text.starts_with("[recipe]\n"));
    assert!(!text.contains("python ="));
    assert!(!text.contains("description ="));
    assert!(!text.contains("[recipe.deps]"));
    assert!(!text.contains("[recipe.post_install]"));
}

#[rstest]
fn test_multiline_description_round_trips() {
    let mut recipe = sample_recipe();
    recipe.description = Some("line one\nline two".to_string());
    let text = recipe.to_toml_string();
    assert!(text.contains("description = \"\"\""));
    let parsed = Recipe::from_toml_str(&text).expect("multi-line string should parse");
    // The """ form adds a leading newline that TOML trims on read.
    assert_eq!(parsed.description.as_deref(), Some("line one\nline two\n"));
}

#[rstest]
fn test_long_package_list_spans_lines() {
    let mut recipe = sample_recipe();
    recipe.deps.packages = (0..10).map(|i| format!("dependency-name-{}", i)).collect();
    let text = recipe.to_toml_string();
    assert!(text.contains("packages = [\n"));
    let parsed = Recipe::from_toml_str(&text).expect("should parse multi-line list");
    assert_eq!(parsed.deps.packages, recipe.deps.packages);
}

#[rstest]
fn test_append_commands() {
    let mut recipe = Recipe::default();
    recipe.set_commands(vec!["x".to_string()]);
    recipe.append_commands(vec!["y".to_string()]);
    assert_eq!(recipe.post_install.commands, vec!["x", "y"]);
}

#[rstest]
fn test_set_commands_replaces() {
    let mut recipe = Recipe::default();
    recipe.set_commands(vec!["x".to_string()]);
    recipe.set_commands(vec!["y".to_string()]);
    assert_eq!(recipe.post_install.commands, vec!["y"]);
}

#[rstest]
fn test_from_environment_without_interpreter() {
    // A bare directory has no pyvenv.cfg and no interpreter; the synthesized
    // recipe still carries the name.
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let recipe = Recipe::from_environment("empty", tmp.path());
    assert_eq!(recipe.name.as_deref(), Some("empty"));
    assert!(recipe.python.is_none());
    assert!(recipe.deps.is_empty());
}

#[rstest]
fn test_save_writes_parseable_file() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let path = tmp.path().join("recipe.toml");
    let recipe = sample_recipe();
    recipe.save(&path).expect("save should succeed");
    let loaded = Recipe::load(&path).expect("saved recipe should load");
    assert_eq!(loaded, recipe);
}
