// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use uvcond::Recipe;

use super::*;

fn temp_config(base: &std::path::Path) -> Config {
    Config {
        home: Some(base.display().to_string()),
        ..Default::default()
    }
}

/// Environment dir with a recipe whose command list is ["x"].
fn env_with_recipe(config: &Config, name: &str) -> std::path::PathBuf {
    let target = config.env_dir(name);
    std::fs::create_dir_all(&target).expect("should create env dir");
    std::fs::write(
        uvcond::recipe_path(&target),
        "[recipe]\nname = \"demo\"\n\n[recipe.post_install]\ncommands = [\"x\"]\n",
    )
    .expect("write should succeed");
    target
}

#[rstest]
fn test_add_appends_to_existing_commands() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());
    let target = env_with_recipe(&config, "demo");

    let mut cmd = CmdRecipePost {
        name: "demo".to_string(),
        add: vec!["y".to_string()],
        set: vec![],
        from: None,
    };
    assert_eq!(cmd.run(&config).expect("post --add should succeed"), 0);

    let recipe = Recipe::load(&uvcond::recipe_path(&target)).expect("recipe should reload");
    assert_eq!(recipe.post_install.commands, vec!["x", "y"]);
}

#[rstest]
fn test_set_replaces_existing_commands() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());
    let target = env_with_recipe(&config, "demo");

    let mut cmd = CmdRecipePost {
        name: "demo".to_string(),
        add: vec![],
        set: vec!["y".to_string()],
        from: None,
    };
    assert_eq!(cmd.run(&config).expect("post --set should succeed"), 0);

    let recipe = Recipe::load(&uvcond::recipe_path(&target)).expect("recipe should reload");
    assert_eq!(recipe.post_install.commands, vec!["y"]);
}

#[rstest]
fn test_from_file_appends_commands() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());
    let target = env_with_recipe(&config, "demo");

    let commands_file = tmp.path().join("post.txt");
    std::fs::write(&commands_file, "# comment\necho a\necho b\n").expect("write should succeed");

    let mut cmd = CmdRecipePost {
        name: "demo".to_string(),
        add: vec![],
        set: vec![],
        from: Some(commands_file),
    };
    assert_eq!(cmd.run(&config).expect("post --from should succeed"), 0);

    let recipe = Recipe::load(&uvcond::recipe_path(&target)).expect("recipe should reload");
    assert_eq!(recipe.post_install.commands, vec!["x", "echo a", "echo b"]);
}

#[rstest]
fn test_no_commands_is_an_error() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());
    env_with_recipe(&config, "demo");

    let mut cmd = CmdRecipePost {
        name: "demo".to_string(),
        add: vec![],
        set: vec![],
        from: None,
    };
    assert!(cmd.run(&config).is_err());
}

#[rstest]
fn test_synthesizes_recipe_when_none_exists() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());
    let target = config.env_dir("fresh");
    std::fs::create_dir_all(&target).expect("should create env dir");

    let mut cmd = CmdRecipePost {
        name: "fresh".to_string(),
        add: vec!["echo hi".to_string()],
        set: vec![],
        from: None,
    };
    assert_eq!(cmd.run(&config).expect("post should succeed"), 0);

    let recipe = Recipe::load(&uvcond::recipe_path(&target)).expect("recipe should exist now");
    assert_eq!(recipe.name.as_deref(), Some("fresh"));
    assert_eq!(recipe.post_install.commands, vec!["echo hi"]);
}
