// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn temp_config(base: &std::path::Path) -> Config {
    Config {
        home: Some(base.display().to_string()),
        ..Default::default()
    }
}

#[rstest]
fn test_apply_missing_file_is_an_error() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());

    let mut cmd = CmdRecipeApply {
        file: tmp.path().join("nope.toml"),
        name: None,
        pinned: false,
        allow_scripts: false,
    };
    assert!(cmd.run(&config).is_err());
}

#[rstest]
fn test_apply_requires_a_name_somewhere() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());

    // Recipe without a name field and no --name flag.
    let recipe_file = tmp.path().join("anonymous.toml");
    std::fs::write(&recipe_file, "[recipe]\npython = \"3.11\"\n").expect("write should succeed");

    let mut cmd = CmdRecipeApply {
        file: recipe_file,
        name: None,
        pinned: false,
        allow_scripts: false,
    };
    assert!(cmd.run(&config).is_err());
}

#[rstest]
fn test_apply_refuses_existing_target() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());

    let recipe_file = tmp.path().join("taken.toml");
    std::fs::write(&recipe_file, "[recipe]\nname = \"taken\"\n").expect("write should succeed");

    // Target already exists: apply must fail without ever reaching uv, so
    // the directory contents survive untouched.
    let target = config.env_dir("taken");
    std::fs::create_dir_all(&target).expect("should create env dir");
    std::fs::write(target.join("keep.txt"), "precious").expect("write should succeed");

    let mut cmd = CmdRecipeApply {
        file: recipe_file,
        name: None,
        pinned: false,
        allow_scripts: false,
    };
    assert!(cmd.run(&config).is_err());
    assert_eq!(
        std::fs::read_to_string(target.join("keep.txt")).expect("file should survive"),
        "precious"
    );
}

#[rstest]
fn test_apply_name_flag_overrides_recipe_name() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let config = temp_config(tmp.path());

    let recipe_file = tmp.path().join("r.toml");
    std::fs::write(&recipe_file, "[recipe]\nname = \"from-recipe\"\n")
        .expect("write should succeed");

    // The flag name collides with an existing dir, proving it won.
    std::fs::create_dir_all(config.env_dir("from-flag")).expect("should create env dir");

    let mut cmd = CmdRecipeApply {
        file: recipe_file,
        name: Some("from-flag".to_string()),
        pinned: false,
        allow_scripts: false,
    };
    assert!(cmd.run(&config).is_err());
}
