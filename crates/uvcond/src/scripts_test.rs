// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use std::path::Path;

use super::*;

#[rstest]
fn test_activation_env_prepends_path() {
    let env_path = Path::new("/srv/envs/demo");
    let vars = activation_env(env_path, Some("/usr/bin:/bin"));

    let path = &vars[0];
    assert_eq!(path.0, "PATH");
    if cfg!(windows) {
        assert!(path.1.starts_with("/srv/envs/demo/Scripts;"));
    } else {
        assert_eq!(path.1, "/srv/envs/demo/bin:/usr/bin:/bin");
    }

    let virtual_env = &vars[1];
    assert_eq!(virtual_env.0, "VIRTUAL_ENV");
    assert_eq!(virtual_env.1, "/srv/envs/demo");
}

#[rstest]
fn test_activation_env_without_existing_path() {
    let vars = activation_env(Path::new("/srv/envs/demo"), None);
    if !cfg!(windows) {
        assert_eq!(vars[0].1, "/srv/envs/demo/bin");
    }
}

#[rstest]
fn test_parse_command_lines_filters_noise() {
    let text = "\
# setup steps
echo one

   echo two
  # not this one
";
    assert_eq!(parse_command_lines(text), vec!["echo one", "echo two"]);
}

#[rstest]
fn test_commands_from_file() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let path = tmp.path().join("post.txt");
    std::fs::write(&path, "echo hi\n# comment\n").expect("write should succeed");
    let commands = commands_from_file(&path).expect("file has one command");
    assert_eq!(commands, vec!["echo hi"]);
}

#[rstest]
fn test_commands_from_file_rejects_empty() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let path = tmp.path().join("post.txt");
    std::fs::write(&path, "# nothing but comments\n\n").expect("write should succeed");
    let result = commands_from_file(&path);
    assert!(matches!(result, Err(crate::Error::EmptyCommandFile { .. })));
}

#[rstest]
fn test_commands_from_missing_file() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let result = commands_from_file(&tmp.path().join("nope.txt"));
    assert!(matches!(result, Err(crate::Error::ReadFailed { .. })));
}

#[cfg(unix)]
#[rstest]
fn test_run_command_reports_exit_code() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    assert_eq!(run_command("true", tmp.path()).expect("should run"), 0);
    assert_eq!(run_command("exit 3", tmp.path()).expect("should run"), 3);
}

#[cfg(unix)]
#[rstest]
fn test_run_command_sets_virtual_env() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let check = format!("test \"$VIRTUAL_ENV\" = \"{}\"", tmp.path().display());
    let code = run_command(&check, tmp.path()).expect("should run");
    assert_eq!(code, 0);
}
