// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Post-install command execution inside a freshly created environment.
//!
//! Commands run sequentially through the platform command shell with the
//! environment "activated" the cheap way: its executable directory
//! prepended to PATH and VIRTUAL_ENV pointing at the root. The caller owns
//! ordering and abort-on-failure.

use std::path::Path;
use std::process::Command;

#[cfg(test)]
#[path = "./scripts_test.rs"]
mod scripts_test;

/// Environment variable pairs that activate `env_path` for a subprocess.
///
/// `current_path` is the caller's PATH value, if any.
pub fn activation_env(env_path: &Path, current_path: Option<&str>) -> Vec<(String, String)> {
    let (bin_dir, separator) = if cfg!(windows) {
        (env_path.join("Scripts"), ';')
    } else {
        (env_path.join("bin"), ':')
    };
    let path = match current_path {
        Some(existing) => format!("{}{}{}", bin_dir.display(), separator, existing),
        None => bin_dir.display().to_string(),
    };
    vec![
        ("PATH".to_string(), path),
        ("VIRTUAL_ENV".to_string(), env_path.display().to_string()),
    ]
}

/// Run one post-install command with `env_path` activated.
///
/// The command string goes through `sh -c` (or `cmd /C`), cwd is the
/// environment directory. Returns the command's exit code.
pub fn run_command(command: &str, env_path: &Path) -> crate::Result<i32> {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    };

    let current_path = std::env::var("PATH").ok();
    for (key, value) in activation_env(env_path, current_path.as_deref()) {
        cmd.env(key, value);
    }
    cmd.current_dir(env_path);

    tracing::debug!(command, "running post-install command");
    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}

/// Load commands from a file: one per line, blanks and `#` comments skipped.
///
/// A file with no usable lines is an error; callers pass files explicitly
/// and an accidental no-op should not look like success.
pub fn commands_from_file(path: &Path) -> crate::Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|error| crate::Error::ReadFailed {
        path: path.to_path_buf(),
        error,
    })?;
    let commands = parse_command_lines(&text);
    if commands.is_empty() {
        return Err(crate::Error::EmptyCommandFile {
            path: path.to_path_buf(),
        });
    }
    Ok(commands)
}

/// Extract usable command lines from file text.
pub fn parse_command_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
