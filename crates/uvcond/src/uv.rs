// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Blocking wrappers around the external `uv` tool.
//!
//! uvcond never resolves or installs packages itself; these three entry
//! points are the entire surface it needs from uv. Exit codes come back
//! unchanged so the CLI can propagate them.

use std::path::Path;
use std::process::Command;

/// Name of the delegated tool, resolved on PATH.
const UV: &str = "uv";

/// Create a virtual environment at `target` via `uv venv`.
///
/// `extra_args` are passed through verbatim (e.g. `--seed`); `python` adds
/// a `--python <version>` pin.
pub fn create_venv(
    target: &Path,
    python: Option<&str>,
    extra_args: &[String],
) -> crate::Result<i32> {
    let mut cmd = Command::new(UV);
    cmd.arg("venv").arg(target);
    if let Some(python) = python {
        cmd.arg("--python").arg(python);
    }
    cmd.args(extra_args);
    run(cmd)
}

/// Install requirement specifiers into the env owning `python`.
pub fn pip_install(python: &Path, specs: &[String]) -> crate::Result<i32> {
    let mut cmd = Command::new(UV);
    cmd.args(["pip", "install", "--python"]).arg(python).args(specs);
    run(cmd)
}

/// Capture `uv pip freeze` output for the env owning `python`.
///
/// Returns None when uv cannot be spawned or exits non-zero; callers treat
/// that as "no packages" rather than an error.
pub fn pip_freeze(python: &Path) -> Option<String> {
    let output = Command::new(UV)
        .args(["pip", "freeze", "--python"])
        .arg(python)
        .output();
    let output = match output {
        Ok(output) => output,
        Err(error) => {
            tracing::debug!(%error, "failed to spawn uv pip freeze");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(code = ?output.status.code(), "uv pip freeze failed");
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run(mut cmd: Command) -> crate::Result<i32> {
    tracing::debug!(?cmd, "delegating to uv");
    let status = cmd
        .status()
        .map_err(|error| crate::Error::UvLaunchFailed { error })?;
    Ok(status.code().unwrap_or(1))
}
