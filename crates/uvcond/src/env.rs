// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Introspection of created environments.
//!
//! Environments are plain venv directories made by `uv venv`; everything
//! here reads their on-disk layout (interpreter, pyvenv.cfg) or asks uv
//! about them. Nothing in this module mutates an environment.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./env_test.rs"]
mod env_test;

/// A named environment found under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDir {
    pub name: String,
    pub path: PathBuf,
    pub has_recipe: bool,
}

/// List environments under the base directory, sorted by name.
///
/// A missing base directory is an empty listing, not an error. The config
/// file (and any other plain files) are skipped.
pub fn environments(base: &Path) -> crate::Result<Vec<EnvDir>> {
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut envs = Vec::new();
    for entry in std::fs::read_dir(base)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !path.is_dir() || name == crate::CONFIG_FILENAME {
            continue;
        }
        let has_recipe = crate::recipe_path(&path).is_file();
        envs.push(EnvDir {
            name,
            path,
            has_recipe,
        });
    }
    envs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(envs)
}

/// Path to an environment's Python interpreter, if present.
pub fn python_executable(env_path: &Path) -> Option<PathBuf> {
    let python = if cfg!(windows) {
        env_path.join("Scripts").join("python.exe")
    } else {
        env_path.join("bin").join("python")
    };
    python.is_file().then_some(python)
}

/// Python version (`major.minor`) from an environment's pyvenv.cfg.
///
/// Matches both `version = 3.11.5` and `version_info = 3.11.5.final.0`.
pub fn python_version(env_path: &Path) -> Option<String> {
    let cfg = env_path.join("pyvenv.cfg");
    let text = std::fs::read_to_string(&cfg).ok()?;
    for line in text.lines() {
        if !line.trim_start().starts_with("version") {
            continue;
        }
        let Some((_, value)) = line.split_once('=') else {
            continue;
        };
        let mut parts = value.trim().split('.');
        if let (Some(major), Some(minor)) = (parts.next(), parts.next()) {
            return Some(format!("{}.{}", major, minor));
        }
    }
    None
}

/// Installed packages from `uv pip freeze`, as (unpinned names, pinned
/// specifiers).
///
/// A missing interpreter or a failed freeze yields two empty lists.
pub fn installed_packages(env_path: &Path) -> (Vec<String>, Vec<String>) {
    let Some(python) = python_executable(env_path) else {
        return (Vec::new(), Vec::new());
    };
    match crate::uv::pip_freeze(&python) {
        Some(output) => partition_freeze_output(&output),
        None => (Vec::new(), Vec::new()),
    }
}

/// Partition freeze output lines into (unpinned names, pinned specifiers).
///
/// Comment and editable (`-e`) lines are skipped.
pub fn partition_freeze_output(output: &str) -> (Vec<String>, Vec<String>) {
    let mut unpinned = Vec::new();
    let mut pinned = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("-e") {
            continue;
        }
        pinned.push(line.to_string());
        unpinned.push(package_name(line).to_string());
    }
    (unpinned, pinned)
}

/// Bare package name from a requirement specifier.
///
/// The name ends at the first version or extras delimiter.
pub fn package_name(spec: &str) -> &str {
    const DELIMITERS: &[&str] = &["==", ">=", "<=", ">", "<", "[", "~="];
    let end = DELIMITERS
        .iter()
        .filter_map(|delim| spec.find(delim))
        .min()
        .unwrap_or(spec.len());
    spec[..end].trim()
}
