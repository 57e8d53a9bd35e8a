// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Launching the user's editor on recipe and config files.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::Config;

/// Open a file in the configured editor and wait for it to exit.
///
/// The configured value may be a bare name resolved on PATH or a full path
/// to the executable. Returns the editor's exit code.
pub fn open(config: &Config, file: &Path) -> crate::Result<i32> {
    let editor = config.editor();
    let program = which::which(&editor).unwrap_or_else(|_| PathBuf::from(&editor));

    tracing::debug!(editor = %program.display(), file = %file.display(), "opening editor");
    let status = Command::new(&program)
        .arg(file)
        .status()
        .map_err(|_| crate::Error::EditorNotFound { editor })?;
    Ok(status.code().unwrap_or(1))
}
