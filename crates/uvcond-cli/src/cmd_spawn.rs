// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond spawn` command.

use clap::Args;
use miette::Result;
use uvcond::Config;

/// Spawn a shell with an environment activated
#[derive(Debug, Args)]
pub struct CmdSpawn {
    /// Environment name
    pub name: String,

    /// Shell to use (default: configured shell, then platform default)
    pub shell: Option<String>,
}

impl CmdSpawn {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = config.env_dir(&self.name);
        if !target.is_dir() {
            return Err(uvcond::Error::NoSuchEnvironment {
                name: self.name.clone(),
                path: target,
            }
            .into());
        }

        let code = uvcond::shell::spawn(&target, &self.name, self.shell.as_deref(), config)?;
        Ok(code)
    }
}
