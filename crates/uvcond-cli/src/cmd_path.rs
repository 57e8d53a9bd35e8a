// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond path` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::Config;

/// Print an environment's path
#[derive(Debug, Args)]
pub struct CmdPath {
    /// Environment name (the environment need not exist)
    pub name: String,
}

impl CmdPath {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        println!(
            "{}",
            config.env_dir(&self.name).display().to_string().cyan()
        );
        Ok(0)
    }
}
