// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond create` command.

use clap::Args;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use uvcond::Config;

/// Create a new environment
#[derive(Debug, Args)]
pub struct CmdCreate {
    /// Environment name
    pub name: String,

    /// Extra arguments passed through to `uv venv`
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl CmdCreate {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        std::fs::create_dir_all(config.base_dir()).into_diagnostic()?;

        let target = config.env_dir(&self.name);
        println!(
            "{} {} {} {}",
            "Creating".cyan(),
            self.name.green().bold(),
            "at".dimmed(),
            target.display().to_string().cyan()
        );

        let code = uvcond::uv::create_venv(&target, None, &self.extra)?;
        Ok(code)
    }
}
