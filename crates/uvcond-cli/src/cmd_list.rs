// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond list` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::Config;

/// List all environments
#[derive(Debug, Args)]
pub struct CmdList {}

impl CmdList {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let envs = uvcond::env::environments(&config.base_dir())?;
        if envs.is_empty() {
            println!("{}", "No environments yet.".dimmed());
            return Ok(0);
        }

        for env in envs {
            if env.has_recipe {
                println!("{} {}", env.name.green().bold(), "[recipe]".dimmed());
            } else {
                println!("{}", env.name.green().bold());
            }
        }
        Ok(0)
    }
}
