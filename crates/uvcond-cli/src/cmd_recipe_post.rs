// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond recipe post` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::Config;

#[cfg(test)]
#[path = "./cmd_recipe_post_test.rs"]
mod cmd_recipe_post_test;

/// Manage an environment's post-install commands
#[derive(Debug, Args)]
pub struct CmdRecipePost {
    /// Environment name
    pub name: String,

    /// Append a command
    #[clap(long = "add", value_name = "CMD")]
    pub add: Vec<String>,

    /// Replace all commands
    #[clap(long = "set", value_name = "CMD")]
    pub set: Vec<String>,

    /// Load additional commands from a file (one per line, # comments)
    #[clap(long = "from", value_name = "FILE")]
    pub from: Option<PathBuf>,
}

impl CmdRecipePost {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = crate::cmd_recipe::existing_env_dir(config, &self.name)?;

        // Any --set switches the whole update to replace mode.
        let replace = !self.set.is_empty();
        let mut commands: Vec<String> =
            self.set.iter().chain(self.add.iter()).cloned().collect();
        if let Some(from) = &self.from {
            commands.extend(uvcond::scripts::commands_from_file(from)?);
        }
        if commands.is_empty() {
            return Err(uvcond::Error::NoCommands.into());
        }

        let mut recipe = crate::cmd_recipe::load_or_synthesize(&self.name, &target)?;
        if replace {
            recipe.set_commands(commands);
        } else {
            recipe.append_commands(commands);
        }
        recipe.save(&uvcond::recipe_path(&target))?;

        println!(
            "{} post-install commands for {}",
            "Updated".green(),
            self.name.green().bold()
        );
        Ok(0)
    }
}
