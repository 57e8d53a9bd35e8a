// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond info` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::{Config, Recipe};

/// Show information about an environment
#[derive(Debug, Args)]
pub struct CmdInfo {
    /// Environment name
    pub name: String,
}

impl CmdInfo {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = config.env_dir(&self.name);
        if !target.is_dir() {
            return Err(uvcond::Error::NoSuchEnvironment {
                name: self.name.clone(),
                path: target,
            }
            .into());
        }

        println!("{} {}", "Environment:".bold(), self.name.green().bold());
        println!(
            "{} {}",
            "Path:".dimmed(),
            target.display().to_string().cyan()
        );

        match uvcond::python_version(&target) {
            Some(version) => println!("{} {}", "Python:".dimmed(), version),
            None => println!("{} {}", "Python:".dimmed(), "(unknown)".dimmed()),
        }

        let recipe_file = uvcond::recipe_path(&target);
        if recipe_file.is_file() {
            let recipe = Recipe::load(&recipe_file)?;
            match recipe.description {
                Some(description) => {
                    println!("{}", "Description:".dimmed());
                    println!("{}", description);
                }
                None => println!("{} {}", "Description:".dimmed(), "(none)".dimmed()),
            }
        } else {
            println!(
                "{} {}",
                "Description:".dimmed(),
                "(no recipe file)".dimmed()
            );
        }

        let (_, pinned) = uvcond::installed_packages(&target);
        println!("{} {} installed", "Packages:".dimmed(), pinned.len());

        Ok(0)
    }
}
