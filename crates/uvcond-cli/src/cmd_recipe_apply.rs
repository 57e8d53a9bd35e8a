// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond recipe apply` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::{Config, Recipe};

#[cfg(test)]
#[path = "./cmd_recipe_apply_test.rs"]
mod cmd_recipe_apply_test;

/// Create an environment from a recipe file
#[derive(Debug, Args)]
pub struct CmdRecipeApply {
    /// Recipe file to apply
    pub file: PathBuf,

    /// Environment name (default: the recipe's own name field)
    #[clap(short, long)]
    pub name: Option<String>,

    /// Install the pinned specifier list for exact reproducibility
    #[clap(long)]
    pub pinned: bool,

    /// Run the recipe's post-install commands
    #[clap(long)]
    pub allow_scripts: bool,
}

impl CmdRecipeApply {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        if !self.file.is_file() {
            return Err(uvcond::Error::RecipeNotFound {
                path: self.file.clone(),
            }
            .into());
        }
        let recipe = Recipe::load(&self.file)?;

        let env_name = self
            .name
            .clone()
            .or_else(|| recipe.name.clone())
            .ok_or(uvcond::Error::RecipeMissingName)?;

        // Checked before anything is spawned; apply never overwrites.
        let target = config.env_dir(&env_name);
        if target.exists() {
            return Err(uvcond::Error::EnvironmentExists {
                name: env_name,
                path: target,
            }
            .into());
        }

        println!(
            "{} env {} from recipe...",
            "Creating".cyan(),
            env_name.green().bold()
        );
        let code = uvcond::uv::create_venv(&target, recipe.python.as_deref(), &[])?;
        if code != 0 {
            eprintln!("{}: failed to create venv", "error".red().bold());
            return Ok(code);
        }

        let (to_install, label): (&[String], &str) = if self.pinned
            && !recipe.deps.pinned.is_empty()
        {
            (&recipe.deps.pinned, "pinned packages")
        } else if !recipe.deps.packages.is_empty() {
            (&recipe.deps.packages, "packages")
        } else {
            (&[], "")
        };

        if !to_install.is_empty() {
            println!(
                "{} {} {}...",
                "Installing".cyan(),
                to_install.len(),
                label
            );
            let python = uvcond::python_executable(&target).ok_or_else(|| {
                uvcond::Error::PythonNotFound {
                    path: target.clone(),
                }
            })?;
            let code = uvcond::uv::pip_install(&python, to_install)?;
            if code != 0 {
                eprintln!("{}: failed to install packages", "error".red().bold());
                return Ok(code);
            }
        }

        let commands = &recipe.post_install.commands;
        if !commands.is_empty() && !self.allow_scripts {
            println!(
                "{} {} post-install command(s) {}",
                "Skipped".yellow(),
                commands.len(),
                "(use --allow-scripts to run)".dimmed()
            );
        } else if !commands.is_empty() {
            println!(
                "{} {} post-install command(s)...",
                "Running".cyan(),
                commands.len()
            );
            for (i, command) in commands.iter().enumerate() {
                println!(
                    "  {} {}",
                    format!("({}/{})", i + 1, commands.len()).dimmed(),
                    command
                );
                let code = uvcond::scripts::run_command(command, &target)?;
                if code != 0 {
                    eprintln!(
                        "{}: post-install command failed with exit code {}",
                        "error".red().bold(),
                        code
                    );
                    return Ok(code);
                }
            }
        }

        // The recipe travels with the environment it built.
        recipe.save(&uvcond::recipe_path(&target))?;
        println!(
            "{} {} at {}",
            "Created".green(),
            env_name.green().bold(),
            target.display().to_string().cyan()
        );
        Ok(0)
    }
}
