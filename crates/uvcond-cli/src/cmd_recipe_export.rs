// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond recipe export` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;
use uvcond::{Config, Deps, Recipe};

/// Export a recipe from an existing environment
#[derive(Debug, Args)]
pub struct CmdRecipeExport {
    /// Environment name
    pub name: String,

    /// Write the recipe to FILE instead of into the environment
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl CmdRecipeExport {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = crate::cmd_recipe::existing_env_dir(config, &self.name)?;

        let python = uvcond::python_version(&target).ok_or_else(|| {
            uvcond::Error::MissingPythonVersion {
                name: self.name.clone(),
            }
        })?;

        let (packages, pinned) = uvcond::installed_packages(&target);

        let mut recipe = Recipe {
            name: Some(self.name.clone()),
            python: Some(python),
            description: None,
            deps: Deps { packages, pinned },
            post_install: Default::default(),
        };

        // A re-export keeps the post-install commands from the previous
        // recipe; a recipe that no longer parses is just skipped.
        let default_path = uvcond::recipe_path(&target);
        if let Ok(existing) = Recipe::load(&default_path) {
            if !existing.post_install.commands.is_empty() {
                recipe.post_install = existing.post_install;
            }
        }

        let out_path = self.output.clone().unwrap_or(default_path);
        recipe.save(&out_path)?;

        println!(
            "{} recipe to {}",
            "Exported".green(),
            out_path.display().to_string().cyan()
        );
        Ok(0)
    }
}
