// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond recipe` command group.

use std::path::Path;

use clap::{Args, Subcommand};
use colored::Colorize;
use miette::Result;
use uvcond::{Config, Recipe};

use crate::cmd_recipe_apply::CmdRecipeApply;
use crate::cmd_recipe_export::CmdRecipeExport;
use crate::cmd_recipe_post::CmdRecipePost;

/// Capture and replay environment recipes
#[derive(Debug, Subcommand)]
pub enum CmdRecipe {
    /// Export a recipe from an existing environment
    Export(CmdRecipeExport),

    /// Create an environment from a recipe file
    Apply(CmdRecipeApply),

    /// Show an environment's recipe
    Show(CmdRecipeShow),

    /// Set an environment's description
    Describe(CmdRecipeDescribe),

    /// Open an environment's recipe in the editor
    Edit(CmdRecipeEdit),

    /// Manage an environment's post-install commands
    Post(CmdRecipePost),
}

impl CmdRecipe {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        match self {
            CmdRecipe::Export(cmd) => cmd.run(config),
            CmdRecipe::Apply(cmd) => cmd.run(config),
            CmdRecipe::Show(cmd) => cmd.run(config),
            CmdRecipe::Describe(cmd) => cmd.run(config),
            CmdRecipe::Edit(cmd) => cmd.run(config),
            CmdRecipe::Post(cmd) => cmd.run(config),
        }
    }
}

/// Require an existing environment directory, resolving its path.
pub(crate) fn existing_env_dir(config: &Config, name: &str) -> Result<std::path::PathBuf> {
    let target = config.env_dir(name);
    if !target.is_dir() {
        return Err(uvcond::Error::NoSuchEnvironment {
            name: name.to_string(),
            path: target,
        }
        .into());
    }
    Ok(target)
}

/// Load an environment's recipe, or synthesize one from its live state.
pub(crate) fn load_or_synthesize(name: &str, env_path: &Path) -> uvcond::Result<Recipe> {
    let recipe_file = uvcond::recipe_path(env_path);
    if recipe_file.is_file() {
        Recipe::load(&recipe_file)
    } else {
        Ok(Recipe::from_environment(name, env_path))
    }
}

/// Set an environment's description, shared with the top-level `describe`.
pub(crate) fn set_description(config: &Config, name: &str, description: &str) -> Result<i32> {
    let target = existing_env_dir(config, name)?;

    let mut recipe = load_or_synthesize(name, &target)?;
    recipe.description = Some(description.to_string());
    recipe.save(&uvcond::recipe_path(&target))?;

    println!("{} for {}", "Set description".green(), name.green().bold());
    Ok(0)
}

/// Show an environment's recipe
#[derive(Debug, Args)]
pub struct CmdRecipeShow {
    /// Environment name
    pub name: String,
}

impl CmdRecipeShow {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = existing_env_dir(config, &self.name)?;

        let recipe_file = uvcond::recipe_path(&target);
        if !recipe_file.is_file() {
            println!(
                "{} {} {}",
                "Env".dimmed(),
                self.name.green().bold(),
                format!(
                    "has no recipe (use 'uvcond recipe export {}' to create one)",
                    self.name
                )
                .dimmed()
            );
            return Ok(0);
        }

        let recipe = Recipe::load(&recipe_file)?;

        println!("{} {}", "Recipe for:".bold(), self.name.green().bold());
        println!(
            "{} {}",
            "Path:".dimmed(),
            recipe_file.display().to_string().cyan()
        );
        println!();

        if let Some(description) = &recipe.description {
            println!("{}", "Description:".bold());
            println!("{}", description);
            println!();
        }

        println!("{}", "Full recipe:".bold());
        let text =
            std::fs::read_to_string(&recipe_file).map_err(|error| uvcond::Error::ReadFailed {
                path: recipe_file.clone(),
                error,
            })?;
        println!("{}", text);
        Ok(0)
    }
}

/// Set an environment's description
#[derive(Debug, Args)]
pub struct CmdRecipeDescribe {
    /// Environment name
    pub name: String,

    /// Description text
    #[clap(required = true)]
    pub text: Vec<String>,
}

impl CmdRecipeDescribe {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        set_description(config, &self.name, &self.text.join(" "))
    }
}

/// Open an environment's recipe in the editor
#[derive(Debug, Args)]
pub struct CmdRecipeEdit {
    /// Environment name
    pub name: String,
}

impl CmdRecipeEdit {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = existing_env_dir(config, &self.name)?;

        let recipe_file = uvcond::recipe_path(&target);
        if !recipe_file.is_file() {
            println!(
                "{} {}",
                "No recipe found,".cyan(),
                "exporting current env state...".dimmed()
            );
            let mut export = CmdRecipeExport {
                name: self.name.clone(),
                output: None,
            };
            let code = export.run(config)?;
            if code != 0 {
                return Ok(code);
            }
        }

        println!(
            "{} {} {}",
            "Opening".cyan(),
            recipe_file.display().to_string().cyan(),
            format!("in {}", config.editor()).dimmed()
        );
        let code = uvcond::editor::open(config, &recipe_file)?;
        Ok(code)
    }
}
