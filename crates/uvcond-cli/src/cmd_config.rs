// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond config` command group.

use clap::{Args, Subcommand};
use colored::Colorize;
use miette::Result;
use uvcond::Config;

/// Show or change uvcond configuration
#[derive(Debug, Args)]
pub struct CmdConfig {
    #[clap(subcommand)]
    cmd: Option<ConfigCmd>,
}

#[derive(Debug, Subcommand)]
enum ConfigCmd {
    /// Show current configuration
    Show,

    /// Show the config file path
    Path,

    /// Open the config file in the editor
    Edit,

    /// Create a default config file
    Init,

    /// Set a config value (keys: home, shell, editor)
    Set { key: String, value: String },
}

impl CmdConfig {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        match &self.cmd {
            // Bare `uvcond config` shows the current settings
            None | Some(ConfigCmd::Show) => show(config),
            Some(ConfigCmd::Path) => {
                println!("{}", Config::config_path().display().to_string().cyan());
                Ok(0)
            }
            Some(ConfigCmd::Edit) => edit(config),
            Some(ConfigCmd::Init) => init(),
            Some(ConfigCmd::Set { key, value }) => set(config, key, value),
        }
    }
}

fn show(config: &Config) -> Result<i32> {
    let path = Config::config_path();
    println!(
        "{} {}",
        "Config file:".dimmed(),
        path.display().to_string().cyan()
    );
    if path.is_file() {
        println!("  {}", "(exists)".green());
    } else {
        println!(
            "  {}",
            "(not created yet - run 'uvcond config init')".dimmed()
        );
    }
    println!();

    println!("{}", "Current settings:".dimmed());
    println!(
        "  {}   = {}",
        "home".cyan(),
        config.base_dir().display().to_string().cyan()
    );
    println!(
        "  {}  = {}",
        "shell".cyan(),
        config.shell().unwrap_or("(auto-detect)").green().bold()
    );
    println!("  {} = {}", "editor".cyan(), config.editor().green().bold());
    Ok(0)
}

fn edit(config: &Config) -> Result<i32> {
    let path = Config::config_path();
    if !path.is_file() {
        println!(
            "{} default config at {}",
            "Creating".cyan(),
            path.display().to_string().cyan()
        );
        Config::write_default_template()?;
    }

    println!(
        "{} {} {}",
        "Opening".cyan(),
        path.display().to_string().cyan(),
        format!("in {}", config.editor()).dimmed()
    );
    let code = uvcond::editor::open(config, &path)?;
    Ok(code)
}

fn init() -> Result<i32> {
    let path = Config::config_path();
    if path.is_file() {
        println!(
            "{} at {}",
            "Config already exists".yellow(),
            path.display().to_string().cyan()
        );
        println!("{}", "Use 'uvcond config edit' to modify it".dimmed());
        return Ok(0);
    }

    Config::write_default_template()?;
    println!(
        "{} config at {}",
        "Created".green(),
        path.display().to_string().cyan()
    );
    println!("{}", "Edit it with 'uvcond config edit'".dimmed());
    Ok(0)
}

fn set(config: &Config, key: &str, value: &str) -> Result<i32> {
    // Validation happens before anything touches the file.
    let mut updated = config.clone();
    updated.set(key, value)?;
    updated.save()?;

    println!(
        "{} {} = {}",
        "Set".green(),
        key.cyan(),
        value.green().bold()
    );
    Ok(0)
}
