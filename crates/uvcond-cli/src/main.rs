// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! uvcond - Named Python Environment Manager CLI

use clap::{CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use uvcond::Config;

mod cmd_config;
mod cmd_create;
mod cmd_delete;
mod cmd_describe;
mod cmd_info;
mod cmd_list;
mod cmd_path;
mod cmd_recipe;
mod cmd_recipe_apply;
mod cmd_recipe_export;
mod cmd_recipe_post;
mod cmd_spawn;

use cmd_config::CmdConfig;
use cmd_create::CmdCreate;
use cmd_delete::CmdDelete;
use cmd_describe::CmdDescribe;
use cmd_info::CmdInfo;
use cmd_list::CmdList;
use cmd_path::CmdPath;
use cmd_recipe::CmdRecipe;
use cmd_spawn::CmdSpawn;

#[derive(Parser)]
#[clap(
    name = "uvcond",
    about = "Conda-like named Python environments on top of uv",
    version,
    long_about = "Manage named Python virtual environments and their TOML recipes, \
                  delegating all heavy lifting to uv"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all environments
    List(CmdList),

    /// Create a new environment (extra args pass through to `uv venv`)
    #[clap(alias = "mk")]
    Create(CmdCreate),

    /// Print an environment's path
    Path(CmdPath),

    /// Delete an environment
    #[clap(alias = "rm")]
    Delete(CmdDelete),

    /// Spawn a shell with an environment activated
    #[clap(alias = "shell")]
    Spawn(CmdSpawn),

    /// Capture and replay environment recipes
    #[clap(subcommand)]
    Recipe(CmdRecipe),

    /// Show or change uvcond configuration
    Config(CmdConfig),

    /// Show information about an environment
    Info(CmdInfo),

    /// Set an environment's description
    Describe(CmdDescribe),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Config is read once here and threaded through every handler
        let config = Config::load();

        let Some(cmd) = self.cmd else {
            Opt::command().print_help().into_diagnostic()?;
            return Ok(0);
        };

        // Dispatch to command
        match cmd {
            Command::List(mut cmd) => cmd.run(&config),
            Command::Create(mut cmd) => cmd.run(&config),
            Command::Path(mut cmd) => cmd.run(&config),
            Command::Delete(mut cmd) => cmd.run(&config),
            Command::Spawn(mut cmd) => cmd.run(&config),
            Command::Recipe(mut cmd) => cmd.run(&config),
            Command::Config(mut cmd) => cmd.run(&config),
            Command::Info(mut cmd) => cmd.run(&config),
            Command::Describe(mut cmd) => cmd.run(&config),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
