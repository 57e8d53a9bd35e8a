// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `uvcond delete` command.

use std::io::{BufRead, Write};
use std::path::Path;

use clap::Args;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use uvcond::Config;

#[cfg(test)]
#[path = "./cmd_delete_test.rs"]
mod cmd_delete_test;

/// Delete an environment
#[derive(Debug, Args)]
pub struct CmdDelete {
    /// Environment name
    pub name: String,

    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
}

/// Outcome of the confirmation prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    /// Input closed before an answer (Ctrl-D / Ctrl-C).
    Interrupted,
}

impl CmdDelete {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        let target = config.env_dir(&self.name);
        if !target.is_dir() {
            return Err(uvcond::Error::NoSuchEnvironment {
                name: self.name.clone(),
                path: target,
            }
            .into());
        }

        if self.force {
            self.remove(&target)
        } else {
            let stdin = std::io::stdin();
            self.confirm_and_remove(&target, &mut stdin.lock())
        }
    }

    /// Prompt on `input` before removing; split out so tests can feed
    /// simulated answers.
    fn confirm_and_remove(&self, target: &Path, input: &mut impl BufRead) -> Result<i32> {
        println!(
            "{} {}",
            "This will delete".yellow(),
            target.display().to_string().cyan()
        );
        print!("{} [y/N] ", "Are you sure?".dimmed());
        std::io::stdout().flush().into_diagnostic()?;

        match read_confirmation(input).into_diagnostic()? {
            Answer::Yes => self.remove(target),
            Answer::No => {
                println!("{}", "Cancelled".dimmed());
                Ok(0)
            }
            Answer::Interrupted => {
                println!();
                Ok(1)
            }
        }
    }

    fn remove(&self, target: &Path) -> Result<i32> {
        println!("{} {}...", "Deleting".cyan(), self.name.green().bold());
        std::fs::remove_dir_all(target).into_diagnostic()?;
        println!("{} {}", "Deleted".green(), self.name.green().bold());
        Ok(0)
    }
}

fn read_confirmation(input: &mut impl BufRead) -> std::io::Result<Answer> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Interrupted);
    }
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(Answer::Yes),
        _ => Ok(Answer::No),
    }
}
