// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the top-level `uvcond describe` command.

use clap::Args;
use miette::Result;
use uvcond::Config;

/// Set an environment's description
#[derive(Debug, Args)]
pub struct CmdDescribe {
    /// Environment name
    pub name: String,

    /// Description text (omit to show environment info instead)
    pub text: Vec<String>,
}

impl CmdDescribe {
    pub fn run(&mut self, config: &Config) -> Result<i32> {
        if self.text.is_empty() {
            let mut info = crate::cmd_info::CmdInfo {
                name: self.name.clone(),
            };
            return info.run(config);
        }
        crate::cmd_recipe::set_description(config, &self.name, &self.text.join(" "))
    }
}
