// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! uvcond - Named Python Environments on top of uv
//!
//! This crate provides the core library for managing named Python virtual
//! environments under a single base directory (`~/.uvcond` by default). All
//! heavy lifting (venv creation, package resolution and installation,
//! freezing installed package lists) is delegated to the external `uv` tool.
//!
//! An environment can be captured as a TOML "recipe" recording its name,
//! Python version, dependency lists, and post-install shell commands, and
//! replayed on another machine to reconstruct the environment.
//!
//! # Example
//!
//! ```toml
//! # recipe.toml
//! [recipe]
//! name = "scraper"
//! python = "3.11"
//! description = "Scraping sandbox"
//!
//! [recipe.deps]
//! packages = ["requests", "beautifulsoup4"]
//! pinned = ["requests==2.31.0", "beautifulsoup4==4.12.3"]
//!
//! [recipe.post_install]
//! commands = ["playwright install chromium"]
//! ```

pub mod config;
pub mod editor;
pub mod env;
pub mod error;
pub mod recipe;
pub mod scripts;
pub mod shell;
pub mod toml_text;
pub mod uv;

pub use config::Config;
pub use env::{EnvDir, installed_packages, python_executable, python_version};
pub use error::{Error, Result};
pub use recipe::{Deps, PostInstall, Recipe};

/// Well-known filename for environment recipes.
pub const RECIPE_FILENAME: &str = "recipe.toml";

/// Well-known filename for user configuration.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Name of the default base directory under the user's home.
pub const BASE_DIR_NAME: &str = ".uvcond";

/// Path to the recipe file inside an environment directory.
pub fn recipe_path(env_path: &std::path::Path) -> std::path::PathBuf {
    env_path.join(RECIPE_FILENAME)
}
