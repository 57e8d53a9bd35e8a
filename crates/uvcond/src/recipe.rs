// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Recipe parsing and data types for recipe.toml files.
//!
//! Recipes are parsed with a full TOML parser but written with a bounded
//! per-record serializer, so keys outside the known schema are dropped on
//! re-export.

use std::path::Path;

use serde::Deserialize;

use crate::toml_text;

#[cfg(test)]
#[path = "./recipe_test.rs"]
mod recipe_test;

/// A captured environment setup from a recipe.toml file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    /// Environment name; `recipe apply` falls back to this when --name is
    /// not given.
    #[serde(default)]
    pub name: Option<String>,

    /// Python version (`major.minor`) to create the environment with.
    #[serde(default)]
    pub python: Option<String>,

    /// Optional human-readable description.
    #[serde(default)]
    pub description: Option<String>,

    /// Dependency lists.
    #[serde(default)]
    pub deps: Deps,

    /// Shell commands to run after installation.
    #[serde(default)]
    pub post_install: PostInstall,
}

/// Dependency lists captured from `uv pip freeze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Deps {
    /// Bare package names, for flexible re-resolution.
    #[serde(default)]
    pub packages: Vec<String>,

    /// Full `name==version` specifiers, for exact reproducibility.
    #[serde(default)]
    pub pinned: Vec<String>,
}

impl Deps {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.pinned.is_empty()
    }
}

/// Ordered post-install shell commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostInstall {
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Recipe {
    /// Parse a recipe from TOML text.
    ///
    /// The canonical layout nests everything under a `[recipe]` table;
    /// documents with the same keys at the top level are accepted for
    /// backward compatibility.
    pub fn from_toml_str(text: &str) -> crate::Result<Self> {
        Self::parse(text, Path::new("<string>"))
    }

    /// Load a recipe from a file path.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|error| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> crate::Result<Self> {
        let invalid = |error: toml::de::Error| crate::Error::InvalidToml {
            path: path.to_path_buf(),
            error,
        };

        // Stage 1: full TOML parse
        let value: toml::Value = text.parse().map_err(invalid)?;

        // Stage 2: extract the recipe table, or fall back to the top level
        let table = match value.get("recipe") {
            Some(recipe) => recipe.clone(),
            None => value,
        };
        table.try_into().map_err(invalid)
    }

    /// Synthesize a recipe from an environment's live state.
    pub fn from_environment(name: &str, env_path: &Path) -> Self {
        let (packages, pinned) = crate::env::installed_packages(env_path);
        Recipe {
            name: Some(name.to_string()),
            python: crate::env::python_version(env_path),
            description: None,
            deps: Deps { packages, pinned },
            post_install: PostInstall::default(),
        }
    }

    /// Append to the post-install command list.
    pub fn append_commands(&mut self, commands: impl IntoIterator<Item = String>) {
        self.post_install.commands.extend(commands);
    }

    /// Replace the post-install command list wholesale.
    pub fn set_commands(&mut self, commands: Vec<String>) {
        self.post_install.commands = commands;
    }

    /// Serialize to TOML text.
    ///
    /// The `[recipe]` table is always present; absent optional fields and
    /// empty sub-tables are omitted.
    pub fn to_toml_string(&self) -> String {
        let mut lines = vec!["[recipe]".to_string()];
        if let Some(name) = &self.name {
            lines.push(format!("name = {}", toml_text::string(name)));
        }
        if let Some(python) = &self.python {
            lines.push(format!("python = {}", toml_text::string(python)));
        }
        if let Some(description) = &self.description {
            lines.push(format!("description = {}", toml_text::string(description)));
        }
        lines.push(String::new());

        if !self.deps.is_empty() {
            lines.push("[recipe.deps]".to_string());
            if !self.deps.packages.is_empty() {
                lines.push(format!(
                    "packages = {}",
                    toml_text::string_list(&self.deps.packages)
                ));
            }
            if !self.deps.pinned.is_empty() {
                lines.push(format!(
                    "pinned = {}",
                    toml_text::string_list(&self.deps.pinned)
                ));
            }
            lines.push(String::new());
        }

        if !self.post_install.commands.is_empty() {
            lines.push("[recipe.post_install]".to_string());
            lines.push(format!(
                "commands = {}",
                toml_text::string_list(&self.post_install.commands)
            ));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Write to a file path.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        std::fs::write(path, self.to_toml_string()).map_err(|error| crate::Error::WriteFailed {
            path: path.to_path_buf(),
            error,
        })
    }
}
