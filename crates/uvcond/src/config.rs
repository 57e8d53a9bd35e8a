// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! User configuration and path resolution.
//!
//! The config file lives at `<default base>/config.toml` and holds a flat set
//! of optional string settings. It is loaded once in `main` and passed by
//! reference into every command handler; nothing re-reads it mid-process.
//!
//! Note that the `home` setting relocates the environments, not the config
//! file itself: the config is always read from the platform default location
//! so that it can be found before any settings are known.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{BASE_DIR_NAME, CONFIG_FILENAME};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Keys accepted by `uvcond config set`.
pub const CONFIG_KEYS: &[&str] = &["home", "shell", "editor"];

/// User settings from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base directory for environments (default: ~/.uvcond).
    #[serde(default)]
    pub home: Option<String>,

    /// Default shell for `uvcond spawn` (None means auto-detect).
    #[serde(default)]
    pub shell: Option<String>,

    /// Editor for `uvcond recipe edit` and `uvcond config edit`.
    #[serde(default)]
    pub editor: Option<String>,
}

impl Config {
    /// Default base directory, before any config is consulted.
    pub fn default_base_dir() -> PathBuf {
        let home = if cfg!(windows) {
            std::env::var_os("USERPROFILE")
                .map(PathBuf::from)
                .or_else(dirs::home_dir)
        } else {
            dirs::home_dir()
        };
        home.unwrap_or_default().join(BASE_DIR_NAME)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::default_base_dir().join(CONFIG_FILENAME)
    }

    /// Load the config from its well-known location.
    ///
    /// A missing or unparseable file yields the defaults; a broken config
    /// never blocks the CLI.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load a config from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "ignoring unparseable config");
                Self::default()
            }
        }
    }

    /// Base directory for environments, honoring the `home` setting.
    pub fn base_dir(&self) -> PathBuf {
        match self.home.as_deref() {
            Some(home) if !home.is_empty() => {
                PathBuf::from(shellexpand::tilde(home).into_owned())
            }
            _ => Self::default_base_dir(),
        }
    }

    /// Directory of a named environment.
    ///
    /// The name is joined onto the base directory verbatim; names are not
    /// sanitized against path separators or traversal.
    pub fn env_dir(&self, name: &str) -> PathBuf {
        self.base_dir().join(name)
    }

    /// Configured editor, with a platform fallback.
    pub fn editor(&self) -> String {
        match self.editor.as_deref() {
            Some(editor) if !editor.is_empty() => editor.to_string(),
            _ if cfg!(windows) => "notepad".to_string(),
            _ => "vi".to_string(),
        }
    }

    /// Configured shell, or None for auto-detect.
    pub fn shell(&self) -> Option<&str> {
        self.shell.as_deref()
    }

    /// Update a setting, validating the key against the allow-list.
    ///
    /// Mutates only this value; call [`Config::save`] to persist.
    pub fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        match key {
            "home" => self.home = Some(value.to_string()),
            "shell" => self.shell = Some(value.to_string()),
            "editor" => self.editor = Some(value.to_string()),
            _ => {
                return Err(crate::Error::UnknownConfigKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Persist to the well-known config location.
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Persist to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()).map_err(|error| crate::Error::WriteFailed {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Serialize as a commented TOML document.
    pub fn to_toml_string(&self) -> String {
        let mut lines = vec![
            "# uvcond configuration".to_string(),
            "# See: uvcond config --help".to_string(),
            String::new(),
        ];

        if let Some(home) = &self.home {
            lines.push("# Base directory for environments".to_string());
            lines.push(format!("home = {}", crate::toml_text::string(home)));
            lines.push(String::new());
        }

        if let Some(shell) = &self.shell {
            lines.push("# Default shell for \"uvcond spawn\"".to_string());
            lines.push(
                "# Options: pwsh, powershell, cmd (Windows) / bash, zsh, fish (Unix)".to_string(),
            );
            lines.push(format!("shell = {}", crate::toml_text::string(shell)));
            lines.push(String::new());
        }

        if let Some(editor) = &self.editor {
            lines.push(
                "# Editor for \"uvcond recipe edit\" and \"uvcond config edit\"".to_string(),
            );
            lines.push("# Examples: code, vim, nano, notepad".to_string());
            lines.push(format!("editor = {}", crate::toml_text::string(editor)));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Write the commented default template to the well-known location.
    pub fn write_default_template() -> crate::Result<PathBuf> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::default_template()).map_err(|error| {
            crate::Error::WriteFailed {
                path: path.clone(),
                error,
            }
        })?;
        Ok(path)
    }

    /// Per-platform template with every setting present but commented out.
    pub fn default_template() -> &'static str {
        if cfg!(windows) {
            "# uvcond configuration\n\
            # Uncomment and modify settings as needed.\n\
            \n\
            # Base directory for environments (default: ~/.uvcond)\n\
            # home = \"C:\\\\Users\\\\YourName\\\\.uvcond\"\n\
            \n\
            # Default shell for \"uvcond spawn\"\n\
            # Options: pwsh, powershell, cmd\n\
            # shell = \"pwsh\"\n\
            \n\
            # Editor for \"uvcond recipe edit\" and \"uvcond config edit\"\n\
            # Use full path if the editor isn't on your PATH:\n\
            # editor = \"notepad\"\n\
            # editor = \"C:\\\\Program Files\\\\Microsoft VS Code\\\\Code.exe\"\n\
            # editor = \"code\"\n"
        } else {
            "# uvcond configuration\n\
            # Uncomment and modify settings as needed.\n\
            \n\
            # Base directory for environments (default: ~/.uvcond)\n\
            # home = \"~/.uvcond\"\n\
            \n\
            # Default shell for \"uvcond spawn\"\n\
            # Options: bash, zsh, fish, etc.\n\
            # shell = \"bash\"\n\
            \n\
            # Editor for \"uvcond recipe edit\" and \"uvcond config edit\"\n\
            # Examples: code, vim, nano, emacs\n\
            # editor = \"code\"\n"
        }
    }
}
