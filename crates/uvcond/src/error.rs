// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for uvcond operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with uvcond Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during uvcond operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Named environment directory does not exist
    #[error("no environment named '{name}' at {path:?}")]
    #[diagnostic(
        code(uvcond::no_such_env),
        help("Run 'uvcond list' to see available environments")
    )]
    NoSuchEnvironment { name: String, path: PathBuf },

    /// Target environment directory already exists
    #[error("environment '{name}' already exists at {path:?}")]
    #[diagnostic(
        code(uvcond::env_exists),
        help("Delete it first with 'uvcond delete {name}' or pick another name with --name")
    )]
    EnvironmentExists { name: String, path: PathBuf },

    /// Python version could not be read from pyvenv.cfg
    #[error("could not determine the Python version of '{name}'")]
    #[diagnostic(
        code(uvcond::missing_python_version),
        help("The environment has no readable pyvenv.cfg version entry")
    )]
    MissingPythonVersion { name: String },

    /// No interpreter at the expected relative path
    #[error("could not find a Python interpreter in {path:?}")]
    #[diagnostic(code(uvcond::python_not_found))]
    PythonNotFound { path: PathBuf },

    /// Recipe file does not exist
    #[error("recipe file not found: {path:?}")]
    #[diagnostic(code(uvcond::recipe_not_found))]
    RecipeNotFound { path: PathBuf },

    /// Neither --name nor the recipe's name field is available
    #[error("no environment name provided and the recipe has no 'name' field")]
    #[diagnostic(
        code(uvcond::recipe_missing_name),
        help("Pass one explicitly with --name")
    )]
    RecipeMissingName,

    /// Invalid TOML in a recipe or config file
    #[error("invalid TOML in {path:?}: {error}")]
    #[diagnostic(code(uvcond::invalid_toml))]
    InvalidToml {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },

    /// Failed to read file
    #[error("failed to read {path:?}")]
    #[diagnostic(code(uvcond::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write file
    #[error("failed to write {path:?}")]
    #[diagnostic(code(uvcond::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Directory is missing the expected venv layout
    #[error("{path:?} does not look like a virtual environment (no {expected})")]
    #[diagnostic(code(uvcond::not_a_venv))]
    NotAVenv {
        path: PathBuf,
        expected: &'static str,
    },

    /// Activation script missing from the venv
    #[error("no activation script at {path:?}")]
    #[diagnostic(code(uvcond::activate_missing))]
    ActivateMissing { path: PathBuf },

    /// Explicitly requested shell is not installed
    #[error("requested shell '{shell}' not found on PATH")]
    #[diagnostic(code(uvcond::shell_not_found))]
    ShellNotFound { shell: String },

    /// Configured editor could not be launched
    #[error("editor '{editor}' not found")]
    #[diagnostic(
        code(uvcond::editor_not_found),
        help("Set one with 'uvcond config set editor <program>'")
    )]
    EditorNotFound { editor: String },

    /// Key outside the config allow-list
    #[error("unknown config key '{key}'")]
    #[diagnostic(
        code(uvcond::unknown_config_key),
        help("Valid keys: editor, home, shell")
    )]
    UnknownConfigKey { key: String },

    /// 'recipe post' resolved to an empty command list
    #[error("no post-install commands given")]
    #[diagnostic(
        code(uvcond::no_commands),
        help("Use --add 'cmd', --set 'cmd', or --from FILE")
    )]
    NoCommands,

    /// Command file had nothing but blanks and comments
    #[error("no commands found in {path:?}")]
    #[diagnostic(
        code(uvcond::empty_command_file),
        help("The file needs at least one non-blank, non-comment line")
    )]
    EmptyCommandFile { path: PathBuf },

    /// The uv binary could not be spawned at all
    #[error("failed to launch 'uv': {error}")]
    #[diagnostic(
        code(uvcond::uv_launch_failed),
        help("Is uv installed and on PATH? See https://docs.astral.sh/uv/")
    )]
    UvLaunchFailed {
        #[source]
        error: std::io::Error,
    },

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(uvcond::io_error))]
    Io(#[from] std::io::Error),
}
