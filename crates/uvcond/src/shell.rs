// Copyright (c) Contributors to the uvcond project.
// SPDX-License-Identifier: Apache-2.0

//! Interactive subshell spawning with an environment activated.
//!
//! Shell selection is resolved to a [`Launch`] value first (program plus
//! argument vector, after checking the required activation script), then
//! executed; the resolution functions never spawn anything, which keeps the
//! full (platform, shell-request) table testable.

use std::path::Path;
use std::process::Command;

use crate::Config;

#[cfg(test)]
#[path = "./shell_test.rs"]
mod shell_test;

/// Fallback when neither an argument, the config, nor $SHELL names one.
const DEFAULT_POSIX_SHELL: &str = "/bin/bash";

/// A fully resolved shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub program: String,
    pub args: Vec<String>,
}

/// Spawn an interactive shell inside the environment at `env_path`.
///
/// Shell preference: explicit `requested` argument, then the configured
/// shell, then the platform default. Returns the shell's exit code.
pub fn spawn(
    env_path: &Path,
    name: &str,
    requested: Option<&str>,
    config: &Config,
) -> crate::Result<i32> {
    let requested = requested.or_else(|| config.shell());
    let launch = if cfg!(windows) {
        windows_launch(env_path, name, requested)?
    } else {
        posix_launch(env_path, requested, std::env::var("SHELL").ok().as_deref())?
    };

    tracing::info!(program = %launch.program, "spawning activated shell");
    let status = Command::new(&launch.program).args(&launch.args).status()?;
    Ok(status.code().unwrap_or(1))
}

/// Resolve the POSIX launch: source bin/activate, then exec the shell
/// interactively.
fn posix_launch(
    env_path: &Path,
    requested: Option<&str>,
    env_shell: Option<&str>,
) -> crate::Result<Launch> {
    let bin = env_path.join("bin");
    if !bin.is_dir() {
        return Err(crate::Error::NotAVenv {
            path: env_path.to_path_buf(),
            expected: "bin/",
        });
    }

    let shell = requested
        .or(env_shell)
        .unwrap_or(DEFAULT_POSIX_SHELL);
    let shell = shellexpand::tilde(shell).into_owned();

    let activate = bin.join("activate");
    if !activate.is_file() {
        return Err(crate::Error::ActivateMissing { path: activate });
    }

    let cmdline = format!(". \"{}\" && exec \"{}\" -i", activate.display(), shell);
    Ok(Launch {
        program: shell,
        args: vec!["-c".to_string(), cmdline],
    })
}

/// Resolve the Windows launch from the requested shell.
///
/// Explicit cmd wants activate.bat; explicit pwsh/powershell wants
/// Activate.ps1 and the executable on PATH. With no request, PowerShell is
/// preferred when installed, falling back to cmd.
fn windows_launch(env_path: &Path, name: &str, requested: Option<&str>) -> crate::Result<Launch> {
    let scripts = env_path.join("Scripts");
    if !scripts.is_dir() {
        return Err(crate::Error::NotAVenv {
            path: env_path.to_path_buf(),
            expected: "Scripts\\",
        });
    }

    let requested = requested.map(|shell| shell.to_ascii_lowercase());
    match requested.as_deref() {
        Some("cmd") | Some("cmd.exe") => cmd_launch(&scripts, name),
        Some(shell @ ("pwsh" | "powershell")) => {
            let exe = which::which(shell).map_err(|_| crate::Error::ShellNotFound {
                shell: shell.to_string(),
            })?;
            powershell_launch(&scripts, &exe)
        }
        _ => match which::which("pwsh").or_else(|_| which::which("powershell")) {
            Ok(exe) => powershell_launch(&scripts, &exe),
            Err(_) => cmd_launch(&scripts, name),
        },
    }
}

fn cmd_launch(scripts: &Path, name: &str) -> crate::Result<Launch> {
    let activate = scripts.join("activate.bat");
    if !activate.is_file() {
        return Err(crate::Error::ActivateMissing { path: activate });
    }
    let cmdline = format!("call \"{}\" && title uvcond:{}", activate.display(), name);
    Ok(Launch {
        program: "cmd.exe".to_string(),
        args: vec!["/K".to_string(), cmdline],
    })
}

fn powershell_launch(scripts: &Path, exe: &Path) -> crate::Result<Launch> {
    let activate = scripts.join("Activate.ps1");
    if !activate.is_file() {
        return Err(crate::Error::ActivateMissing { path: activate });
    }
    Ok(Launch {
        program: exe.display().to_string(),
        args: vec![
            "-NoLogo".to_string(),
            "-NoExit".to_string(),
            "-Command".to_string(),
            format!("& \"{}\"", activate.display()),
        ],
    })
}
