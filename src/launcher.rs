//! Hands outbound links (mail, phone, social, catalogue) to the OS opener.

use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to open '{target}': {source}")]
pub struct LaunchError {
    pub target: String,
    #[source]
    pub source: std::io::Error,
}

pub trait Launcher {
    fn open(&mut self, target: &str) -> Result<(), LaunchError>;
}

/// Spawns the platform opener and does not wait for it.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&mut self, target: &str) -> Result<(), LaunchError> {
        open_command()
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| LaunchError {
                target: target.to_string(),
                source,
            })
    }
}

#[cfg(target_os = "macos")]
fn open_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "linux")]
fn open_command() -> Command {
    Command::new("xdg-open")
}

#[cfg(target_os = "windows")]
fn open_command() -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn open_command() -> Command {
    Command::new("open")
}
