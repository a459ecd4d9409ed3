// src/infrastructure/browser.rs
use crate::application::BrowserLauncher;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::instrument;

/// Opens files with the platform's default application.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserLauncher for SystemBrowser {
    #[instrument(level = "debug")]
    fn open(&mut self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        opener_command(path_str)?
            .spawn()
            .context("Failed to open browser")?;

        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &str) -> Result<Command> {
    let mut command = Command::new("open");
    command.arg(path);
    Ok(command)
}

#[cfg(target_os = "windows")]
fn opener_command(path: &str) -> Result<Command> {
    // empty title argument, otherwise `start` treats a quoted path as the title
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", path]);
    Ok(command)
}

#[cfg(target_os = "linux")]
fn opener_command(path: &str) -> Result<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    Ok(command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn opener_command(_path: &str) -> Result<Command> {
    anyhow::bail!("Opening a browser is not supported on this platform")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn given_linux_when_building_command_then_uses_xdg_open() {
        let command = opener_command("/tmp/map.html").unwrap();

        assert_eq!(command.get_program(), "xdg-open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["/tmp/map.html"]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn given_macos_when_building_command_then_uses_open() {
        let command = opener_command("/tmp/map.html").unwrap();

        assert_eq!(command.get_program(), "open");
    }
}
