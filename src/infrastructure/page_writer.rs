// src/infrastructure/page_writer.rs
use crate::application::PageWriter;
use anyhow::{Context, Result};
use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, instrument};

/// Writes pages to the local filesystem.
#[derive(Debug, Default)]
pub struct FilePageWriter;

impl FilePageWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PageWriter for FilePageWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<PathBuf> {
        write_page(path, content)
    }
}

/// Write `content` to `path`, replacing any existing file, and return the
/// canonical absolute path of the result.
///
/// The content goes to a temporary file next to the target first and is then
/// renamed over it, so a failed write never leaves a truncated page behind.
/// An existing symlink is written through to its target, and an existing
/// file keeps its permissions.
#[instrument(level = "debug", skip(content), fields(bytes = content.len()))]
pub fn write_page(path: &Path, content: &str) -> Result<PathBuf> {
    let (target, existing) = resolve_target(path)?;
    let dir = target
        .parent()
        .with_context(|| format!("Output path has no parent directory: {}", target.display()))?;

    let mut builder = Builder::new();
    builder.prefix(".mapview-").suffix(".tmp");
    #[cfg(unix)]
    {
        // plain create mode; the process umask still applies
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            builder.permissions(Permissions::from_mode(0o666));
        }
    }

    let mut file = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    file.write_all(content.as_bytes())
        .context("Failed to write page content")?;

    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .context("Failed to keep page file permissions")?;
    }

    file.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write page to {}", target.display()))?;
    debug!(path = %target.display(), "Page written");

    fs::canonicalize(&target).with_context(|| format!("Failed to resolve {}", target.display()))
}

/// Absolute path to write to, following symlinks, plus the permissions of
/// the file currently there.
fn resolve_target(path: &Path) -> Result<(PathBuf, Option<Permissions>)> {
    let target = absolute(path)?;
    match fs::canonicalize(&target) {
        Ok(real) => {
            let permissions = fs::metadata(&real)
                .with_context(|| format!("Failed to inspect {}", real.display()))?
                .permissions();
            Ok((real, Some(permissions)))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((target, None)),
        Err(e) => Err(e).with_context(|| format!("Failed to resolve {}", target.display())),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(path))
}
