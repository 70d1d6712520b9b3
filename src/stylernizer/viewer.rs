use crate::config::VIEWER_ENV;
use crate::error::{Result, StylernizerError};
use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Viewer command from the environment, read once.
static VIEWER: Lazy<Option<String>> =
    Lazy::new(|| env::var(VIEWER_ENV).ok().filter(|v| !v.trim().is_empty()));

/// Writes `contents` to a scratch file named after `name` and opens it.
///
/// A configured viewer blocks until closed, so the scratch file is removed
/// afterwards and `None` is returned. The platform opener may hand the file
/// to a running application and return at once; that file is kept and its
/// path returned.
pub fn open_contents(name: &str, extension: &str, contents: &str) -> Result<Option<PathBuf>> {
    open_contents_with(VIEWER.as_deref(), name, extension, contents)
}

/// Opens `path` in `viewer`, or the platform default, and waits for it.
fn open_with(viewer: Option<&str>, path: &Path) -> Result<()> {
    let mut command = match viewer {
        Some(viewer) => viewer_command(viewer),
        None => platform_command()?,
    };
    command.arg(path);
    debug!("showing {} with {:?}", path.display(), command);

    let status = command
        .status()
        .map_err(|e| StylernizerError::Artifact(format!("Failed to launch viewer: {}", e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(StylernizerError::Artifact(format!(
            "Viewer exited with {}",
            status
        )))
    }
}

fn open_contents_with(
    viewer: Option<&str>,
    name: &str,
    extension: &str,
    contents: &str,
) -> Result<Option<PathBuf>> {
    let path = scratch_path(name, extension);
    fs::write(&path, contents)?;
    let opened = open_with(viewer, &path);

    if viewer.is_none() {
        return opened.map(|_| Some(path));
    }
    if let Err(e) = fs::remove_file(&path) {
        warn!("could not remove {}: {}", path.display(), e);
    }
    opened.map(|_| None)
}

fn scratch_path(name: &str, extension: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    env::temp_dir().join(format!(
        "stylernizer-{}-{}{}",
        std::process::id(),
        stem,
        extension
    ))
}

/// Splits a viewer setting such as `"feh --scale-down"` into program and arguments.
fn viewer_command(viewer: &str) -> Command {
    let mut parts = viewer.split_whitespace();
    let program = parts.next().unwrap_or(viewer);
    let mut command = Command::new(program);
    command.args(parts);
    command
}

fn platform_command() -> Result<Command> {
    #[cfg(target_os = "macos")]
    {
        Ok(Command::new("open"))
    }

    #[cfg(target_os = "linux")]
    {
        Ok(Command::new("xdg-open"))
    }

    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "/WAIT", ""]);
        Ok(command)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(StylernizerError::Artifact(format!(
            "No default viewer on this platform, set {}",
            VIEWER_ENV
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_setting_splits_arguments() {
        let command = viewer_command("feh --scale-down -Z");
        assert_eq!(command.get_program(), "feh");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["--scale-down", "-Z"]);
    }

    #[cfg(unix)]
    #[test]
    fn configured_viewer_removes_scratch_file() {
        let kept = open_contents_with(Some("true"), "viewer ok", ".svg", "<svg/>").unwrap();
        assert_eq!(kept, None);
        assert!(!scratch_path("viewer ok", ".svg").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_viewer_still_removes_scratch_file() {
        let err = open_contents_with(Some("false"), "viewer fails", ".svg", "<svg/>").unwrap_err();
        assert!(err.to_string().contains("Viewer exited"));
        assert!(!scratch_path("viewer fails", ".svg").exists());
    }
}
