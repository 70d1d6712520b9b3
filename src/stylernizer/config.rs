use crate::error::Result;
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_ENV: &str = "STYLERNIZER_OUTPUT";
pub const CACHE_ENV: &str = "STYLERNIZER_CACHE";
pub const BASE_STYLE_ENV: &str = "STYLERNIZER_BASE_STYLE";
pub const VIEWER_ENV: &str = "STYLERNIZER_VIEWER";

const DEFAULT_OUTPUT: &str = "~/stylernizer";
const DEFAULT_CACHE: &str = "~/.stylernizer";

/// Process-wide settings, read once from the environment at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory saved artifacts are written to
    pub output_dir: PathBuf,

    /// File holding the cached module and plot lists
    pub cache_file: PathBuf,

    /// Style prepended to every registration's style set
    pub base_style: Option<String>,
}

impl Settings {
    pub fn new(output_dir: PathBuf, cache_file: PathBuf, base_style: Option<String>) -> Self {
        Self {
            output_dir,
            cache_file,
            base_style,
        }
    }

    pub fn from_env() -> Self {
        let output = env::var(OUTPUT_ENV).unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());
        let cache = env::var(CACHE_ENV).unwrap_or_else(|_| DEFAULT_CACHE.to_string());
        let base_style = env::var(BASE_STYLE_ENV).ok().filter(|s| !s.is_empty());

        Self {
            output_dir: expand_home(&output),
            cache_file: expand_home(&cache),
            base_style,
        }
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        ensure_dir(&self.output_dir)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    match (raw, home) {
        ("~", Some(home)) => home,
        (s, Some(home)) if s.starts_with("~/") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_absolute_paths_alone() {
        assert_eq!(expand_home("/tmp/plots"), PathBuf::from("/tmp/plots"));
    }

    #[test]
    fn expands_tilde() {
        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_home("~/plots"), dirs.home_dir().join("plots"));
            assert_eq!(expand_home("~"), dirs.home_dir());
        }
    }

    #[test]
    fn ensure_output_dir_creates_nested_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let settings = Settings::new(
            temp.path().join("a").join("b"),
            temp.path().join("cache"),
            None,
        );
        settings.ensure_output_dir().unwrap();
        assert!(settings.output_dir.is_dir());
        // Idempotent
        settings.ensure_output_dir().unwrap();
    }
}
