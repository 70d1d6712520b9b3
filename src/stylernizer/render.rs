//! # Render State and Artifacts
//!
//! Plot functions draw against a shared [`RenderState`]: the active style sheets
//! and the default figure size. Every registered plot mutates this state right
//! before it runs (styles first, then orientation), so plots must be produced
//! one after another. Nothing here is `Send`; the whole engine is single-threaded.
//!
//! What a plot function hands back is an [`Artifact`]. The engine does not know
//! how it is drawn, only that it can be saved, shown and disposed.

use crate::error::Result;
use crate::model::Orientation;
use std::path::Path;
use tracing::{debug, warn};

/// Default figure size in inches, width first.
pub const DEFAULT_FIGSIZE: (f64, f64) = (6.4, 4.8);

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    figsize: (f64, f64),
    styles: Vec<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(DEFAULT_FIGSIZE)
    }
}

impl RenderState {
    pub fn new(figsize: (f64, f64)) -> Self {
        Self {
            figsize,
            styles: Vec::new(),
        }
    }

    pub fn figsize(&self) -> (f64, f64) {
        self.figsize
    }

    pub fn set_figsize(&mut self, width: f64, height: f64) {
        self.figsize = (width, height);
    }

    /// Every style applied so far, oldest first. Later entries override earlier ones.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Layers `styles` on top of the already applied ones. An empty slice changes nothing.
    ///
    /// A style that is already applied moves to the end instead of repeating,
    /// so the list stays bounded by the number of distinct styles.
    pub fn use_styles(&mut self, styles: &[String]) {
        if styles.is_empty() {
            return;
        }
        debug!("using styles {:?}", styles);
        for style in styles {
            self.styles.retain(|s| s != style);
            self.styles.push(style.clone());
        }
    }

    /// Landscape when wider than tall, portrait otherwise (a square canvas counts as portrait).
    pub fn orientation(&self) -> Orientation {
        if self.figsize.0 > self.figsize.1 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Adjusts the figure height towards `mode`, keeping the width.
    ///
    /// The new height is `width * ratio^exponent` with `ratio = height / width`
    /// (1 for square) and `exponent = 1` for landscape, `-1` otherwise. Going
    /// from portrait to landscape therefore leaves the height where it was; the
    /// formula is kept as is so saved figures stay reproducible.
    pub fn set_orientation(&mut self, mode: Orientation) {
        if self.orientation() == mode {
            return;
        }
        debug!("changing orientation to {}", mode);
        let (width, height) = self.figsize;
        let ratio = if mode == Orientation::Square {
            1.0
        } else {
            height / width
        };
        let exponent = if mode == Orientation::Landscape { 1 } else { -1 };
        self.figsize = (width, width * ratio.powi(exponent));
    }
}

/// An opaque rendered output.
pub trait Artifact {
    /// Writes the artifact to `path`, cropped tightly to its content.
    fn save(&self, path: &Path) -> Result<()>;

    /// Displays the artifact. Whether this blocks is up to the implementation.
    fn show(&self) -> Result<()>;

    /// Releases whatever backs the artifact.
    fn dispose(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Owns an artifact for one executor iteration and disposes it when dropped.
pub struct ArtifactGuard {
    name: String,
    artifact: Box<dyn Artifact>,
}

impl ArtifactGuard {
    pub fn new(name: impl Into<String>, artifact: Box<dyn Artifact>) -> Self {
        Self {
            name: name.into(),
            artifact,
        }
    }

    pub fn artifact(&self) -> &dyn Artifact {
        self.artifact.as_ref()
    }
}

impl Drop for ArtifactGuard {
    fn drop(&mut self) {
        if let Err(e) = self.artifact.dispose() {
            warn!("could not dispose artifact for {}: {}", self.name, e);
        }
    }
}
