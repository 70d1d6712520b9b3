//! # Cache Storage
//!
//! Remembers which modules contributed plots so later runs can load them again
//! without being told. The cache is a hint, not a source of truth: the registry
//! is always rebuilt by loading the listed modules, and a module that fails to
//! load is skipped.
//!
//! ## Implementations
//!
//! - [`fs::FileCache`]: JSON file at the configured cache path
//! - [`memory::InMemoryCache`]: no persistence, for tests
//!
//! ## Format
//!
//! ```json
//! {
//!     "modules": ["stylernizer.gallery.lines"],
//!     "plots": ["stylernizer.gallery.lines:sine"]
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub modules: Vec<String>,
    pub plots: Vec<String>,
}

impl CacheSnapshot {
    pub fn new(modules: Vec<String>, plots: Vec<String>) -> Self {
        Self { modules, plots }
    }
}

/// Where the module/plot lists live between runs.
pub trait CacheStore {
    /// The stored snapshot, or `None` when nothing was stored yet.
    fn read(&self) -> Result<Option<CacheSnapshot>>;

    /// Replaces whatever was stored before.
    fn write(&mut self, snapshot: &CacheSnapshot) -> Result<()>;

    /// Human readable location, for messages.
    fn describe(&self) -> String;
}
