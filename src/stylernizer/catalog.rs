//! # Module Catalog
//!
//! Plot functions are registered as a side effect of loading the module that
//! defines them. Rust links everything statically, so "loading" means running
//! the module's loader: a plain function that registers its plots into a
//! [`Registry`]. The catalog maps dotted module identifiers to those loaders.
//!
//! Importing a name loads the module with that identifier and every module
//! below it (`gallery` pulls in `gallery.lines` and `gallery.bars`). Each
//! module is loaded at most once per catalog, like an import cache.
//!
//! The registry's known modules record catalog ids, whatever module path the
//! loader's plot functions carry, so a cached module list can always be
//! imported again.

use crate::error::{Result, StylernizerError};
use crate::registry::Registry;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Registers every plot a module contributes.
pub type ModuleLoader = fn(&mut Registry) -> Result<()>;

#[derive(Default, Clone)]
pub struct ModuleCatalog {
    modules: IndexMap<String, ModuleLoader>,
    loaded: HashSet<String>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, id: impl Into<String>, loader: ModuleLoader) -> Self {
        self.add(id, loader);
        self
    }

    pub fn add(&mut self, id: impl Into<String>, loader: ModuleLoader) {
        self.modules.insert(id.into(), loader);
    }

    pub fn module_ids(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.contains(id)
    }

    /// Loads `name` and its submodules into `registry`. Returns the modules
    /// loaded by this call; modules loaded earlier are skipped.
    pub fn import(&mut self, name: &str, registry: &mut Registry) -> Result<Vec<String>> {
        let nested = format!("{}.", name);
        let matching: Vec<(String, ModuleLoader)> = self
            .modules
            .iter()
            .filter(|(id, _)| id.as_str() == name || id.starts_with(&nested))
            .map(|(id, loader)| (id.clone(), *loader))
            .collect();

        if matching.is_empty() {
            return Err(StylernizerError::import(name, "no such module"));
        }

        let mut loaded = Vec::new();
        for (id, loader) in matching {
            if self.loaded.contains(&id) {
                debug!("module {} already imported", id);
                continue;
            }
            debug!("importing module {}", id);
            let known = registry.known_modules().len();
            let outcome = loader(registry);
            registry.attribute_modules(known, outcome.is_ok().then_some(id.as_str()));
            outcome.map_err(|e| StylernizerError::import(&id, e.to_string()))?;
            self.loaded.insert(id.clone());
            loaded.push(id);
        }
        Ok(loaded)
    }
}
