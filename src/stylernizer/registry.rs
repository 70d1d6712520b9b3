//! # Plot Registry
//!
//! The registry maps qualified names (`module.path:function[_variant]`) to
//! [`Producer`]s, in insertion order. Registering a name twice replaces the
//! producer but keeps the original position.
//!
//! Next to the live mapping it keeps two lists, the modules and plot keys seen
//! by the registrar. Those only feed the cache (see [`crate::store`]); execution
//! never reads them.

use crate::error::{Result, StylernizerError};
use crate::registrar::{self, PlotFunction, PlotOptions, Producer};
use indexmap::IndexMap;

#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, Producer>,
    known_modules: Vec<String>,
    known_plots: Vec<String>,
    base_style: Option<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose registrations all start with `base_style`.
    pub fn with_base_style(base_style: Option<String>) -> Self {
        Self {
            base_style,
            ..Self::default()
        }
    }

    pub fn base_style(&self) -> Option<&str> {
        self.base_style.as_deref()
    }

    /// Registers `f` under its qualified name(s) and hands it back unchanged.
    pub fn register(&mut self, options: PlotOptions, f: PlotFunction) -> Result<PlotFunction> {
        registrar::register(self, options, f)
    }

    pub fn put(&mut self, name: impl Into<String>, producer: Producer) {
        self.entries.insert(name.into(), producer);
    }

    pub fn get(&self, name: &str) -> Result<&Producer> {
        self.entries
            .get(name)
            .ok_or_else(|| StylernizerError::not_found(name, self.keys()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Keys starting with any of `prefixes`, in registration order. `None` matches everything.
    pub fn keys_matching_any_prefix<S: AsRef<str>>(&self, prefixes: Option<&[S]>) -> Vec<String> {
        match prefixes {
            None => self.keys(),
            Some(prefixes) => self
                .entries
                .keys()
                .filter(|k| prefixes.iter().any(|p| k.starts_with(p.as_ref())))
                .cloned()
                .collect(),
        }
    }

    pub fn known_modules(&self) -> &[String] {
        &self.known_modules
    }

    pub fn known_plots(&self) -> &[String] {
        &self.known_plots
    }

    pub fn remember_module(&mut self, module: &str) {
        push_unique(&mut self.known_modules, module);
    }

    /// Replaces the modules remembered since `known` with the catalog id that
    /// loaded them. With no id they are dropped.
    pub fn attribute_modules(&mut self, known: usize, id: Option<&str>) {
        self.known_modules.truncate(known);
        if let Some(id) = id {
            push_unique(&mut self.known_modules, id);
        }
    }

    pub fn remember_plot(&mut self, name: &str) {
        push_unique(&mut self.known_plots, name);
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
