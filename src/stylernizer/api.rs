//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! stylernizer operation, whatever the UI.
//!
//! [`Stylernizer`] owns the state a session needs: the [`Registry`], the
//! [`RenderState`] plots draw against, the [`ModuleCatalog`] modules are loaded
//! from and the [`CacheStore`] that remembers them between runs. Each method
//! dispatches to `commands/*.rs` and returns a [`CmdResult`]; nothing here
//! prints.
//!
//! ## Generic Over CacheStore
//!
//! - Production: `Stylernizer<FileCache>`
//! - Testing: `Stylernizer<InMemoryCache>`

use crate::catalog::ModuleCatalog;
use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::registry::Registry;
use crate::render::RenderState;
use crate::store::CacheStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PlotOutcome};

pub struct Stylernizer<C: CacheStore> {
    settings: Settings,
    registry: Registry,
    state: RenderState,
    catalog: ModuleCatalog,
    store: C,
}

impl<C: CacheStore> Stylernizer<C> {
    pub fn new(settings: Settings, catalog: ModuleCatalog, store: C) -> Self {
        let registry = Registry::with_base_style(settings.base_style.clone());
        Self {
            settings,
            registry,
            state: RenderState::default(),
            catalog,
            store,
        }
    }

    /// Creates the output directory and reloads the cached modules.
    pub fn open(settings: Settings, catalog: ModuleCatalog, store: C) -> Result<(Self, CmdResult)> {
        settings.ensure_output_dir()?;
        let mut api = Self::new(settings, catalog, store);
        let result = api.load_cache()?;
        Ok((api, result))
    }

    pub fn import_modules<S: AsRef<str>>(&mut self, names: &[S]) -> Result<CmdResult> {
        commands::register::run(&mut self.registry, &mut self.catalog, names)
    }

    pub fn tree<S: AsRef<str>>(&self, filter: Option<&[S]>) -> Result<CmdResult> {
        commands::list::run(&self.registry, filter)
    }

    pub fn plot<S: AsRef<str>>(
        &mut self,
        filter: Option<&[S]>,
        save: bool,
        show: bool,
    ) -> Result<CmdResult> {
        let request = commands::plot::PlotRequest {
            output_dir: &self.settings.output_dir,
            save,
            show,
        };
        commands::plot::run(&self.registry, &mut self.state, filter, &request)
    }

    pub fn load_cache(&mut self) -> Result<CmdResult> {
        commands::cache::load(&mut self.registry, &mut self.catalog, &self.store)
    }

    pub fn dump_cache(&mut self) -> Result<CmdResult> {
        commands::cache::dump(&self.registry, &mut self.store)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &C {
        &self.store
    }
}
