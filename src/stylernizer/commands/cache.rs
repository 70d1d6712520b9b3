use crate::catalog::ModuleCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::{CacheSnapshot, CacheStore};
use tracing::{debug, error};

/// Reloads every module listed in the cache.
///
/// The cached lists are merged into the registry's known lists first, so a
/// later [`dump`] keeps them even if loading fails. A module that cannot be
/// loaded is logged and skipped.
pub fn load<C: CacheStore>(
    registry: &mut Registry,
    catalog: &mut ModuleCatalog,
    store: &C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let snapshot = match store.read()? {
        Some(snapshot) => snapshot,
        None => {
            debug!("no cache at {}", store.describe());
            return Ok(result);
        }
    };

    for module in &snapshot.modules {
        registry.remember_module(module);
    }
    for plot in &snapshot.plots {
        registry.remember_plot(plot);
    }

    let mut imported = Vec::new();
    for module in &snapshot.modules {
        debug!("importing module {}", module);
        match catalog.import(module, registry) {
            Ok(loaded) => imported.extend(loaded),
            Err(e) => {
                error!("could not import module {}: {}", module, e);
                result.add_message(CmdMessage::error(format!(
                    "Could not import module {}",
                    module
                )));
            }
        }
    }
    Ok(result.with_imported_modules(imported))
}

/// Writes the registry's known modules and plot keys, replacing the previous cache.
pub fn dump<C: CacheStore>(registry: &Registry, store: &mut C) -> Result<CmdResult> {
    let snapshot = CacheSnapshot::new(
        registry.known_modules().to_vec(),
        registry.known_plots().to_vec(),
    );
    store.write(&snapshot)?;
    debug!("dumped cache to {}", store.describe());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Cached {} modules in {}",
        snapshot.modules.len(),
        store.describe()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StylernizerError;
    use crate::registrar::PlotOptions;
    use crate::store::memory::InMemoryCache;
    use crate::test_utils::noop_plot;

    fn load_lines(registry: &mut Registry) -> Result<()> {
        registry.register(PlotOptions::new(), noop_plot("demo.lines", "sine"))?;
        registry.register(PlotOptions::new().sweep([1, 2]), noop_plot("demo.lines", "wave"))?;
        Ok(())
    }

    fn load_bars(registry: &mut Registry) -> Result<()> {
        registry.register(PlotOptions::new(), noop_plot("demo.bars", "hist"))?;
        Ok(())
    }

    fn load_broken(_registry: &mut Registry) -> Result<()> {
        Err(StylernizerError::Artifact("syntax error".into()))
    }

    fn catalog() -> ModuleCatalog {
        ModuleCatalog::new()
            .with_module("demo.lines", load_lines)
            .with_module("demo.bars", load_bars)
            .with_module("demo.broken", load_broken)
    }

    #[test]
    fn round_trip_restores_keys() {
        let mut store = InMemoryCache::new();
        let mut first = Registry::new();
        let mut catalog_a = catalog();
        catalog_a.import("demo.lines", &mut first).unwrap();
        catalog_a.import("demo.bars", &mut first).unwrap();
        dump(&first, &mut store).unwrap();

        // A fresh process: new registry, new import cache.
        let mut second = Registry::new();
        let mut catalog_b = catalog();
        let result = load(&mut second, &mut catalog_b, &store).unwrap();

        assert_eq!(second.keys(), first.keys());
        assert_eq!(result.imported_modules, vec!["demo.lines", "demo.bars"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn broken_module_is_skipped() {
        let store = InMemoryCache::with_snapshot(CacheSnapshot::new(
            vec![
                "demo.lines".into(),
                "demo.broken".into(),
                "gone.module".into(),
                "demo.bars".into(),
            ],
            vec![],
        ));
        let mut registry = Registry::new();
        let mut catalog = catalog();
        let result = load(&mut registry, &mut catalog, &store).unwrap();

        assert_eq!(
            registry.keys(),
            vec!["demo.lines:sine", "demo.lines:wave_1", "demo.lines:wave_2", "demo.bars:hist"]
        );
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn cached_lists_survive_failed_imports() {
        let store = InMemoryCache::with_snapshot(CacheSnapshot::new(
            vec!["gone.module".into()],
            vec!["gone.module:f".into()],
        ));
        let mut registry = Registry::new();
        let mut catalog = catalog();
        load(&mut registry, &mut catalog, &store).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.known_modules(), ["gone.module"]);
        assert_eq!(registry.known_plots(), ["gone.module:f"]);
    }

    #[test]
    fn missing_cache_is_a_no_op() {
        let store = InMemoryCache::new();
        let mut registry = Registry::new();
        let mut catalog = catalog();
        let result = load(&mut registry, &mut catalog, &store).unwrap();
        assert!(registry.is_empty());
        assert!(result.imported_modules.is_empty());
    }

    #[test]
    fn dump_writes_known_lists() {
        let mut registry = Registry::new();
        registry
            .register(PlotOptions::new().sweep([3]), noop_plot("a.b", "f"))
            .unwrap();
        let mut store = InMemoryCache::new();
        dump(&registry, &mut store).unwrap();
        assert_eq!(
            store.snapshot(),
            Some(&CacheSnapshot::new(vec!["a.b".into()], vec!["a.b:f_3".into()]))
        );
    }
}
