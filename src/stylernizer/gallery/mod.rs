//! Built-in plots shipped with the binary.
//!
//! Each submodule registers its plots from a `load` function; [`catalog`]
//! exposes them under their module identifiers so `stylernizer register
//! stylernizer.gallery` (or any submodule) works out of the box.

use crate::catalog::ModuleCatalog;
use crate::model::module_id;

pub mod bars;
pub mod lines;

pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::new()
        .with_module(lines::module(), lines::load)
        .with_module(bars::module(), bars::load)
}

/// Identifier of the gallery package itself.
pub fn module() -> String {
    module_id(module_path!())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::render::RenderState;

    #[test]
    fn module_ids_follow_rust_paths() {
        assert_eq!(module(), "stylernizer.gallery");
        assert_eq!(
            catalog().module_ids(),
            vec!["stylernizer.gallery.lines", "stylernizer.gallery.bars"]
        );
    }

    #[test]
    fn every_gallery_plot_produces_an_artifact() {
        let mut registry = Registry::new();
        catalog().import(&module(), &mut registry).unwrap();
        assert!(!registry.is_empty());

        let mut state = RenderState::default();
        for key in registry.keys() {
            assert!(key.starts_with("stylernizer.gallery."), "{}", key);
            registry.get(&key).unwrap().invoke(&mut state).unwrap();
        }
    }
}
