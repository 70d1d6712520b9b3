use crate::catalog::ModuleCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::tree::build_tree;
use tracing::info;

/// Loads each named module (and its submodules) and returns the tree of the
/// whole registry afterwards. The first module that cannot be loaded aborts.
pub fn run<S: AsRef<str>>(
    registry: &mut Registry,
    catalog: &mut ModuleCatalog,
    names: &[S],
) -> Result<CmdResult> {
    let mut imported = Vec::new();
    for name in names {
        let name = name.as_ref();
        info!("registering {}", name);
        imported.extend(catalog.import(name, registry)?);
    }

    info!("registered {} plots", registry.len());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Registered {} plots from {} module{}",
        registry.len(),
        registry.known_modules().len(),
        if registry.known_modules().len() == 1 { "" } else { "s" }
    )));
    Ok(result
        .with_imported_modules(imported)
        .with_tree(build_tree(&registry.keys())))
}
