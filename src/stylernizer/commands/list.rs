use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::tree::build_tree;

/// Namespace tree of the keys starting with any of `filter` (every key when `None`).
pub fn run<S: AsRef<str>>(registry: &Registry, filter: Option<&[S]>) -> Result<CmdResult> {
    let names = registry.keys_matching_any_prefix(filter);
    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::warning("No plots registered."));
    }
    Ok(result.with_tree(build_tree(&names)))
}
