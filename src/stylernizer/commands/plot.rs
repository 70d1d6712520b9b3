use crate::commands::{CmdMessage, CmdResult, PlotOutcome};
use crate::config::ensure_dir;
use crate::error::{Result, StylernizerError};
use crate::model::artifact_filename;
use crate::registry::Registry;
use crate::render::{ArtifactGuard, RenderState};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to do with each produced artifact.
#[derive(Debug, Clone)]
pub struct PlotRequest<'a> {
    pub output_dir: &'a Path,
    pub save: bool,
    pub show: bool,
}

/// Where `name` is saved under `output_dir`.
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(artifact_filename(name))
}

/// Produces every plot whose key starts with one of `filter` (all plots when
/// `None`), one after another in registration order.
///
/// Each artifact is disposed before the next plot runs, also when saving or
/// showing it failed. The first error aborts the run; files written for
/// earlier plots stay where they are.
pub fn run<S: AsRef<str>>(
    registry: &Registry,
    state: &mut RenderState,
    filter: Option<&[S]>,
    request: &PlotRequest<'_>,
) -> Result<CmdResult> {
    let names = registry.keys_matching_any_prefix(filter);
    if names.is_empty() {
        let query = match filter {
            Some(f) => f.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", "),
            None => "all plots".to_string(),
        };
        return Err(StylernizerError::not_found(query, registry.keys()));
    }

    info!("making {} plots", names.len());
    debug!("{}", names.join(", "));

    let mut outcomes = Vec::with_capacity(names.len());
    for name in &names {
        info!("plotting {}", name);
        let artifact = registry.get(name)?.invoke(state)?;
        let guard = ArtifactGuard::new(name.as_str(), artifact);

        let saved_to = if request.save {
            ensure_dir(request.output_dir)?;
            let path = output_path(request.output_dir, name);
            info!("saving to {}", path.display());
            guard.artifact().save(&path)?;
            Some(path)
        } else {
            None
        };

        if request.show {
            guard.artifact().show()?;
        }

        outcomes.push(PlotOutcome {
            name: name.clone(),
            saved_to,
            shown: request.show,
        });
    }
    info!("done");

    let mut result = CmdResult::default();
    let saved = outcomes.iter().filter(|o| o.saved_to.is_some()).count();
    if saved > 0 {
        result.add_message(CmdMessage::success(format!(
            "Saved {} plot{} to {}",
            saved,
            if saved == 1 { "" } else { "s" },
            request.output_dir.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Made {} plot{}",
            outcomes.len(),
            if outcomes.len() == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_plotted(outcomes))
}
