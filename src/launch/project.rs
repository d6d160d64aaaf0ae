//! Project-name derivation

use crate::config::LaunchSpec;
use chrono::Local;

/// Resolve the project name for this run.
///
/// An explicit non-empty name is used verbatim; otherwise one is synthesized
/// from the model size and the current local time. Second granularity is
/// enough to keep output directories from colliding across runs.
pub fn derive_project_name(spec: &LaunchSpec) -> String {
    match spec.training.project_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!(
            "omnisvg-{}-{}",
            spec.model.size,
            Local::now().format("%Y%m%d-%H%M%S")
        ),
    }
}
