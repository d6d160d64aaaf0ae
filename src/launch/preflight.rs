//! Local dataset layout preflight

use crate::config::LaunchSpec;
use crate::error::{Error, Result};

/// Metadata files expected at the dataset root.
const REQUIRED_META_FILES: [&str; 2] = ["train_meta.csv", "val_meta.csv"];

/// Directory of raw SVG sources expected at the dataset root.
const SVG_DIR: &str = "svg";

/// Verify the local dataset layout before launching.
///
/// Only applies when local data is selected; with `use_hf_data` the hosted
/// hub is authoritative and nothing is checked here. Halts on the first
/// missing path so the diagnostic names exactly one artifact.
pub fn check_local_data(spec: &LaunchSpec) -> Result<()> {
    if spec.data.use_hf_data {
        return Ok(());
    }

    for meta in REQUIRED_META_FILES {
        let path = spec.data.dir.join(meta);
        if !path.is_file() {
            return Err(Error::MissingDataFile(path));
        }
    }

    let svg_dir = spec.data.dir.join(SVG_DIR);
    if !svg_dir.is_dir() {
        return Err(Error::MissingDataDirectory(svg_dir));
    }

    Ok(())
}
