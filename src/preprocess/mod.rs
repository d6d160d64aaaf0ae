//! SVG dataset preparation
//!
//! Mirrors the launch module's delegation discipline: syntax simplification
//! (flattening groups and transforms) is handed to the external `picosvg`
//! tool, after which the root viewport is normalized to a fixed box so every
//! sample the model sees shares one coordinate frame.

mod batch;
mod picosvg;
mod viewport;

pub use batch::{process_directory, BatchReport};
pub use picosvg::simplify_svg;
pub use viewport::normalize_viewport;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for a preprocessing pass.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Zoom scale factor applied to the viewport
    pub scale: f64,

    /// Target viewport width
    pub width: u32,

    /// Target viewport height
    pub height: u32,

    /// Simplifier binary invoked per file (stdout is the simplified SVG)
    pub simplifier: PathBuf,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            width: 200,
            height: 200,
            simplifier: PathBuf::from("picosvg"),
        }
    }
}

/// Process a single SVG file: simplify via the external tool, then
/// normalize the root viewport in place.
///
/// A failed or empty simplification removes the partial output so batch
/// mirrors never accumulate junk.
pub fn process_file(input: &Path, output: &Path, opts: &PreprocessOptions) -> Result<()> {
    if opts.scale <= 0.0 {
        return Err(Error::Preprocess(format!(
            "scale must be > 0, got {}",
            opts.scale
        )));
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let result = simplify_and_normalize(input, output, opts);
    if result.is_err() && output.exists() {
        let _ = fs::remove_file(output);
    }
    result
}

fn simplify_and_normalize(input: &Path, output: &Path, opts: &PreprocessOptions) -> Result<()> {
    simplify_svg(&opts.simplifier, input, output)?;

    let metadata = fs::metadata(output)?;
    if metadata.len() == 0 {
        return Err(Error::Preprocess(format!(
            "{}: simplifier produced an empty file",
            input.display()
        )));
    }

    let content = fs::read_to_string(output)?;
    let normalized = normalize_viewport(&content, opts.scale, opts.width, opts.height)?;
    fs::write(output, normalized)?;
    Ok(())
}

/// Default output path for single-file processing: `<stem>_processed.svg`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "svg".to_string());
    input.with_file_name(format!("{stem}_processed.{ext}"))
}
