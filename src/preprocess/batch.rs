//! Batch directory processing

use super::{process_file, PreprocessOptions};
use crate::error::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome counts for a batch pass.
///
/// Batch mode keeps going past individual failures; the report says how
/// many files made it through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Process every `.svg` file under `input_dir`, mirroring relative paths
/// into `output_dir`.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    opts: &PreprocessOptions,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for entry in WalkDir::new(input_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let input = entry.path();
        if input.extension().and_then(|s| s.to_str()) != Some("svg") {
            continue;
        }

        let relative = input.strip_prefix(input_dir).unwrap_or(input);
        let output = output_dir.join(relative);

        match process_file(input, &output, opts) {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                eprintln!("Skipping {}: {e}", input.display());
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
