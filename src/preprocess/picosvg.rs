//! Delegation to the external SVG simplifier

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run the simplifier over one file, writing its stdout to `output`.
///
/// The tool is opaque: only its exit status is interpreted. Non-zero leaves
/// the caller to clean up whatever partial output was written.
pub fn simplify_svg(program: &Path, input: &Path, output: &Path) -> Result<()> {
    let out_file = fs::File::create(output)?;

    let status = Command::new(program)
        .arg(input)
        .stdout(Stdio::from(out_file))
        .status()
        .map_err(|e| {
            Error::Preprocess(format!(
                "failed to run {}: {e} (is it installed?)",
                program.display()
            ))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Preprocess(format!(
            "{} exited with {} for {}",
            program.display(),
            status,
            input.display()
        )))
    }
}
