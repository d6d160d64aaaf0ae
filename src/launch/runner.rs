//! Delegated process execution

use super::command::LaunchPlan;
use crate::error::{Error, Result};
use std::process::Command;

/// Run the launch plan as a single blocking external call.
///
/// The launcher and training program are opaque: nothing of theirs is
/// parsed or interpreted beyond the final exit status, which is propagated
/// verbatim through [`Error::DelegatedProcessFailure`].
pub fn execute(plan: &LaunchPlan) -> Result<()> {
    let status = Command::new(&plan.program).args(&plan.args).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::DelegatedProcessFailure {
            code: status.code(),
        })
    }
}
