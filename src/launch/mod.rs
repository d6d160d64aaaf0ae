//! Launch plan construction and delegation
//!
//! The pipeline is strictly linear: derive the project name, preflight the
//! local data layout, build the launch plan, delegate to the external
//! launcher, and propagate its exit status. The plan is a pure function of
//! the spec, so everything up to the spawn is testable without a GPU in
//! sight.

mod command;
mod preflight;
mod project;
mod runner;

pub use command::{build_plan, training_args, LaunchPlan};
pub use preflight::check_local_data;
pub use project::derive_project_name;
pub use runner::execute;
