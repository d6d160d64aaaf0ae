//! Declarative YAML launch configuration
//!
//! This module provides the declarative launch spec for OmniSVG fine-tuning
//! runs, plus the CLI that overrides it.
//!
//! # Example
//!
//! ```yaml
//! model:
//!   size: 4B
//!
//! data:
//!   dir: ./data
//!   batch_size: 4
//!   max_seq_length: 2048
//!
//! training:
//!   output_dir: ./outputs
//!   use_flash_attn: true
//!
//! launcher:
//!   num_processes: 8
//!   mixed_precision: bf16
//! ```

mod cli;
mod schema;
mod spec_io;
mod validate;

#[cfg(test)]
mod tests;


pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, LaunchArgs, OutputFormat, PreprocessArgs,
    ValidateArgs,
};
pub use schema::{
    DataSpec, LaunchSpec, LauncherSpec, MixedPrecision, ModelSize, ModelSpec, TrainingSpec,
};
pub use spec_io::load_spec;
pub use validate::{validate_spec, ValidationError};
