//! # Lanzar: Launch Orchestration for OmniSVG Fine-Tuning
//!
//! Lanzar assembles and validates everything a distributed fine-tuning run
//! needs before a single GPU is touched: it loads a declarative YAML launch
//! spec, applies CLI overrides, checks the local dataset layout, derives a
//! project name, builds the launcher and training argument lists as
//! structured token vectors, and finally delegates to the external
//! distributed launcher, propagating its exit status verbatim.
//!
//! ## Architecture
//!
//! - **config**: Declarative YAML launch spec, CLI parsing, validation
//! - **launch**: Plan building, project-name derivation, data preflight,
//!   process delegation
//! - **preprocess**: SVG dataset preparation via the external `picosvg` tool

pub mod config;
pub mod launch;
pub mod preprocess;

pub mod error;

// Re-export commonly used types
pub use config::{load_spec, LaunchSpec};
pub use error::{Error, Result};
pub use launch::LaunchPlan;
