//! YAML schema definitions for the declarative launch configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete launch specification
///
/// Immutable for the duration of one invocation: constructed once from YAML,
/// adjusted by CLI overrides, then only read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Model configuration
    #[serde(default)]
    pub model: ModelSpec,

    /// Data configuration
    pub data: DataSpec,

    /// Training run parameters
    #[serde(default)]
    pub training: TrainingSpec,

    /// Distributed launcher parameters
    #[serde(default)]
    pub launcher: LauncherSpec,
}

/// Model selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Parameter-count variant of the base model
    #[serde(default)]
    pub size: ModelSize,
}

/// Data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSpec {
    /// Local dataset root (expects train_meta.csv, val_meta.csv, svg/)
    pub dir: PathBuf,

    /// Pull datasets from the hosted hub instead of the local filesystem
    #[serde(default)]
    pub use_hf_data: bool,

    /// Hosted dataset subsets to pull (forwarded only when use_hf_data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<String>>,

    /// Per-device batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Maximum token sequence length
    #[serde(default = "default_max_seq_length")]
    pub max_seq_length: usize,
}

/// Training run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSpec {
    /// Output directory for checkpoints and logs
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory holding model/deepspeed config files
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Run name; auto-derived from model size and timestamp when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Enable flash attention kernels
    #[serde(default = "default_true")]
    pub use_flash_attn: bool,

    /// Checkpoint to resume from (flag absent when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_from_checkpoint: Option<PathBuf>,
}

impl Default for TrainingSpec {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            config_dir: default_config_dir(),
            project_name: None,
            use_flash_attn: default_true(),
            resume_from_checkpoint: None,
        }
    }
}

/// Distributed launcher parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherSpec {
    /// Launcher binary
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Training entry point handed to the launcher
    #[serde(default = "default_entry_point")]
    pub entry_point: PathBuf,

    /// Number of worker processes to spawn
    #[serde(default = "default_num_processes")]
    pub num_processes: usize,

    /// Mixed-precision mode
    #[serde(default)]
    pub mixed_precision: MixedPrecision,

    /// External launcher config file (flag absent when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

impl Default for LauncherSpec {
    fn default() -> Self {
        Self {
            program: default_program(),
            entry_point: default_entry_point(),
            num_processes: default_num_processes(),
            mixed_precision: MixedPrecision::default(),
            config_file: None,
        }
    }
}

/// Base model parameter-count variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelSize {
    #[default]
    #[serde(rename = "4B")]
    Size4B,
    #[serde(rename = "8B")]
    Size8B,
}

impl ModelSize {
    /// Spelling used in forwarded arguments and derived names
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Size4B => "4B",
            ModelSize::Size8B => "8B",
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "4B" => Ok(ModelSize::Size4B),
            "8B" => Ok(ModelSize::Size8B),
            _ => Err(format!("Unknown model size: {s}. Valid sizes: 4B, 8B")),
        }
    }
}

/// Mixed-precision mode passed to the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedPrecision {
    No,
    Fp16,
    #[default]
    Bf16,
}

impl MixedPrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            MixedPrecision::No => "no",
            MixedPrecision::Fp16 => "fp16",
            MixedPrecision::Bf16 => "bf16",
        }
    }
}

impl std::fmt::Display for MixedPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MixedPrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" | "none" => Ok(MixedPrecision::No),
            "fp16" => Ok(MixedPrecision::Fp16),
            "bf16" => Ok(MixedPrecision::Bf16),
            _ => Err(format!(
                "Unknown mixed-precision mode: {s}. Valid modes: no, fp16, bf16"
            )),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_batch_size() -> usize {
    4
}

fn default_max_seq_length() -> usize {
    2048
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./outputs")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("./configs")
}

fn default_program() -> PathBuf {
    PathBuf::from("accelerate")
}

fn default_entry_point() -> PathBuf {
    PathBuf::from("train.py")
}

fn default_num_processes() -> usize {
    8
}
