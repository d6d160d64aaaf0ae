//! CLI argument parsing and overrides
//!
//! # Usage
//!
//! ```bash
//! lanzar launch launch.yaml
//! lanzar launch launch.yaml --batch-size 8 --project-name svg-run-02
//! lanzar launch launch.yaml --resume ckpt/step-1000
//! lanzar validate launch.yaml --detailed
//! lanzar info launch.yaml --format json
//! lanzar preprocess --input icon.svg
//! lanzar preprocess --input-dir ./svgs --output-dir ./svgs_clean
//! ```

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use super::schema::{LaunchSpec, ModelSize};

/// Lanzar: launch orchestration for OmniSVG fine-tuning
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lanzar")]
#[command(version)]
#[command(about = "Validate, assemble, and delegate distributed fine-tuning runs")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Launch a fine-tuning run from a YAML spec
    Launch(LaunchArgs),

    /// Validate a launch spec (and the local data layout) without launching
    Validate(ValidateArgs),

    /// Display the resolved spec and derived launch plan
    Info(InfoArgs),

    /// Preprocess SVG dataset files via picosvg
    Preprocess(PreprocessArgs),
}

/// Arguments for the launch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct LaunchArgs {
    /// Path to YAML launch spec
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override model size (4B or 8B)
    #[arg(short, long)]
    pub model_size: Option<ModelSize>,

    /// Override per-device batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override maximum sequence length
    #[arg(long)]
    pub max_seq_length: Option<usize>,

    /// Override local dataset root
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override project name (auto-derived when unset everywhere)
    #[arg(short, long)]
    pub project_name: Option<String>,

    /// Resume training from checkpoint
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Override launcher worker-process count
    #[arg(short, long)]
    pub num_processes: Option<usize>,

    /// Dry run (print the launch plan but don't delegate)
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML launch spec
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML launch spec
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the preprocess command
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["input", "input_dir"])
))]
pub struct PreprocessArgs {
    /// Single SVG file to process
    #[arg(short, long, conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Output path for single-file processing (default: <stem>_processed.svg)
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Directory of SVG files for batch processing
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (default: <input_dir>_processed)
    #[arg(long, requires = "input_dir")]
    pub output_dir: Option<PathBuf>,

    /// Zoom scale factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Target viewport width
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Target viewport height
    #[arg(long, default_value_t = 200)]
    pub height: u32,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a LaunchSpec
pub fn apply_overrides(spec: &mut LaunchSpec, args: &LaunchArgs) {
    if let Some(size) = args.model_size {
        spec.model.size = size;
    }
    if let Some(batch_size) = args.batch_size {
        spec.data.batch_size = batch_size;
    }
    if let Some(max_seq_length) = args.max_seq_length {
        spec.data.max_seq_length = max_seq_length;
    }
    if let Some(data_dir) = &args.data_dir {
        spec.data.dir = data_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        spec.training.output_dir = output_dir.clone();
    }
    if let Some(project_name) = &args.project_name {
        spec.training.project_name = Some(project_name.clone());
    }
    if let Some(resume) = &args.resume {
        spec.training.resume_from_checkpoint = Some(resume.clone());
    }
    if let Some(num_processes) = args.num_processes {
        spec.launcher.num_processes = num_processes;
    }
}
