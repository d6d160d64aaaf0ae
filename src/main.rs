//! Lanzar CLI
//!
//! Single-command launch orchestration for OmniSVG fine-tuning.
//!
//! # Usage
//!
//! ```bash
//! # Launch a run from a spec
//! lanzar launch launch.yaml
//!
//! # Launch with overrides
//! lanzar launch launch.yaml --batch-size 8 --project-name svg-run-02
//!
//! # Validate the spec and local data layout
//! lanzar validate launch.yaml --detailed
//!
//! # Show the resolved spec and derived command
//! lanzar info launch.yaml --format json
//!
//! # Preprocess an SVG dataset
//! lanzar preprocess --input-dir ./svgs --output-dir ./svgs_clean
//! ```

use clap::Parser;
use lanzar::config::{
    apply_overrides, load_spec, validate_spec, Cli, Command, InfoArgs, LaunchArgs, OutputFormat,
    PreprocessArgs, ValidateArgs,
};
use lanzar::error::{Error, Result};
use lanzar::launch::{build_plan, check_local_data, derive_project_name, execute};
use lanzar::preprocess::{default_output_path, process_directory, process_file, PreprocessOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let result = match cli.command {
        Command::Launch(args) => run_launch(args, log_level),
        Command::Validate(args) => run_validate(args, log_level),
        Command::Info(args) => run_info(args, log_level),
        Command::Preprocess(args) => run_preprocess(args, log_level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

fn run_launch(args: LaunchArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Lanzar: launching from {}", args.config.display()),
    );

    let mut spec = load_spec(&args.config)?;
    apply_overrides(&mut spec, &args);
    // overrides can reintroduce invalid values
    validate_spec(&spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;

    let project_name = derive_project_name(&spec);
    let plan = build_plan(&spec, &project_name);

    log(level, LogLevel::Normal, "Configuration:");
    log(
        level,
        LogLevel::Normal,
        &format!("  Model size: {}", spec.model.size),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Project name: {project_name}"),
    );
    if spec.data.use_hf_data {
        let datasets = spec
            .data
            .datasets
            .as_deref()
            .map(|d| d.join(" "))
            .unwrap_or_else(|| "(all)".to_string());
        log(
            level,
            LogLevel::Normal,
            &format!("  Data: hosted hub ({datasets})"),
        );
    } else {
        log(
            level,
            LogLevel::Normal,
            &format!("  Data: {}", spec.data.dir.display()),
        );
    }
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  Batch size: {}, max seq length: {}",
            spec.data.batch_size, spec.data.max_seq_length
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Output dir: {}", spec.training.output_dir.display()),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  Launcher: {} processes, {} precision",
            spec.launcher.num_processes, spec.launcher.mixed_precision
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Flash attention: {}", spec.training.use_flash_attn),
    );
    if let Some(ckpt) = &spec.training.resume_from_checkpoint {
        log(
            level,
            LogLevel::Normal,
            &format!("  Resuming from: {}", ckpt.display()),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!("  Command: {}", plan.rendered()),
    );

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run - launch plan:");
        println!("{}", plan.rendered());
        return Ok(());
    }

    check_local_data(&spec)?;

    execute(&plan)?;

    log(level, LogLevel::Normal, "Training run finished");
    Ok(())
}

fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating spec: {}", args.config.display()),
    );

    let spec = load_spec(&args.config)?;
    check_local_data(&spec)?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        println!();
        println!("Configuration Summary:");
        println!("  Model size: {}", spec.model.size);
        println!();
        if spec.data.use_hf_data {
            println!("  Data source: hosted hub");
            if let Some(datasets) = &spec.data.datasets {
                println!("  Datasets: {}", datasets.join(", "));
            }
        } else {
            println!("  Data dir: {}", spec.data.dir.display());
            println!("    train_meta.csv: present");
            println!("    val_meta.csv: present");
            println!("    svg/: present");
        }
        println!("  Batch size: {}", spec.data.batch_size);
        println!("  Max seq length: {}", spec.data.max_seq_length);
        println!();
        println!("  Output dir: {}", spec.training.output_dir.display());
        println!("  Config dir: {}", spec.training.config_dir.display());
        if let Some(name) = &spec.training.project_name {
            println!("  Project name: {name}");
        } else {
            println!("  Project name: (auto-derived at launch)");
        }
        println!("  Flash attention: {}", spec.training.use_flash_attn);
        if let Some(ckpt) = &spec.training.resume_from_checkpoint {
            println!("  Resume checkpoint: {}", ckpt.display());
        }
        println!();
        println!("  Launcher: {}", spec.launcher.program.display());
        println!("  Entry point: {}", spec.launcher.entry_point.display());
        println!("  Processes: {}", spec.launcher.num_processes);
        println!("  Mixed precision: {}", spec.launcher.mixed_precision);
        if let Some(cfg) = &spec.launcher.config_file {
            println!("  Launcher config: {}", cfg.display());
        }
    }

    Ok(())
}

fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let spec = load_spec(&args.config)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Model size: {}", spec.model.size);
            println!("Batch size: {}", spec.data.batch_size);
            println!("Max seq length: {}", spec.data.max_seq_length);
            println!(
                "Data: {}",
                if spec.data.use_hf_data {
                    "hosted hub".to_string()
                } else {
                    spec.data.dir.display().to_string()
                }
            );

            let project_name = derive_project_name(&spec);
            let plan = build_plan(&spec, &project_name);
            println!();
            println!("Derived command:");
            println!("{}", plan.rendered());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| Error::Config(format!("JSON serialization error: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| Error::Config(format!("YAML serialization error: {e}")))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

fn run_preprocess(args: PreprocessArgs, level: LogLevel) -> Result<()> {
    let opts = PreprocessOptions {
        scale: args.scale,
        width: args.width,
        height: args.height,
        ..PreprocessOptions::default()
    };

    if let Some(input) = &args.input {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));

        log(
            level,
            LogLevel::Normal,
            &format!("Preprocessing {} -> {}", input.display(), output.display()),
        );

        process_file(input, &output, &opts)?;

        log(
            level,
            LogLevel::Normal,
            &format!("Processing complete: {}", output.display()),
        );
        return Ok(());
    }

    // clap guarantees exactly one source is set
    let input_dir = args
        .input_dir
        .as_deref()
        .ok_or_else(|| Error::Preprocess("no input source given".to_string()))?;
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        let mut name = input_dir.as_os_str().to_os_string();
        name.push("_processed");
        name.into()
    });

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Preprocessing directory {} -> {}",
            input_dir.display(),
            output_dir.display()
        ),
    );

    let report = process_directory(input_dir, &output_dir, &opts)?;

    log(level, LogLevel::Normal, "Batch processing complete:");
    log(
        level,
        LogLevel::Normal,
        &format!("  Success: {}", report.succeeded),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Failed:  {}", report.failed),
    );

    Ok(())
}
