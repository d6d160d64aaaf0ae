//! Launch plan construction
//!
//! Arguments are built as discrete token vectors, never concatenated
//! strings, so paths with spaces survive the trip to the launcher intact.

use crate::config::LaunchSpec;
use std::path::PathBuf;

/// A fully assembled external invocation: launcher binary plus every token
/// after it, including the training entry point and its forwarded arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// One-line rendering for summaries and dry runs.
    pub fn rendered(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Build the argument tokens forwarded to the training entry point.
///
/// Each spec field maps to one flag; booleans map to flag presence (flash
/// attention uses an enable/disable pair, exactly one of which appears);
/// optional fields are omitted entirely when unset.
pub fn training_args(spec: &LaunchSpec, project_name: &str) -> Vec<String> {
    let mut args = Vec::new();

    args.push("--model_size".into());
    args.push(spec.model.size.to_string());
    args.push("--data_dir".into());
    args.push(spec.data.dir.display().to_string());
    args.push("--output_dir".into());
    args.push(spec.training.output_dir.display().to_string());
    args.push("--project_name".into());
    args.push(project_name.to_string());

    if spec.data.use_hf_data {
        args.push("--use_hf_data".into());
        if let Some(datasets) = &spec.data.datasets {
            args.push("--datasets".into());
            for dataset in datasets {
                args.push(dataset.clone());
            }
        }
    }

    args.push("--batch_size".into());
    args.push(spec.data.batch_size.to_string());
    args.push("--max_seq_length".into());
    args.push(spec.data.max_seq_length.to_string());
    args.push("--config_dir".into());
    args.push(spec.training.config_dir.display().to_string());

    if spec.training.use_flash_attn {
        args.push("--use_flash_attn".into());
    } else {
        args.push("--no_flash_attn".into());
    }

    if let Some(checkpoint) = &spec.training.resume_from_checkpoint {
        args.push("--resume_from_checkpoint".into());
        args.push(checkpoint.display().to_string());
    }

    args
}

/// Compose the full launcher invocation around the forwarded training args.
pub fn build_plan(spec: &LaunchSpec, project_name: &str) -> LaunchPlan {
    let mut args = vec![
        "launch".to_string(),
        "--num_processes".to_string(),
        spec.launcher.num_processes.to_string(),
        "--mixed_precision".to_string(),
        spec.launcher.mixed_precision.to_string(),
    ];

    if let Some(config_file) = &spec.launcher.config_file {
        args.push("--config_file".into());
        args.push(config_file.display().to_string());
    }

    args.push(spec.launcher.entry_point.display().to_string());
    args.extend(training_args(spec, project_name));

    LaunchPlan {
        program: spec.launcher.program.clone(),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_from(yaml: &str) -> LaunchSpec {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn contains_window(args: &[String], window: &[&str]) -> bool {
        args.windows(window.len()).any(|w| w == window)
    }

    #[test]
    fn test_training_args_basic_mapping() {
        let spec = spec_from(
            r#"
model:
  size: 4B
data:
  dir: ./data
  batch_size: 4
  max_seq_length: 2048
"#,
        );
        let args = training_args(&spec, "svg-run-01");

        assert!(contains_window(&args, &["--model_size", "4B"]));
        assert!(contains_window(&args, &["--data_dir", "./data"]));
        assert!(contains_window(&args, &["--project_name", "svg-run-01"]));
        assert!(contains_window(&args, &["--batch_size", "4"]));
        assert!(contains_window(&args, &["--max_seq_length", "2048"]));
        assert!(contains_window(&args, &["--config_dir", "./configs"]));
    }

    #[test]
    fn test_flash_attn_flags_mutually_exclusive() {
        let enabled = spec_from("data:\n  dir: ./data\n");
        let args = training_args(&enabled, "run");
        assert!(args.contains(&"--use_flash_attn".to_string()));
        assert!(!args.contains(&"--no_flash_attn".to_string()));

        let disabled = spec_from("data:\n  dir: ./data\ntraining:\n  use_flash_attn: false\n");
        let args = training_args(&disabled, "run");
        assert!(args.contains(&"--no_flash_attn".to_string()));
        assert!(!args.contains(&"--use_flash_attn".to_string()));
    }

    #[test]
    fn test_resume_flag_present_only_when_set() {
        let without = spec_from("data:\n  dir: ./data\n");
        let args = training_args(&without, "run");
        assert!(!args.contains(&"--resume_from_checkpoint".to_string()));

        let with = spec_from(
            "data:\n  dir: ./data\ntraining:\n  resume_from_checkpoint: ckpt/step-1000\n",
        );
        let args = training_args(&with, "run");
        assert!(contains_window(
            &args,
            &["--resume_from_checkpoint", "ckpt/step-1000"]
        ));
    }

    #[test]
    fn test_hf_data_args_match_expected_sequence() {
        let spec = spec_from(
            r#"
model:
  size: 4B
data:
  dir: ./data
  use_hf_data: true
  datasets: [illustration, icon]
  batch_size: 4
  max_seq_length: 2048
"#,
        );
        let args = training_args(&spec, "run");
        assert!(contains_window(
            &args,
            &[
                "--use_hf_data",
                "--datasets",
                "illustration",
                "icon",
                "--batch_size",
                "4",
                "--max_seq_length",
                "2048",
            ]
        ));
    }

    #[test]
    fn test_datasets_omitted_without_hf_data() {
        let spec = spec_from(
            "data:\n  dir: ./data\n  datasets: [icon]\n",
        );
        let args = training_args(&spec, "run");
        assert!(!args.contains(&"--use_hf_data".to_string()));
        assert!(!args.contains(&"--datasets".to_string()));
    }

    #[test]
    fn test_plan_launcher_prefix() {
        let spec = spec_from(
            r#"
data:
  dir: ./data
launcher:
  num_processes: 4
  mixed_precision: fp16
  config_file: configs/accelerate.yaml
"#,
        );
        let plan = build_plan(&spec, "run");

        assert_eq!(plan.program, PathBuf::from("accelerate"));
        assert_eq!(plan.args[0], "launch");
        assert!(contains_window(&plan.args, &["--num_processes", "4"]));
        assert!(contains_window(&plan.args, &["--mixed_precision", "fp16"]));
        assert!(contains_window(
            &plan.args,
            &["--config_file", "configs/accelerate.yaml"]
        ));
        // entry point comes before the forwarded args
        let entry = plan.args.iter().position(|a| a == "train.py").unwrap();
        let first_forwarded = plan.args.iter().position(|a| a == "--model_size").unwrap();
        assert!(entry < first_forwarded);
    }

    #[test]
    fn test_plan_omits_config_file_when_unset() {
        let spec = spec_from("data:\n  dir: ./data\n");
        let plan = build_plan(&spec, "run");
        assert!(!plan.args.contains(&"--config_file".to_string()));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let spec = spec_from("data:\n  dir: ./data\n");
        assert_eq!(build_plan(&spec, "run"), build_plan(&spec, "run"));
    }

    #[test]
    fn test_rendered_single_line() {
        let plan = LaunchPlan {
            program: PathBuf::from("accelerate"),
            args: vec!["launch".into(), "--num_processes".into(), "8".into()],
        };
        assert_eq!(plan.rendered(), "accelerate launch --num_processes 8");
    }
}
