//! Integration tests for the config module

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_end_to_end_spec_loading() {
    let yaml = r#"
model:
  size: 8B

data:
  dir: /datasets/omnisvg
  use_hf_data: true
  datasets: [illustration, icon]
  batch_size: 16
  max_seq_length: 4096

training:
  output_dir: ./runs
  project_name: svg-run-01
  use_flash_attn: false

launcher:
  num_processes: 4
  mixed_precision: fp16
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();

    // Should parse and validate successfully
    let spec = load_spec(temp_file.path()).unwrap();

    assert_eq!(spec.model.size, ModelSize::Size8B);
    assert!(spec.data.use_hf_data);
    assert_eq!(spec.data.batch_size, 16);
    assert_eq!(spec.training.project_name.as_deref(), Some("svg-run-01"));
    assert!(!spec.training.use_flash_attn);
    assert_eq!(spec.launcher.num_processes, 4);
    assert_eq!(spec.launcher.mixed_precision, MixedPrecision::Fp16);
}

#[test]
fn test_minimal_spec_applies_defaults() {
    let yaml = r#"
data:
  dir: ./data
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();

    let spec = load_spec(temp_file.path()).unwrap();

    assert_eq!(spec.model.size, ModelSize::Size4B);
    assert_eq!(spec.data.batch_size, 4);
    assert_eq!(spec.data.max_seq_length, 2048);
    assert!(spec.training.project_name.is_none());
    assert!(spec.training.resume_from_checkpoint.is_none());
    assert_eq!(spec.launcher.mixed_precision, MixedPrecision::Bf16);
}

#[test]
fn test_load_rejects_zero_batch_size() {
    let yaml = r#"
data:
  dir: ./data
  batch_size: 0
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();

    assert!(load_spec(temp_file.path()).is_err());
}
