//! Launch spec validation

use super::schema::LaunchSpec;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid max sequence length: {0} (must be > 0)")]
    InvalidMaxSeqLength(usize),

    #[error("Invalid process count: {0} (must be > 0)")]
    InvalidNumProcesses(usize),

    #[error("Empty dataset list (omit `datasets` or name at least one subset)")]
    EmptyDatasetList,
}

/// Validate a launch specification
///
/// Checks numeric values only; enum fields are already constrained by type
/// and filesystem preconditions belong to the launch preflight.
pub fn validate_spec(spec: &LaunchSpec) -> Result<(), ValidationError> {
    if spec.data.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(spec.data.batch_size));
    }

    if spec.data.max_seq_length == 0 {
        return Err(ValidationError::InvalidMaxSeqLength(
            spec.data.max_seq_length,
        ));
    }

    if spec.launcher.num_processes == 0 {
        return Err(ValidationError::InvalidNumProcesses(
            spec.launcher.num_processes,
        ));
    }

    if let Some(datasets) = &spec.data.datasets {
        if datasets.is_empty() {
            return Err(ValidationError::EmptyDatasetList);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::*;
    use std::path::PathBuf;

    fn create_valid_spec() -> LaunchSpec {
        LaunchSpec {
            model: ModelSpec::default(),
            data: DataSpec {
                dir: PathBuf::from("./data"),
                use_hf_data: false,
                datasets: None,
                batch_size: 4,
                max_seq_length: 2048,
            },
            training: TrainingSpec::default(),
            launcher: LauncherSpec::default(),
        }
    }

    #[test]
    fn test_valid_spec() {
        let spec = create_valid_spec();
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_invalid_batch_size() {
        let mut spec = create_valid_spec();
        spec.data.batch_size = 0;
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBatchSize(0)));
    }

    #[test]
    fn test_invalid_max_seq_length() {
        let mut spec = create_valid_spec();
        spec.data.max_seq_length = 0;
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidMaxSeqLength(0)));
    }

    #[test]
    fn test_invalid_num_processes() {
        let mut spec = create_valid_spec();
        spec.launcher.num_processes = 0;
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumProcesses(0)));
    }

    #[test]
    fn test_empty_dataset_list() {
        let mut spec = create_valid_spec();
        spec.data.datasets = Some(vec![]);
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyDatasetList));
    }

    #[test]
    fn test_named_datasets_are_valid() {
        let mut spec = create_valid_spec();
        spec.data.datasets = Some(vec!["icon".to_string()]);
        assert!(validate_spec(&spec).is_ok());
    }
}
