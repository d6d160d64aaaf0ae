//! Error types for lanzar

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required data file is missing: {0}")]
    MissingDataFile(PathBuf),

    #[error("Required data directory is missing: {0}")]
    MissingDataDirectory(PathBuf),

    #[error("{}", delegated_failure_msg(.code))]
    DelegatedProcessFailure { code: Option<i32> },

    #[error("Preprocessing failed: {0}")]
    Preprocess(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn delegated_failure_msg(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("Delegated launcher exited with status {c}"),
        None => "Delegated launcher terminated by signal".to_string(),
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Preflight and configuration failures exit 1; a delegated failure
    /// propagates the launcher's own status verbatim.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::DelegatedProcessFailure { code: Some(c) } => u8::try_from(*c).unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_exit_code() {
        let err = Error::MissingDataFile(PathBuf::from("data/train_meta.csv"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_delegated_exit_code_propagates() {
        let err = Error::DelegatedProcessFailure { code: Some(42) };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn test_delegated_signal_exit_code() {
        let err = Error::DelegatedProcessFailure { code: None };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_path_in_message() {
        let err = Error::MissingDataDirectory(PathBuf::from("data/svg"));
        assert!(err.to_string().contains("data/svg"));
    }
}
