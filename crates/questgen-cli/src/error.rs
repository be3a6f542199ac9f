//! CLI exit codes.
//!
//! - 0: Success
//! - 1: Loading failed (network, missing artifact, loader panic)
//! - 2: Invalid configuration or device

use std::process::ExitCode;

use questgen_models::{ErrorCategory, ModelError};

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// A model or resource could not be fetched or loaded.
    LoadFailed = 1,
    /// Configuration rejected before anything was fetched.
    ConfigInvalid = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&ModelError> for CliExitCode {
    fn from(err: &ModelError) -> Self {
        match err.category() {
            ErrorCategory::Config => CliExitCode::ConfigInvalid,
            ErrorCategory::Network | ErrorCategory::Artifact | ErrorCategory::Runtime => {
                CliExitCode::LoadFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questgen_models::{LoadTask, ModelFamily, TaskFailure};

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(CliExitCode::Success), 0);
        assert_eq!(i32::from(CliExitCode::LoadFailed), 1);
        assert_eq!(i32::from(CliExitCode::ConfigInvalid), 2);
    }

    #[test]
    fn test_config_errors_map_to_2() {
        let err = ModelError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(CliExitCode::from(&err), CliExitCode::ConfigInvalid);

        let err = ModelError::DeviceError {
            message: "no cuda".to_string(),
        };
        assert_eq!(CliExitCode::from(&err), CliExitCode::ConfigInvalid);
    }

    #[test]
    fn test_load_errors_map_to_1() {
        let err = ModelError::NotCached {
            repo_id: "p208p2002/qmst-qgg".to_string(),
            filename: "config.json".to_string(),
            origin: "hub-offline",
        };
        assert_eq!(CliExitCode::from(&err), CliExitCode::LoadFailed);

        let err = ModelError::StartupFailed {
            failures: vec![TaskFailure {
                task: LoadTask::Family(ModelFamily::EnglishDg),
                error: ModelError::WeightsError {
                    repo_id: "voidful/bart-distractor-generation".to_string(),
                    message: "empty".to_string(),
                },
            }],
        };
        assert_eq!(CliExitCode::from(&err), CliExitCode::LoadFailed);
    }
}
