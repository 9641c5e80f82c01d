//! Build tool invocation
//!
//! [`BuildTool`] is the seam between the runner's control flow and the
//! external build tool; [`CmakeTool`] is the real implementation, invoking
//! cmake with inherited stdio and a blocking wait per step.

use crate::error::{suggest_install, TaskError};
use crate::executor::{exec_command_sync, ExecOptions};

/// Exit status of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    /// Whether the step succeeded (exit code 0)
    pub success: bool,
    /// Exit code if available
    pub exit_code: Option<i32>,
}

impl StepStatus {
    /// A successful status
    pub fn ok() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
        }
    }

    /// A failed status with the given exit code
    pub fn failed(exit_code: Option<i32>) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// External build tool operations, one per step kind
#[cfg_attr(test, mockall::automock)]
pub trait BuildTool: Send + Sync {
    /// Run the configure step for a configure preset
    fn configure(&self, configure_preset: &str) -> Result<StepStatus, TaskError>;

    /// Run the build step for a build preset, optionally cleaning first
    fn build(&self, build_preset: &str, clean_first: bool) -> Result<StepStatus, TaskError>;

    /// Run the clean step for a build preset
    fn clean(&self, build_preset: &str) -> Result<StepStatus, TaskError>;
}

/// CMake implementation of [`BuildTool`]
pub struct CmakeTool {
    command: String,
}

impl CmakeTool {
    /// Create a tool invoking the given cmake command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Verify the cmake command resolves on PATH before any step runs
    pub fn check_available(&self) -> Result<(), TaskError> {
        which::which(&self.command).map_err(|_| TaskError::ToolNotFound {
            tool: self.command.clone(),
            suggestion: suggest_install(&self.command),
        })?;
        Ok(())
    }

    /// Arguments for the configure step
    pub fn configure_args(configure_preset: &str) -> Vec<String> {
        vec!["--preset".to_string(), configure_preset.to_string()]
    }

    /// Arguments for the build step
    pub fn build_args(build_preset: &str, clean_first: bool) -> Vec<String> {
        let mut args = vec!["--build".to_string()];
        if clean_first {
            args.push("--clean-first".to_string());
        }
        args.push("--preset".to_string());
        args.push(build_preset.to_string());
        args
    }

    /// Arguments for the clean step
    pub fn clean_args(build_preset: &str) -> Vec<String> {
        vec![
            "--build".to_string(),
            "--target".to_string(),
            "clean".to_string(),
            "--preset".to_string(),
            build_preset.to_string(),
        ]
    }

    fn invoke(&self, args: Vec<String>) -> Result<StepStatus, TaskError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = exec_command_sync(&self.command, &args, &ExecOptions::streaming())?;

        Ok(StepStatus {
            success: result.success,
            exit_code: result.exit_code,
        })
    }
}

impl BuildTool for CmakeTool {
    fn configure(&self, configure_preset: &str) -> Result<StepStatus, TaskError> {
        self.invoke(Self::configure_args(configure_preset))
    }

    fn build(&self, build_preset: &str, clean_first: bool) -> Result<StepStatus, TaskError> {
        self.invoke(Self::build_args(build_preset, clean_first))
    }

    fn clean(&self, build_preset: &str) -> Result<StepStatus, TaskError> {
        self.invoke(Self::clean_args(build_preset))
    }
}
