//! Command execution with optional timeout and output capture
//!
//! The preset runner invokes cmake with inherited stdio so the build tool's
//! own output is what the user sees; captured mode exists for callers that
//! need to inspect output (and for tests).

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::TaskError;

/// Options for command execution
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Working directory for the command
    pub working_dir: Option<PathBuf>,
    /// Environment variables to set
    pub env: HashMap<String, String>,
    /// Timeout duration (None = wait forever)
    pub timeout: Option<Duration>,
    /// Capture output instead of inheriting the parent's stdio
    pub capture_output: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            working_dir: None,
            env: HashMap::new(),
            timeout: None,
            capture_output: true,
        }
    }
}

impl ExecOptions {
    /// Create options with a working directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Inherit the parent's stdout/stderr instead of capturing
    pub fn streaming() -> Self {
        Self {
            capture_output: false,
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an environment variable
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// Result of command execution
#[derive(Debug)]
pub struct ExecResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code if available (None when killed by a signal)
    pub exit_code: Option<i32>,
    /// Standard output (empty when output is inherited)
    pub stdout: String,
    /// Standard error (empty when output is inherited)
    pub stderr: String,
    /// Duration of execution
    pub duration: Duration,
}

/// Execute a command and wait for it to exit.
///
/// # Errors
/// * `TaskError::SpawnFailed` - if the command couldn't be spawned
/// * `TaskError::Timeout` - if the command timed out (when a timeout is set)
pub async fn exec_command(
    program: &str,
    args: &[&str],
    options: &ExecOptions,
) -> Result<ExecResult, TaskError> {
    let start = Instant::now();
    let command_str = format!("{} {}", program, args.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.kill_on_drop(true); // Kill process if future is dropped

    if options.capture_output {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    if let Some(ref dir) = options.working_dir {
        cmd.current_dir(dir);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    tracing::debug!("Executing: {}", command_str);

    let child = cmd.spawn().map_err(|e| TaskError::SpawnFailed {
        command: command_str.clone(),
        error: e.to_string(),
    })?;

    let wait = wait_for_exit(child, options.capture_output);

    let result = if let Some(timeout_duration) = options.timeout {
        match timeout(timeout_duration, wait).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(TaskError::Timeout {
                    command: command_str,
                    timeout_secs: timeout_duration.as_secs(),
                });
            }
        }
    } else {
        wait.await?
    };

    let duration = start.elapsed();

    Ok(ExecResult {
        success: result.exit_code == Some(0),
        exit_code: result.exit_code,
        stdout: result.stdout,
        stderr: result.stderr,
        duration,
    })
}

/// Internal result from waiting for a child process
struct WaitResult {
    exit_code: Option<i32>,
    stdout: String,
    stderr: String,
}

/// Wait for a child process, capturing output when requested
async fn wait_for_exit(
    child: tokio::process::Child,
    capture_output: bool,
) -> Result<WaitResult, TaskError> {
    if capture_output {
        let output = child.wait_with_output().await.map_err(TaskError::Io)?;
        Ok(WaitResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    } else {
        let mut child = child;
        let status = child.wait().await.map_err(TaskError::Io)?;
        Ok(WaitResult {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Execute a command synchronously (blocking wrapper for sync contexts)
///
/// The runner's control flow is deliberately sequential: the next step only
/// starts after the previous child's exit status is known.
pub fn exec_command_sync(
    program: &str,
    args: &[&str],
    options: &ExecOptions,
) -> Result<ExecResult, TaskError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            TaskError::Io(std::io::Error::other(format!(
                "Failed to create runtime: {}",
                e
            )))
        })?;

    rt.block_on(exec_command(program, args, options))
}
