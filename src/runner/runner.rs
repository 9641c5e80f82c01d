//! Sequential preset execution
//!
//! Runs the planned steps for each selected preset in order, one child
//! process at a time, aborting the whole run on the first non-zero exit.
//! There is no rollback; steps are idempotent at the granularity of
//! "rerun the whole step".

use crate::error::TaskError;
use crate::preset::BuildPreset;

use super::banner::print_banner;
use super::steps::{plan_steps, RunOptions, StepKind};
use super::tool::BuildTool;

/// Message printed when the selection is empty
pub const NO_PRESETS_MESSAGE: &str = "No build presets available given the current arguments.";

/// Runs configure/build/clean steps for a selection of build presets
pub struct PresetRunner<'a> {
    tool: &'a dyn BuildTool,
}

impl<'a> PresetRunner<'a> {
    /// Create a runner driving the given build tool
    pub fn new(tool: &'a dyn BuildTool) -> Self {
        Self { tool }
    }

    /// Run the planned steps for every selected preset, in selection order.
    ///
    /// Each step is announced with a banner
    /// (`<configurePreset> (<step> - task <i+1> of <N>)`) and awaited before
    /// the next starts. Returns `TaskError::StepFailed` for the first step
    /// that exits non-zero; presets after it are never attempted.
    pub fn run(&self, presets: &[&BuildPreset], options: &RunOptions) -> Result<(), TaskError> {
        let steps = plan_steps(options);
        let total = presets.len();

        for (index, preset) in presets.iter().enumerate() {
            for step in &steps {
                let message = format!(
                    "{} ({} - task {} of {})",
                    preset.configure_preset,
                    step.label(),
                    index + 1,
                    total
                );
                print_banner(&message);
                tracing::debug!(preset = %preset.name, step = %step, "running step");

                let status = match step {
                    StepKind::Configure => self.tool.configure(&preset.configure_preset),
                    StepKind::Build { clean_first } => {
                        self.tool.build(&preset.name, *clean_first)
                    }
                    StepKind::Clean => self.tool.clean(&preset.name),
                }?;

                if !status.success {
                    return Err(TaskError::StepFailed {
                        preset: preset.name.clone(),
                        step: step.label().to_string(),
                        exit_code: status.exit_code,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Render the `--list-only` output: a header and one `[index] name` line per
/// selected preset, 1-based.
pub fn render_preset_list(presets: &[&BuildPreset]) -> String {
    let mut out = format!(
        "The following {} presets will be processed:\n",
        presets.len()
    );
    for (index, preset) in presets.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", index + 1, preset.name));
    }
    out
}
