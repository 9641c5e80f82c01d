//! Run options and step planning
//!
//! Conflicting flags resolve in a fixed priority order:
//! `list-only` > `clean-only` > `skip-configure` / `skip-build` > `rebuild`
//! (`--help` is resolved before any of this by the CLI layer). The priority
//! lives in one place, [`plan_steps`], so it is independently testable.

use std::fmt;

/// Options derived from the command-line flags
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Include presets regardless of `COPY_BUILD`
    pub include_all: bool,
    /// Print the selection instead of executing
    pub list_only: bool,
    /// Run only the clean step
    pub clean_only: bool,
    /// Omit the configure step
    pub skip_configure: bool,
    /// Omit the build step
    pub skip_build: bool,
    /// Ask the build step to clean before building
    pub rebuild: bool,
}

/// One step of the per-preset state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Configure,
    Build { clean_first: bool },
    Clean,
}

impl StepKind {
    /// Step name as shown in banners
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Configure => "configure",
            StepKind::Build { .. } => "build",
            StepKind::Clean => "clean",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plan the steps to run for each selected preset.
///
/// `clean-only` suppresses configure and build entirely; otherwise the skip
/// flags drop their step, and `rebuild` only matters when the build step
/// actually runs.
pub fn plan_steps(options: &RunOptions) -> Vec<StepKind> {
    if options.clean_only {
        return vec![StepKind::Clean];
    }

    let mut steps = Vec::new();
    if !options.skip_configure {
        steps.push(StepKind::Configure);
    }
    if !options.skip_build {
        steps.push(StepKind::Build {
            clean_first: options.rebuild,
        });
    }
    steps
}
