//! cmakepilot CLI entry point
//!
//! Usage:
//!   cmakepilot                  Configure and build the selected presets
//!   cmakepilot --list-only      List the presets that would be processed
//!   cmakepilot --clean-only     Only clean the targets
//!   cmakepilot fmt              Reformat source files in place

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use cmakepilot::cli::{Cli, Commands, FmtArgs};
use cmakepilot::config::{load_settings, Settings};
use cmakepilot::error::{suggest_fix, TaskError};
use cmakepilot::format::{sweep, SweepOptions};
use cmakepilot::preset::{discover_catalog, load_catalog_file, select_build_presets, PresetCatalog};
use cmakepilot::runner::{render_preset_list, CmakeTool, PresetRunner, NO_PRESETS_MESSAGE};

fn main() -> ExitCode {
    // The CLI contract is exit 0 for --help/--version and exit 1 for
    // argument validation failures, so clap's default exit code of 2 is
    // dispatched explicitly here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    cmakepilot::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            if let Some(hint) = hint_for(&e) {
                eprintln!("{}: {}", "hint".yellow().bold(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Actionable hint for tool lookup and spawn failures, when one is known
fn hint_for(error: &anyhow::Error) -> Option<String> {
    match error.downcast_ref::<TaskError>()? {
        TaskError::ToolNotFound { suggestion, .. } => suggestion.clone(),
        TaskError::SpawnFailed { command, error } => suggest_fix(command, error),
        _ => None,
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Fmt(args)) => run_sweep(args, settings),
        None => run_presets(&cli, &settings),
    }
}

/// Select and process the build presets according to the flags
fn run_presets(cli: &Cli, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(cli.presets.as_deref(), settings)?;
    let options = cli.run_options();

    let selected = select_build_presets(&catalog, options.include_all);

    if selected.is_empty() {
        println!("{}", NO_PRESETS_MESSAGE);
        return Ok(());
    }

    // list-only takes precedence over every execution flag
    if options.list_only {
        print!("{}", render_preset_list(&selected));
        return Ok(());
    }

    let tool = CmakeTool::new(&settings.cmake.command);
    tool.check_available()?;

    PresetRunner::new(&tool).run(&selected, &options)?;
    Ok(())
}

/// Load the catalog from the `--presets` flag, the configured file, or by
/// discovery in the working directory
fn load_catalog(flag: Option<&str>, settings: &Settings) -> Result<PresetCatalog> {
    let explicit = flag.or(settings.presets.file.as_deref());

    let catalog = match explicit {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            load_catalog_file(&PathBuf::from(expanded.as_ref()))
        }
        None => discover_catalog(Path::new(".")),
    };

    catalog.context("Failed to load preset catalog")
}

/// Sweep the source tree with the formatter, applying CLI overrides on top
/// of the configured defaults
fn run_sweep(args: FmtArgs, settings: Settings) -> Result<()> {
    let root = args.root.unwrap_or(settings.format.root);
    let root = PathBuf::from(shellexpand::tilde(&root).as_ref());

    let extensions = if args.extensions.is_empty() {
        settings.format.extensions
    } else {
        args.extensions
    };

    let formatter = args.formatter.unwrap_or(settings.format.command);

    let summary = sweep(&SweepOptions {
        root,
        extensions,
        formatter,
    })?;

    tracing::debug!(
        formatted = summary.formatted,
        failed = summary.failed,
        "sweep finished"
    );
    Ok(())
}
