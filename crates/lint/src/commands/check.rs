use lint_core::aggregate::{Report, aggregate};
use lint_core::config::{ArgsConfig, build_config};
use lint_core::discovery::discover_file_paths;
use lint_core::preset::Preset;

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::args::Args;
use crate::output_format::{ConciseEmitter, Emitter, GithubEmitter, JsonEmitter, OutputFormat};
use crate::status::ExitStatus;

pub fn check(args: Args) -> Result<ExitStatus> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for file in discover_file_paths(&args.files) {
        match file {
            Ok(path) => paths.push(path),
            Err(err) => tracing::warn!("{err}"),
        }
    }

    let check_config = ArgsConfig { fix: args.fix };

    let preset = Preset::bundled().context("Failed to load the bundled rule preset")?;
    let config = build_config(&check_config, preset, paths)?;

    if config.style_paths.is_empty() && config.script_paths.is_empty() {
        eprintln!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No files to check found under the given path(s).".bold()
        );
        return Ok(ExitStatus::Success);
    }

    tracing::debug!(
        "Checking {} stylesheet(s) and {} script(s)",
        config.style_paths.len(),
        config.script_paths.len()
    );

    let report = aggregate(lint_core::check::check(config));

    print_failures(&report);

    let mut stdout = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Concise => ConciseEmitter.emit(&mut stdout, &report)?,
        OutputFormat::Json => JsonEmitter.emit(&mut stdout, &report)?,
        OutputFormat::Github => GithubEmitter.emit(&mut stdout, &report)?,
    }

    if report.has_problems() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

// A failed checker doesn't stop the others, but the user must know that
// some files were not checked.
fn print_failures(report: &Report) {
    let mut stderr = std::io::stderr().lock();
    for failure in &report.failures {
        writeln!(
            stderr,
            "{}: {} checker failed: {:#}",
            "Warning".yellow().bold(),
            failure.producer,
            failure.error
        )
        .ok();
    }
}
