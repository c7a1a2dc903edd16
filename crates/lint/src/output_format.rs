use clap::ValueEnum;
use lint_core::aggregate::{DiagnosticRecord, Report};
use lint_core::preset::Level;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [DiagnosticRecord],
    errors: Vec<JsonError>,
}

#[derive(Debug, Serialize)]
struct JsonError {
    producer: String,
    error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    /// Print a summary line, then one line per diagnostic
    Concise,
    /// Print diagnostics as GitHub format
    Github,
    /// Print diagnostics as JSON
    Json,
}

/// Takes the aggregated report and displays it in different ways depending
/// on the `--output-format` provided by the user.
///
/// Failed checkers are reported on stderr by the caller, whatever the
/// format.
pub trait Emitter {
    fn emit<W: Write>(&self, writer: &mut W, report: &Report) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(&self, writer: &mut W, report: &Report) -> anyhow::Result<()> {
        // A clean run prints nothing
        if report.records.is_empty() {
            return Ok(());
        }

        let mut writer = BufWriter::new(writer);

        let n = report.records.len();
        let noun = if n == 1 { "problem" } else { "problems" };
        writeln!(writer, "{n} {noun} found")?;

        for record in &report.records {
            writeln!(
                writer,
                "  {}:{}:{}: {}",
                record.file, record.line, record.column, record.message
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(&self, writer: &mut W, report: &Report) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        let json_errors: Vec<JsonError> = report
            .failures
            .iter()
            .map(|failure| JsonError {
                producer: failure.producer.clone(),
                error: format!("{:#}", failure.error),
            })
            .collect();

        let output = JsonOutput { diagnostics: &report.records, errors: json_errors };

        serde_json::to_writer_pretty(&mut writer, &output)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(&self, writer: &mut W, report: &Report) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        for record in &report.records {
            let command = match record.severity {
                Level::Warn => "warning",
                Level::Error | Level::Off => "error",
            };

            // The location appears twice:
            // - one between the "::" markers: this is for the annotation to
            //   appear when we browse changed files in Github PR;
            // - one after the "::" marker: this is so that the workflow shows
            //   the location of diagnostics when we inspect the workflow itself,
            //   without the Github annotations.
            writeln!(
                writer,
                "::{command} title=lint ({rule}),file={file},line={line},col={col}::{file}:{line}:{col}: {message}",
                rule = record.rule,
                file = record.file,
                line = record.line,
                col = record.column,
                message = record.message,
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}
