//! Collection of the findings of every checker into one report.
//!
//! Each checker (a "producer") yields its findings in its own shape. They
//! are normalized into [DiagnosticRecord]s by a mapping given per producer,
//! and a producer that fails contributes no record at all: its error is
//! kept aside so that it can be reported, and the other producers' records
//! are unaffected.

use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::fs::relativize_path;
use crate::preset::Level;

/// The normalized shape of a finding, whichever checker produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub rule: String,
    pub severity: Level,
    pub producer: String,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            file: relativize_path(&diagnostic.filename),
            line: diagnostic.location.row(),
            column: diagnostic.location.column(),
            message: diagnostic.message.body.clone(),
            rule: diagnostic.rule().name().to_string(),
            severity: diagnostic.level,
            producer: String::new(),
        }
    }
}

/// A producer whose run failed.
#[derive(Debug)]
pub struct ProducerFailure {
    pub producer: String,
    pub error: anyhow::Error,
}

/// The outcome of one producer's run.
#[derive(Debug)]
pub struct Batch {
    pub producer: String,
    pub records: Vec<DiagnosticRecord>,
    pub failure: Option<anyhow::Error>,
}

impl Batch {
    /// Normalize the raw findings of `producer` with `map`. A failed run
    /// becomes a batch without records.
    pub fn collect<F, M>(producer: &str, outcome: anyhow::Result<Vec<F>>, map: M) -> Self
    where
        M: Fn(F) -> DiagnosticRecord,
    {
        match outcome {
            Ok(findings) => {
                let records = findings
                    .into_iter()
                    .map(|finding| DiagnosticRecord { producer: producer.to_string(), ..map(finding) })
                    .collect();
                Self { producer: producer.to_string(), records, failure: None }
            }
            Err(error) => {
                tracing::debug!("The {producer} checker failed: {error:#}");
                Self { producer: producer.to_string(), records: Vec::new(), failure: Some(error) }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    /// Records of every producer, sorted by file
    pub records: Vec<DiagnosticRecord>,
    /// Producers that failed, in batch order
    pub failures: Vec<ProducerFailure>,
}

impl Report {
    /// Whether the run found anything to complain about. Failed producers
    /// don't count.
    pub fn has_problems(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Merge `batches` into one report.
///
/// Records are sorted by file path only. The sort is stable, so the records
/// of one file keep the order their producer gave them.
pub fn aggregate(batches: Vec<Batch>) -> Report {
    let mut report = Report::default();

    for batch in batches {
        report.records.extend(batch.records);
        if let Some(error) = batch.failure {
            report.failures.push(ProducerFailure { producer: batch.producer, error });
        }
    }

    report.records.sort_by(|a, b| a.file.cmp(&b.file));
    report
}
