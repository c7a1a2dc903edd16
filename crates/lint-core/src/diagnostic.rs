use std::cmp::Ordering;
use std::ops::Range;
use std::path::PathBuf;

use crate::location::Location;
use crate::preset::Level;
use crate::rule_set::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
// The fix to apply to the violation: replace the bytes `start..end` of the
// file with `content`.
pub struct Fix {
    pub content: String,
    pub start: usize,
    pub end: usize,
}

impl Fix {
    pub fn replace(range: Range<usize>, content: impl Into<String>) -> Self {
        Self { content: content.into(), start: range.start, end: range.end }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, "")
    }
}

/// Details on the violated rule.
pub trait Violation {
    /// The violated rule.
    fn rule(&self) -> Rule;
    /// Explanation of the violation.
    fn body(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationData {
    pub rule: Rule,
    pub body: String,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self { rule: Violation::rule(&value), body: Violation::body(&value) }
    }
}

impl ViolationData {
    pub fn new(rule: Rule, body: String) -> Self {
        Self { rule, body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
// The native finding of both checkers, before it is handed to the
// aggregator.
pub struct Diagnostic {
    // The violated rule and the description of the violation.
    pub message: ViolationData,
    // Location of the violation.
    pub filename: PathBuf,
    pub range: Range<usize>,
    pub location: Location,
    // Level of the violated rule in the preset.
    pub level: Level,
    // Fix to apply if the user passed `--fix`.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// The filename, location and level are filled in by the checker once
    /// all the rules have run on a document.
    pub fn new<T: Into<ViolationData>>(message: T, range: Range<usize>, fix: Option<Fix>) -> Self {
        Self {
            message: message.into(),
            filename: PathBuf::new(),
            range,
            location: Location::default(),
            level: Level::Error,
            fix,
        }
    }

    pub fn rule(&self) -> Rule {
        self.message.rule
    }

    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by position
        self.filename
            .cmp(&other.filename)
            .then_with(|| self.range.start.cmp(&other.range.start))
            .then_with(|| self.range.end.cmp(&other.range.end))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
