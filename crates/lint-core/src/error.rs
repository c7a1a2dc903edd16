use std::fmt;
use std::path::PathBuf;

/// A document couldn't be parsed, so none of its rules could run.
#[derive(Debug)]
pub struct ParseError {
    pub filename: PathBuf,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to parse {} due to syntax errors.",
            self.filename.display()
        )
    }
}

/// A selector taken from a style rule is not a valid selector on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorError {
    pub selector: String,
}

impl std::error::Error for SelectorError {}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed selector `{}`", self.selector)
    }
}
