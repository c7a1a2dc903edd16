use std::fmt::Display;
use std::process::Command;
use std::process::ExitStatus;

use regex::Regex;

pub trait CommandExt {
    /// Run `lint` to completion and collect its normalized output.
    ///
    /// The working directory of the command is replaced by `[TEMP_DIR]` in
    /// both streams, so that absolute paths reported in warnings are stable.
    fn run(&mut self) -> Output;
}

/// What one run of `lint` printed, ready to be snapshotted with insta
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub arguments: String,
}

impl Output {
    /// The report lines of the concise format, without the summary line
    pub fn problems(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter_map(|line| line.strip_prefix("  "))
            .collect()
    }

    /// Checkers reported as failed on stderr, in the order of the warnings
    pub fn failed_checkers(&self) -> Vec<&str> {
        self.stderr
            .lines()
            .filter_map(|line| line.strip_prefix("Warning: "))
            .filter_map(|line| line.split_once(" checker failed: "))
            .map(|(checker, _)| checker)
            .collect()
    }
}

impl CommandExt for Command {
    fn run(&mut self) -> Output {
        let output = self.output().unwrap();

        let mut directories = Vec::new();
        if let Some(directory) = self.get_current_dir() {
            // The walk may report the canonical form (e.g. `/private/var` on
            // macOS), so both are replaced, the longest first.
            if let Ok(canonical) = directory.canonicalize() {
                directories.push(canonical.display().to_string());
            }
            directories.push(directory.display().to_string());
        }
        directories.sort_by_key(|directory| std::cmp::Reverse(directory.len()));

        let normalize = |bytes: &[u8]| {
            let ansi = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
            let mut text = ansi
                .replace_all(&String::from_utf8_lossy(bytes), "")
                .into_owned();
            for directory in &directories {
                text = text.replace(directory.as_str(), "[TEMP_DIR]");
            }
            text.replace('\\', "/")
        };

        let arguments: Vec<String> = self
            .get_args()
            .map(|x| x.to_string_lossy().into_owned())
            .collect();

        Output {
            status: output.status,
            stdout: normalize(&output.stdout),
            stderr: normalize(&output.stderr),
            arguments: arguments.join(" "),
        }
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "exit_code: {}", self.status.code().unwrap_or(1))?;
        writeln!(f, "----- stdout -----")?;
        writeln!(f, "{}", self.stdout)?;
        writeln!(f, "----- stderr -----")?;
        writeln!(f, "{}", self.stderr)?;
        write!(f, "----- args -----\n{}", self.arguments)
    }
}
