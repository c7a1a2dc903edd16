use std::path::{Path, PathBuf};
use std::process::Command;

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lint"))
}

/// `lint`, run from `directory` with colors disabled
pub fn lint_in(directory: &Path) -> Command {
    let mut command = Command::new(binary_path());
    command
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .env_remove("LINT_LOG");
    command
}
