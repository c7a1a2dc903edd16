//! Logging for the CLI.
//!
//! Logs go to stderr so that they never mix with the report. The level
//! comes from `--log-level`, unless `LINT_LOG` holds a filter directive
//! (e.g. `LINT_LOG=lint_core=trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "LINT_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter applying the level to our own crates only. Dependencies stay
    /// quiet.
    fn directive(self) -> String {
        let level = self.as_str();
        format!("lint={level},lint_core={level}")
    }
}

pub fn init_logging(log_level: LogLevel, no_color: bool) {
    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(log_level.directive()),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .without_time()
        .finish();

    // Already set when `run()` is called more than once in a process
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Logging was already initialized");
    }
}
