use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    name = "lint",
    about = "lint: check stylesheets and scripts against a bundled set of rules",
    after_help = "Files ending with .css are checked as stylesheets, files ending with .js, .mjs or .cjs as scripts, \
and the <style> and <script> elements of .html and .htm files as both."
)]
#[command(version)]
pub struct Args {
    #[arg(
        required = true,
        help = "List of files, directories or glob patterns to check. Directories are searched recursively."
    )]
    pub files: Vec<String>,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Automatically fix issues detected by the linter."
    )]
    pub fix: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for violations."
    )]
    pub output_format: OutputFormat,

    #[clap(flatten)]
    pub global_options: GlobalOptions,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults
    /// to `warn`.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Disable colored output. To turn colored output off, either set this option or set
    /// the environment variable `NO_COLOR` to any non-zero value.
    #[arg(long, global = true)]
    pub no_color: bool,
}
