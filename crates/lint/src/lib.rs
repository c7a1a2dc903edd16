use crate::args::Args;
use crate::status::ExitStatus;

pub mod args;
pub mod commands;
pub mod logging;
pub mod output_format;
pub mod status;

pub use output_format::{ConciseEmitter, GithubEmitter, JsonEmitter, OutputFormat};

pub fn run(args: Args) -> anyhow::Result<ExitStatus> {
    logging::init_logging(
        args.global_options.log_level.unwrap_or_default(),
        args.global_options.no_color,
    );

    if args.global_options.no_color {
        colored::control::set_override(false);
    }

    commands::check::check(args)
}
