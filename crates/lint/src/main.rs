use clap::Parser;
use clap::error::ErrorKind;
use lint::args::Args;
use lint::run;
use lint::status::ExitStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return usage_error(err),
    };

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();

            // This communicates that this isn't a typical error but lint itself hard-errored for
            // some reason (e.g. the bundled preset is invalid)
            writeln!(stderr, "lint failed").ok();

            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}

// Asking for the version is the only way to get out of argument parsing
// successfully. Help is printed on stdout, whether it was asked for or
// files are missing.
fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayVersion => {
            err.print().ok();
            ExitStatus::Success.into()
        }
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::MissingRequiredArgument => {
            use clap::CommandFactory;

            let mut command = Args::command();
            command.print_help().ok();
            ExitStatus::Error.into()
        }
        _ => {
            err.print().ok();
            ExitStatus::Error.into()
        }
    }
}
