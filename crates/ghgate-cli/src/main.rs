use ghgate_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; an unwritable state dir must
    // not take the CLI down with it.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ghgate error: {:#}", err);
        std::process::exit(1);
    }
}
