use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use shapes::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    shapes::init_tracing(cli.verbose);

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
