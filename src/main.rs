use std::process::ExitCode;

use clap::Parser;
use decomment::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match decomment::cli::run(args) {
        Ok(_) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
