//! cliseed — file non-emptiness check and Fibonacci, with timed logging.

use std::process::ExitCode;

use cliseed_lib::{app, config, errors};

fn main() -> ExitCode {
    // Usage errors from clap exit here with code 2
    let config = config::AppConfig::parse();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(errors::report(&config, &err)),
    }
}
