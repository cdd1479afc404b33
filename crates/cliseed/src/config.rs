//! Application configuration from CLI flags and environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};

use crate::logging::LogLevel;

/// cliseed — check a file for content, or compute a Fibonacci number, with timed logging.
#[derive(Parser, Debug)]
#[command(name = "cliseed", version, about)]
pub struct AppConfig {
    /// Log level: critical, error, warning, info, or debug.
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value = "info",
        global = true
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a file exists and is non-empty.
    CheckFile(CheckFileArgs),

    /// Compute the n-th Fibonacci number.
    Fib(FibArgs),

    /// Generate a shell completion script.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct CheckFileArgs {
    /// Path of the file to check.
    // Empty and non-UTF-8 paths are accepted here and fail the check later.
    #[arg(
        env = "FILE_PATH",
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub file_path: PathBuf,

    /// Also append log lines to this file.
    #[arg(long)]
    pub log_file_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FibArgs {
    /// Index of the Fibonacci number (non-negative integer).
    #[arg(env = "NTH_NUMBER", allow_hyphen_values = true)]
    pub nth_number: OsString,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl Commands {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckFile(_) => "check-file",
            Self::Fib(_) => "fib",
            Self::Completion { .. } => "completion",
        }
    }
}
