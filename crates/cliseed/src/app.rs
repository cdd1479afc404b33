//! Application entry point and dispatch.

use anyhow::Result;
use clap::CommandFactory;

use cliseed_cli::completion::generate_completion;

use crate::commands::{FileCheck, NthFibonacci};
use crate::config::{AppConfig, Commands};
use crate::logging::LoggingContext;
use crate::pipeline::run_pipeline;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Commands::Completion { shell } => {
            let mut cmd = AppConfig::command();
            generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
        Commands::CheckFile(args) => {
            let logging = LoggingContext::new(config.log_level, args.log_file_path.as_deref())?;
            logging.scope(|| run_pipeline(&FileCheck, &args.file_path))?;
            Ok(())
        }
        Commands::Fib(args) => {
            let logging = LoggingContext::new(config.log_level, None)?;
            logging.scope(|| run_pipeline(&NthFibonacci, &args.nth_number))?;
            Ok(())
        }
    }
}
