//! Error reporting and exit codes.

use clap::error::ErrorKind;
use clap::CommandFactory;

use cliseed_core::constants::exit_codes;
use cliseed_core::ValidationError;

use crate::config::AppConfig;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ValidationError>().is_some() {
        exit_codes::ERROR_USAGE
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Render a validation failure as a clap usage error for `subcommand`.
#[must_use]
pub fn usage_error(subcommand: &str, err: &ValidationError) -> clap::Error {
    let mut cmd = AppConfig::command();
    cmd.build();
    if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
        return sub.error(ErrorKind::ValueValidation, err);
    }
    cmd.error(ErrorKind::ValueValidation, err)
}

/// Print `err` to stderr and return its exit code.
pub fn report(config: &AppConfig, err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ValidationError>() {
        Some(validation) => {
            // If stderr itself is gone there is nowhere left to report to;
            // the exit code still signals the usage error.
            let _ = usage_error(config.command.name(), validation).print();
        }
        None => eprintln!("Error: {err:#}"),
    }
    exit_code(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation() -> ValidationError {
        cliseed_core::parse_nth_number("-5").unwrap_err()
    }

    #[test]
    fn validation_error_is_usage_code() {
        let err = anyhow::Error::new(validation());
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::anyhow!("log file unwritable");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn context_does_not_hide_validation() {
        let err = anyhow::Error::new(validation()).context("running fib");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn usage_error_matches_clap_exit_code() {
        let err = usage_error("fib", &validation());
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
        let rendered = err.render().to_string();
        assert!(rendered.contains("negative"));
        assert!(rendered.contains("cliseed fib"));
    }

    #[test]
    fn usage_error_unknown_subcommand_falls_back() {
        let err = usage_error("nope", &validation());
        assert_eq!(err.exit_code(), 2);
    }
}
