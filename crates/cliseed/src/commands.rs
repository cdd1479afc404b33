//! The two computing subcommands.

use std::ffi::OsStr;
use std::path::PathBuf;

use num_bigint::BigUint;
use tracing::{debug, info};

use cliseed_cli::output::{format_result, MAX_INLINE_DIGITS};
use cliseed_cli::ParameterTable;
use cliseed_core::{
    fibonacci, is_non_empty_file, ordinal_suffix, parse_nth_number, ValidationError, NTH_NUMBER,
};

use crate::pipeline::Computation;

/// `check-file`: is the path an existing, non-empty regular file?
pub struct FileCheck;

impl Computation for FileCheck {
    type Input = PathBuf;
    type Output = bool;

    fn name(&self) -> &'static str {
        "check-file"
    }

    /// Any OS string is a syntactically valid path; existence is checked in
    /// [`Computation::compute`].
    fn validate(&self, raw: &OsStr) -> Result<PathBuf, ValidationError> {
        Ok(PathBuf::from(raw))
    }

    fn parameters(&self, input: &PathBuf) -> ParameterTable {
        ParameterTable::new().with("file_path", input.display())
    }

    fn compute(&self, input: &PathBuf) -> bool {
        is_non_empty_file(input)
    }

    fn log_result(&self, input: &PathBuf, output: &bool) {
        info!("is_non_empty_file({}) = {output}", input.display());
    }
}

/// `fib`: exact n-th Fibonacci number.
pub struct NthFibonacci;

impl Computation for NthFibonacci {
    type Input = u64;
    type Output = BigUint;

    fn name(&self) -> &'static str {
        "fib"
    }

    fn validate(&self, raw: &OsStr) -> Result<u64, ValidationError> {
        match raw.to_str() {
            Some(text) => parse_nth_number(text),
            None => Err(ValidationError::NotANumber {
                argument: NTH_NUMBER,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn parameters(&self, n: &u64) -> ParameterTable {
        ParameterTable::new().with("nth_number", n)
    }

    fn compute(&self, n: &u64) -> BigUint {
        debug!(
            "Computing the {n}{} Fibonacci number.",
            ordinal_suffix(i128::from(*n))
        );
        fibonacci(*n)
    }

    fn log_result(&self, n: &u64, output: &BigUint) {
        let shown = format_result(output, false);
        info!("fibonacci({n}) = {shown}");
        if shown.len() > MAX_INLINE_DIGITS {
            debug!("fibonacci({n}) full value: {output}");
        }
    }
}
