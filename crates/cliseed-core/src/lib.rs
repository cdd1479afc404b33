//! # cliseed-core
//!
//! Core library for the cliseed command-line template: argument validation,
//! exact Fibonacci numbers, file non-emptiness checks, and human-readable
//! elapsed-time strings.

pub mod constants;
pub mod elapsed;
pub mod fibonacci;
pub mod filecheck;
pub mod ordinal;
pub mod validation;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use elapsed::{format_elapsed, ElapsedTime};
pub use fibonacci::fibonacci;
pub use filecheck::is_non_empty_file;
pub use ordinal::ordinal_suffix;
pub use validation::{parse_nth_number, ValidationError, MAX_NTH_NUMBER, NTH_NUMBER};
