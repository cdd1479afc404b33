//! # cliseed-cli
//!
//! Log-line formatting, parameter tables, and shell completion.

pub mod completion;
pub mod output;
pub mod table;

pub use table::ParameterTable;
