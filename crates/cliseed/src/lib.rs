//! cliseed library — command pipeline, logging context, and CLI configuration.

pub mod app;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;
