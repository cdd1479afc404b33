//! Logging context for one pipeline run.
//!
//! The context owns a `tracing` dispatcher built from the requested level and
//! sinks. It is installed only for the duration of [`LoggingContext::scope`],
//! so nothing is registered process-wide and a context cannot be reconfigured
//! once built.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::Dispatch;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;

/// Log level accepted on the command line.
///
/// Variants are ordered from least to most verbose, matching `tracing`'s
/// `LevelFilter` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// `tracing` has no level above ERROR, so critical shares it.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Critical | Self::Error => LevelFilter::ERROR,
            Self::Warning => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Build the filter: `level` sets the global threshold, `env_directives`
/// (a `RUST_LOG`-style string) may add per-target directives.
fn build_filter(level: LogLevel, env_directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .parse_lossy(env_directives.unwrap_or_default())
        .add_directive(level.level_filter().into())
}

/// Explicitly constructed logging configuration for a single run.
pub struct LoggingContext {
    dispatch: Dispatch,
}

impl LoggingContext {
    /// Log to stderr and, if `log_file` is given, append the same lines to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened for appending.
    pub fn new(level: LogLevel, log_file: Option<&Path>) -> Result<Self> {
        let file = log_file
            .map(|path| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open log file `{}`", path.display()))
            })
            .transpose()?;

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        Ok(Self::build(
            build_filter(level, env.as_deref()),
            io::stderr,
            io::stderr().is_terminal(),
            file.map(Mutex::new),
        ))
    }

    /// Log to `writer` only, without colors or environment directives.
    pub fn with_writer<W>(level: LogLevel, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(
            build_filter(level, None),
            writer,
            false,
            None::<Mutex<std::fs::File>>,
        )
    }

    fn build<C, F>(
        filter: EnvFilter,
        console: C,
        ansi: bool,
        file: Option<F>,
    ) -> Self
    where
        C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
        F: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let console_layer = fmt::layer()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(console);
        let file_layer = file.map(|writer| {
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
        });

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer);

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Run `f` with this context as the current dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
