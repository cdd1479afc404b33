//! The command pipeline shared by every computing subcommand.
//!
//! Order of events: start banner, validation, parameter table, computation,
//! result line, end banner, elapsed time. Validation failures stop the run
//! before anything is computed.

use std::ffi::OsStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use cliseed_cli::output::format_timestamp;
use cliseed_cli::ParameterTable;
use cliseed_core::{format_elapsed, ValidationError};

use crate::version::full_version;

/// One validate-then-compute step driven by [`run_pipeline`].
pub trait Computation {
    /// Validated argument.
    type Input;
    /// Computed value.
    type Output;

    /// Subcommand name, used in banners.
    fn name(&self) -> &'static str;

    /// Turn the raw positional argument into a validated input. `raw` is an
    /// OS string so that paths which are not UTF-8 still reach the command.
    fn validate(&self, raw: &OsStr) -> Result<Self::Input, ValidationError>;

    /// Parameters to log before computing.
    fn parameters(&self, input: &Self::Input) -> ParameterTable;

    fn compute(&self, input: &Self::Input) -> Self::Output;

    /// Log the computed value.
    fn log_result(&self, input: &Self::Input, output: &Self::Output);
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport<T> {
    pub output: T,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Run `computation` on `raw`, logging through the current dispatcher.
///
/// # Errors
///
/// Returns the [`ValidationError`] if `raw` is rejected; nothing is computed
/// in that case.
pub fn run_pipeline<C: Computation>(
    computation: &C,
    raw: impl AsRef<OsStr>,
) -> Result<PipelineReport<C::Output>, ValidationError> {
    let started_at = Utc::now();
    let clock = Instant::now();
    debug!("{}", full_version());
    info!(
        "{} started at: {} (UTC).",
        computation.name(),
        format_timestamp(started_at)
    );

    let input = computation.validate(raw.as_ref()).inspect_err(|err| {
        error!("invalid argument: {err}");
    })?;

    for line in computation.parameters(&input).render() {
        info!("{line}");
    }

    let output = computation.compute(&input);
    computation.log_result(&input, &output);

    let finished_at = Utc::now();
    let elapsed = clock.elapsed();
    info!(
        "{} finished at: {} (UTC).",
        computation.name(),
        format_timestamp(finished_at)
    );
    info!("Time elapsed: {}.", format_elapsed(elapsed));

    Ok(PipelineReport {
        output,
        started_at,
        finished_at,
        elapsed,
    })
}
