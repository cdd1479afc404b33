//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the version string with the target OS, e.g. `cliseed 0.1.0 (linux)`.
#[must_use]
pub fn full_version() -> String {
    format!("cliseed {} ({})", version(), std::env::consts::OS)
}
