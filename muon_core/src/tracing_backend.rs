// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for Muon apps.
//!
//! The format is trimmed for GUI use: no targets (in app logs the message
//! locates itself better than the defining module does), and a default
//! filter of `DEBUG` in debug builds and `INFO` in release builds. The
//! filter can be overridden at runtime through `RUST_LOG`.
//!
//! If a `tracing` subscriber is already configured, these helpers leave it
//! alone and report an error instead.

use std::error::Error;
use std::fmt;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Build the default subscriber with the given `default_level` filter.
fn default_subscriber(default_level: LevelFilter) -> impl Subscriber {
    // EnvFilter lets the user override the level without recompiling.
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer)
}

/// An error indicating that a tracing subscriber has already been set.
#[derive(Debug)]
pub struct TracingAlreadySetError;

impl fmt::Display for TracingAlreadySetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad("A tracing subscriber has been set before.")
    }
}

impl Error for TracingAlreadySetError {}

fn verify_subscriber_has_not_been_set() -> Result<(), TracingAlreadySetError> {
    // tracing_core::dispatcher::has_been_set is doc(hidden), but it is
    // guaranteed to remain for the whole tracing_core 1.0 series.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingAlreadySetError);
    }
    Ok(())
}

/// Initialise tracing with the default subscriber for an end-user app.
pub fn try_init_tracing() -> Result<(), TracingAlreadySetError> {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    verify_subscriber_has_not_been_set()?;

    // We may ignore the error here because we already checked that no
    // subscriber has been set.
    let _ = tracing::subscriber::set_global_default(default_subscriber(default_level));
    Ok(())
}

/// Initialise tracing with a default subscriber for a unit test.
///
/// This ignores most messages to limit noise.
pub fn try_init_test_tracing() -> Result<(), TracingAlreadySetError> {
    verify_subscriber_has_not_been_set()?;
    let _ = tracing::subscriber::set_global_default(default_subscriber(LevelFilter::WARN));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_init_test_tracing_errors() {
        let _first_result = try_init_test_tracing();
        let second_result = try_init_test_tracing();
        assert!(second_result.is_err());
    }
}
