#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the EcoMind toolchain.
//!
//! Provides [`init_logger`], which sets up `indicatif-log-bridge` so that
//! `log::info!` and friends are suspended while spinners redraw, and
//! [`with_spinner`], which shows the assistant's "thinking" spinner for a
//! fixed delay before producing a result.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use indicatif::MultiProgress;

/// Creates a spinner attached to `multi` showing `message`.
#[must_use]
pub fn spinner(multi: &MultiProgress, message: &str) -> ProgressBar {
    let bar = multi.add(ProgressBar::new_spinner());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar
}

/// Shows a spinner for `delay`, then runs `f` and clears the spinner.
///
/// A zero delay skips the spinner entirely. The delay is cosmetic; `f`
/// runs exactly once either way.
pub async fn with_spinner<T>(
    multi: &MultiProgress,
    message: &str,
    delay: Duration,
    f: impl FnOnce() -> T,
) -> T {
    if delay.is_zero() {
        return f();
    }

    let bar = spinner(multi, message);
    tokio::time::sleep(delay).await;
    let out = f();
    bar.finish_and_clear();
    out
}

/// Initializes the global logger wrapped in `indicatif-log-bridge` so that
/// `log::info!` and friends are suspended while spinners redraw.
///
/// Returns the [`MultiProgress`] that all spinners must be added to.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    // Build the pretty-env-logger logger manually so we can wrap it.
    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .ok(); // Ignore error if logger was already set (e.g., in tests)

    log::set_max_level(level);

    multi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn runs_closure_once_after_delay() {
        let multi = MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden());
        let start = tokio::time::Instant::now();
        let mut calls = 0;

        let out = with_spinner(&multi, "Thinking...", Duration::from_secs(1), || {
            calls += 1;
            42
        })
        .await;

        assert_eq!(out, 42);
        assert_eq!(calls, 1);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn zero_delay_skips_spinner() {
        let multi = MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden());
        let out = with_spinner(&multi, "Thinking...", Duration::ZERO, || "done").await;
        assert_eq!(out, "done");
    }
}
