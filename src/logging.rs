// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise the crate logs at `info`, or at
//! `debug` with `--verbose`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive without `--verbose`.
pub const DEFAULT_FILTER: &str = "iced_folio=info";

/// Default directive with `--verbose`.
pub const VERBOSE_FILTER: &str = "iced_folio=debug,info";

/// Directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global subscriber. Call once, before the window opens.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
