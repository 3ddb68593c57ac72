//! WordPress coding-standard sniffs.
//!
//! A sniff is a [`Rule`]: it declares the token kinds it wants to see and is
//! called once per occurrence with the whole token stream. Rules are
//! stateless and never mutate the stream, so any number of them can run on
//! any number of files in parallel.
//!
//! [`Linter`] is the host: it lexes sources, dispatches tokens to rules in
//! source order and collects the resulting diagnostics.

mod linter;
mod rule;
pub mod yoda;

pub use linter::{FileReport, LintError, Linter, LinterConfig, SourceFile};
pub use rule::Rule;
pub use yoda::YodaConditions;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=wpcs_sniffs=debug` or `RUST_LOG=wpcs_sniffs=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
