//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};

static INIT_TRACING: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_ledger=warn";

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` is honored; without it only warnings from this crate are shown.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(value) if !value.trim().is_empty() => EnvFilter::new(value),
            _ => EnvFilter::default().add_directive(default_directive()),
        };

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn default_directive() -> Directive {
    DEFAULT_DIRECTIVE
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_parses() {
        assert_eq!(default_directive().to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn init_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
