//! Logging setup for the tagweave CLI.
//!
//! Tracing output goes to stderr so stdout stays clean for piping the
//! generated library. The configured `logging.level` picks the base filter,
//! `--verbose` floors it at debug, and `RUST_LOG` overrides both.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Initialize the tracing subscriber with an explicit level directive.
///
/// `json_format` switches the stderr layer from human-readable output to
/// structured JSON lines.
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging with settings from the Tagweave configuration file,
/// with CLI flags as overrides.
pub fn init_from_config(
    config: &tagweave_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = resolve_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}

/// Pick the effective level directive from the configured string and the
/// `--verbose` flag. Unrecognized strings fall back to info rather than
/// silencing logs.
fn resolve_level(configured: &str, verbose: bool) -> &'static str {
    let level = LEVELS
        .iter()
        .copied()
        .find(|l| *l == configured)
        .unwrap_or("info");
    if verbose && level != "trace" {
        return "debug";
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_levels_are_honored() {
        assert_eq!(resolve_level("error", false), "error");
        assert_eq!(resolve_level("warn", false), "warn");
        assert_eq!(resolve_level("trace", false), "trace");
    }

    #[test]
    fn test_verbose_floors_at_debug() {
        assert_eq!(resolve_level("warn", true), "debug");
        assert_eq!(resolve_level("trace", true), "trace");
    }

    #[test]
    fn test_unrecognized_level_falls_back_to_info() {
        assert_eq!(resolve_level("loud", false), "info");
    }
}
