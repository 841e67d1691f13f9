//! Logging setup.
//!
//! `[logging]` in the config picks the level and format; `--verbose` and
//! `--json-logs` override them, and `RUST_LOG` overrides everything. Logs go
//! to stderr so `verdure identify` can print the care guide on stdout.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crates whose logs follow the configured level verbatim.
const OWN_TARGETS: &[&str] = &["verdure", "verdure_core", "tower_http"];

/// Effective level for our own crates.
///
/// Unknown level names fall back to `info`. `--verbose` raises the level to
/// at least `debug` but never lowers an explicit `trace`.
pub fn resolve_level(configured: &str, verbose: bool) -> LevelFilter {
    let level = configured.trim().parse().unwrap_or(LevelFilter::INFO);
    if verbose {
        level.max(LevelFilter::DEBUG)
    } else {
        level
    }
}

/// `EnvFilter` directives for `level`.
///
/// Dependencies (hyper, reqwest, ...) are capped at `info` so debug output
/// stays readable, but quieter settings like `warn` apply to them too.
pub fn filter_directives(level: LevelFilter) -> String {
    let mut directives: Vec<String> = OWN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push(level.min(LevelFilter::INFO).to_string());
    directives.join(",").to_lowercase()
}

/// Install the global subscriber from config plus CLI overrides.
pub fn init_from_config(
    config: &verdure_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = resolve_level(&config.logging.level, verbose_override);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let json = json_logs_override || config.logging.format.eq_ignore_ascii_case("json");
    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let pretty_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();
}
