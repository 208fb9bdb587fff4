// src/logging.rs

//! Logging setup for `stepdag` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `STEPDAG_LOG` environment variable, any `EnvFilter` directive
//!    (e.g. "debug", "stepdag::dag=trace,warn")
//! 3. default to `info`
//!
//! Logs go to STDERR so that the schedule on stdout can be piped.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "STEPDAG_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    Ok(())
}

/// Resolve the filter directive from the CLI flag and the raw value of
/// `STEPDAG_LOG`. Blank environment values count as unset.
pub fn filter_directive(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return level_directive(lvl).to_string();
    }
    match env_value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Build the `EnvFilter`, falling back to `info` when the directive from
/// the environment does not parse.
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    let directive = filter_directive(cli_level, env_value);
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("stepdag: ignoring invalid {LOG_ENV_VAR} value {directive:?}: {e}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
