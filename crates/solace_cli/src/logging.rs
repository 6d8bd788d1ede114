//! Tracing subscriber setup.
//!
//! Logs go to stderr by default. When a log file is configured they are
//! written there through a non-blocking appender instead, which keeps them
//! out of the interactive prompt.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Level used when the configured filter does not parse.
const FALLBACK_LEVEL: &str = "warn";

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
///
/// A `level` that does not parse is an error when `strict`; otherwise
/// logging falls back to [`FALLBACK_LEVEL`] and the problem is logged.
/// The returned guard must live until exit or buffered file logs are lost.
pub fn init(level: &str, file: Option<&Path>, strict: bool) -> Result<Option<WorkerGuard>> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => parse_filter(level, strict)?,
    };

    let guard = match file {
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            None
        }
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
            Some(guard)
        }
    };

    if let Some(reason) = rejected {
        tracing::warn!("{}, using '{}'", reason, FALLBACK_LEVEL);
    }
    Ok(guard)
}

/// Parse a filter directive. On failure, either bail (`strict`) or return
/// the fallback filter together with the reason the directive was rejected.
fn parse_filter(level: &str, strict: bool) -> Result<(EnvFilter, Option<String>)> {
    match EnvFilter::try_new(level) {
        Ok(filter) => Ok((filter, None)),
        Err(e) if strict => {
            Err(e).with_context(|| format!("Invalid log filter '{}'", level))
        }
        Err(e) => Ok((
            EnvFilter::new(FALLBACK_LEVEL),
            Some(format!("Invalid log filter '{}' ({})", level, e)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter_is_used() {
        let (filter, rejected) = parse_filter("solace_core=debug", true).unwrap();
        assert!(rejected.is_none());
        assert_eq!(filter.to_string(), "solace_core=debug");
    }

    #[test]
    fn test_invalid_filter_falls_back_to_warn() {
        let (filter, rejected) = parse_filter("solace_core=loud", false).unwrap();
        assert_eq!(filter.to_string(), FALLBACK_LEVEL);
        let reason = rejected.unwrap();
        assert!(reason.contains("solace_core=loud"));
    }

    #[test]
    fn test_invalid_filter_is_an_error_when_strict() {
        let err = parse_filter("solace_core=loud", true).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid log filter 'solace_core=loud'"));
    }
}
