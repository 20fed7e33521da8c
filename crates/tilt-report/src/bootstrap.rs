use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Build the `tracing` subscriber for one run.
///
/// Lines are appended to `log_file` (created along with its parent directory
/// when absent) with timestamps and without ANSI colours. `log_level` uses the
/// `DEBUG`/`INFO`/`WARNING`/`ERROR` names and falls back to `info` when
/// unrecognised.
///
/// The subscriber is returned rather than installed globally; callers scope it
/// with [`tracing::subscriber::with_default`].
pub fn build_subscriber(
    log_level: &str,
    log_file: &Path,
) -> anyhow::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false);

    Ok(tracing_subscriber::registry().with(filter).with(layer))
}

/// Map a level name to a `tracing` filter directive.
fn level_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("INFO"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("error"), "error");
    }

    #[test]
    fn test_every_accepted_level_name_maps() {
        use clap::Parser;
        use tilt_core::settings::Settings;

        for (name, directive) in [
            ("DEBUG", "debug"),
            ("INFO", "info"),
            ("WARNING", "warn"),
            ("ERROR", "error"),
        ] {
            let settings = Settings::parse_from(["tilt-report", "--log-level", name]);
            assert_eq!(level_directive(&settings.log_level), directive);
        }
        assert!(Settings::try_parse_from(["tilt-report", "--log-level", "CRITICAL"]).is_err());
    }

    #[test]
    fn test_subscriber_appends_to_log_file() {
        let tmp = TempDir::new().expect("tempdir");
        let log = tmp.path().join("logs").join("tracker_classification_log.txt");

        let subscriber = build_subscriber("INFO", &log).expect("subscriber");
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first run");
            tracing::debug!("hidden at info level");
        });

        let subscriber = build_subscriber("INFO", &log).expect("subscriber");
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("second run");
        });

        let content = std::fs::read_to_string(&log).expect("read log");
        assert!(content.contains("INFO"));
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
        assert!(!content.contains("hidden at info level"));
        assert!(content.find("first run") < content.find("second run"));
    }

    #[test]
    fn test_debug_level_keeps_debug_lines() {
        let tmp = TempDir::new().expect("tempdir");
        let log = tmp.path().join("debug.log");

        let subscriber = build_subscriber("DEBUG", &log).expect("subscriber");
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("detail line");
        });

        let content = std::fs::read_to_string(&log).expect("read log");
        assert!(content.contains("detail line"));
    }

    #[test]
    fn test_unopenable_log_file_is_error() {
        let tmp = TempDir::new().expect("tempdir");
        // A directory cannot be opened for appending.
        assert!(build_subscriber("INFO", tmp.path()).is_err());
    }
}
