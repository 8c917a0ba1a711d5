//! Logging Infrastructure
//!
//! - Console output, pretty or JSON
//! - Daily rotating application logs under `{log_dir}/app` (deleted after 14 days)
//! - Permanent order logs under `{log_dir}/orders`, fed by [`order_log!`](crate::order_log)

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, prelude::*};

/// Tracing target of dispatched-message records
pub const ORDERS_TARGET: &str = "orders";

/// Days application logs are kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

const APP_LOG_PREFIX: &str = "app";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Delete rolled application logs older than [`APP_LOG_RETENTION_DAYS`]
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    cleanup_logs_before(log_dir, cutoff)
}

fn cleanup_logs_before(log_dir: &Path, cutoff: NaiveDate) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // Rolled files are named `app.YYYY-MM-DD`
        let Some(date) = name
            .strip_prefix(APP_LOG_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logging system with optional daily rotating files
///
/// # Arguments
/// * `level` - Log filter (e.g. "info", "storefront=debug")
/// * `json_format` - JSON output for production, pretty for development
/// * `log_dir` - Directory for file logging; must be called inside a tokio
///   runtime when set, the hourly cleanup task is spawned on it
///
/// # Examples
/// ```no_run
/// use storefront::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let console = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    let mut layers: Vec<BoxedLayer> = vec![if json_format {
        console
            .json()
            .with_current_span(true)
            .with_filter(env_filter(level))
            .boxed()
    } else {
        console.with_filter(env_filter(level)).boxed()
    }];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join("app");
        let orders_log_dir = log_dir.join("orders");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&orders_log_dir)?;

        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, APP_LOG_PREFIX);
        let orders_log = RollingFileAppender::new(Rotation::DAILY, orders_log_dir, ORDERS_TARGET);

        layers.push(file_layer(json_format, app_log, |meta| {
            meta.target() != ORDERS_TARGET
        }));
        layers.push(file_layer(json_format, orders_log, |meta| {
            meta.target() == ORDERS_TARGET
        }));

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn file_layer(
    json_format: bool,
    appender: RollingFileAppender,
    keep: fn(&Metadata<'_>) -> bool,
) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(appender));
    if json_format {
        layer.json().with_filter(filter_fn(keep)).boxed()
    } else {
        layer.with_filter(filter_fn(keep)).boxed()
    }
}

/// Runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

/// Record a dispatched message on the permanent orders log
///
/// # Examples
/// ```ignore
/// order_log!("whatsapp", "order", 1, &message.text);
/// order_log!("telegram", "consultation", "-", &message.text);
/// ```
#[macro_export]
macro_rules! order_log {
    ($channel:expr, $kind:expr, $product:expr, $text:expr) => {
        tracing::info!(
            target: "orders",
            channel = $channel,
            kind = $kind,
            product = %$product,
            text = $text,
            timestamp = chrono::Local::now().to_rfc3339(),
            "ORDER"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_removes_only_expired_app_logs() {
        let dir = TempDir::new().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(&app).unwrap();
        for name in ["app.2026-01-01", "app.2026-10-10", "app.notadate", "other.2026-01-01"] {
            fs::write(app.join(name), "x").unwrap();
        }

        let cutoff = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        let removed = cleanup_logs_before(dir.path(), cutoff).unwrap();

        assert_eq!(removed, 1);
        assert!(!app.join("app.2026-01-01").exists());
        assert!(app.join("app.2026-10-10").exists());
        assert!(app.join("app.notadate").exists());
        assert!(app.join("other.2026-01-01").exists());
    }

    #[test]
    fn test_cleanup_without_app_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}
