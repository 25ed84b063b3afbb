use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "holo_render.log";

/// Installs the global subscriber, writing to `log_dir/holo_render.log`.
/// `filter` uses the `EnvFilter` syntax, eg: `"info,holo_render_manager=trace"`.
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(log_dir: &Path, filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .into_diagnostic()
        .wrap_err_with(|| log_dir.display().to_string())
        .wrap_err("failed to create log directory")?;
    let filter = EnvFilter::try_new(filter)
        .into_diagnostic()
        .wrap_err("invalid log filter")?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| miette::miette!("failed to install tracing subscriber: {e}"))?;
    Ok(guard)
}

#[cfg(test)]
mod test {
    #[test]
    fn test_init_writes_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let guard = super::init(dir.path(), "info").unwrap();
        tracing::info!("holo tracing initialized");
        drop(guard);

        let content = std::fs::read_to_string(dir.path().join(super::LOG_FILE_NAME)).unwrap();
        assert!(content.contains("holo tracing initialized"));
    }
}
