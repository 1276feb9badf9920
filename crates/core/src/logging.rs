use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Directory holding rolling log files, `~/.navkit/logs`.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".navkit/logs")
}

/// Install the global subscriber for `component` (`serve`, `cli`, ...).
///
/// Logs go to a daily file `~/.navkit/logs/<component>.<date>` and, when
/// `to_stderr` is set, to stderr as well. If the log directory cannot be
/// created, only the stderr layer is installed and `None` is returned.
/// Keep the returned guard alive for the life of the process.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let log_dir = log_dir();
    let file_output = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&log_dir, component);
            Some(tracing_appender::non_blocking(file_appender))
        }
        Err(e) => {
            eprintln!("navkit: file logging disabled ({}): {}", log_dir.display(), e);
            None
        }
    };

    let (file_layer, guard) = match file_output {
        Some((writer, guard)) => {
            // No ANSI colors in files
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    guard
}
