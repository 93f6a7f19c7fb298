use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE_NAME: &str = "studyplan.log";

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("studyplan={}", level)
}

/// Install the global subscriber.
///
/// Human-readable events go to stderr. With `log_file`, events are also
/// written as JSON lines to a file that rolls over daily.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(log_path) => {
            let (dir, file_name) = split_log_path(log_path);
            let _ = std::fs::create_dir_all(dir);
            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file_name))
                .with_ansi(false)
                .json();
            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}

/// Directory and file name prefix for the rolling appender.
fn split_log_path(log_path: &Path) -> (&Path, &OsStr) {
    let dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "studyplan=info");
        assert_eq!(default_directive(true), "studyplan=debug");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/studyplan/run.log"));
        assert_eq!(dir, Path::new("/var/log/studyplan"));
        assert_eq!(name, "run.log");

        let (dir, name) = split_log_path(Path::new("run.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "run.log");
    }

    #[test]
    fn test_split_log_path_without_file_name() {
        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, DEFAULT_LOG_FILE_NAME);
    }
}
