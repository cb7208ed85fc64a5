use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_DIR_VAR: &str = "SL_LOG_DIR";
pub const BACKTRACE_VAR: &str = "SL_LOG_INCLUDE_BACKTRACE";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// ログの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// stdout belongs to the console transcript, so plain logs go here.
    Stderr,
    /// `<dir>/<app>.log`, rotated daily, without ANSI colors.
    DailyFile(PathBuf),
}

impl LogTarget {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_DIR_VAR) {
            Some(dir) if !dir.trim().is_empty() => LogTarget::DailyFile(PathBuf::from(dir.trim())),
            _ => LogTarget::Stderr,
        }
    }
}

fn flag_enabled(value: Option<String>) -> bool {
    value.is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"))
}

/// パニックを `tracing` の error イベントとして記録する
///
/// The default hook (and its backtrace) only runs as well when
/// `SL_LOG_INCLUDE_BACKTRACE` is set. Repeated calls keep the first hook.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let chain_default = flag_enabled(std::env::var(BACKTRACE_VAR).ok());

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());

            tracing::error!(app = app_name, %location, %message, "skill-shortlist panicked");

            if chain_default {
                default_hook(info);
            }
        }));
    });
}

fn daily_file_writer(dir: PathBuf, app_name: &str) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create log directory {}: {err}; using stderr", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

/// Install the global `fmt` subscriber for `app_name`.
///
/// Filtering follows `RUST_LOG` and falls back to `info`. Prompts and tables
/// are written to stdout, so log lines never share that stream.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let file_writer = match LogTarget::from_lookup(|key| std::env::var(key).ok()) {
        LogTarget::DailyFile(dir) => daily_file_writer(dir, app_name),
        LogTarget::Stderr => None,
    };

    let _ = match file_writer {
        Some(writer) => builder.with_ansi(false).with_writer(writer).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
