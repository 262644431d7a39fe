use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static PANIC_HOOK: OnceLock<()> = OnceLock::new();

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Initialize tracing for a host application embedding the engine.
///
/// Filtering follows `RUST_LOG` (default `info`). With `TM_LOG_DIR` set,
/// output goes to `<TM_LOG_DIR>/<app>.log` with daily rotation instead of
/// stdout. Also installs a panic hook that routes panics through
/// `tracing::error!`; set `TM_LOG_INCLUDE_BACKTRACE=1` to chain the default
/// hook for a backtrace. Idempotent.
pub fn init(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match rotating_writer(app_name) {
        Some(writer) => {
            let _ = builder.with_writer(writer).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }

    install_panic_hook(app_name);
}

fn rotating_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("TM_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("tm-core: cannot create TM_LOG_DIR {}: {err}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

fn install_panic_hook(app_name: &'static str) {
    PANIC_HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        let chain_default = env_flag("TM_LOG_INCLUDE_BACKTRACE");

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(
                application = app_name,
                thread = thread.name().unwrap_or("unnamed"),
                location = info
                    .location()
                    .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                    .as_deref()
                    .unwrap_or("unknown"),
                panic_message = %payload,
                "panic captured"
            );

            if chain_default {
                previous(info);
            }
        }));
    });
}
