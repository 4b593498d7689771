//! Logging init: file under the XDG state dir, echoed to stderr in debug mode.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file handle, or stderr when the handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

/// `RUST_LOG` wins; otherwise debug mode turns on stage-by-stage output.
fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug {
        "info,gum=debug,gum_core=debug"
    } else {
        "warn,gum=info,gum_core=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to `~/.local/state/gum/gum.log`; with `debug`, also to stderr.
///
/// Returns the log file path. On failure the caller should fall back to
/// [`init_logging_stderr`].
pub fn init_logging(debug: bool) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gum")?;
    let log_dir = xdg_dirs.get_state_home().join("gum");
    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("gum.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let file_layer = fmt::layer()
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false);
    let console_layer = debug.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!("logging to {}", log_file_path.display());
    Ok(log_file_path)
}

/// Log to stderr only. Used when the log file cannot be opened.
pub fn init_logging_stderr(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
