//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to a small set of
//! size-rotated files and keeps the latest lines in memory. Records sent
//! through the `log` facade are forwarded to the same subscriber.

mod buffer;
mod error;
mod writer;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

pub use buffer::LogBuffer;
pub use error::LoggerError;
pub use writer::{LoggerConfig, RollingFileWriter};

static LOGGER: OnceLock<Logger> = OnceLock::new();

struct Logger {
    sink: LogSink,
    log_dir: PathBuf,
}

struct SinkInner {
    file: RollingFileWriter,
    buffer: LogBuffer,
}

/// Cloneable handle the subscriber writes through
#[derive(Clone)]
pub struct LogSink {
    inner: Arc<Mutex<SinkInner>>,
}

impl LogSink {
    pub fn new(file: RollingFileWriter, buffer_lines: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SinkInner {
                file,
                buffer: LogBuffer::new(buffer_lines),
            })),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.buffer.lines(),
            Err(poisoned) => poisoned.into_inner().buffer.lines(),
        }
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        inner.file.write_all(buf)?;
        inner.buffer.push_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        inner.file.flush()
    }
}

/// Local wall-clock timestamps
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(log_dir: impl AsRef<Path>, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let log_dir = log_dir.as_ref().to_path_buf();
    let file = RollingFileWriter::new(&log_dir, app_name, config.max_file_bytes, config.max_files)?;
    let sink = LogSink::new(file, config.buffer_lines);

    let make_writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || make_writer.clone())
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .finish();

    install(subscriber, app_name)?;

    LOGGER
        .set(Logger { sink, log_dir: log_dir.clone() })
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn install<S>(subscriber: S, _app_name: &str) -> Result<(), LoggerError>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    use tracing_subscriber::util::SubscriberInitExt;

    subscriber
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))
}

#[cfg(target_os = "android")]
fn install<S>(subscriber: S, app_name: &str) -> Result<(), LoggerError>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    // logcat gets `log` records; the file set gets tracing events
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name.to_string()),
    );
    tracing::subscriber::set_global_default(subscriber).map_err(|e| LoggerError::Subscriber(e.to_string()))
}

fn logger() -> Result<&'static Logger, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    logger()?;
    tracing::info!("{}", msg);
    Ok(())
}

/// Most recent formatted lines, oldest first
pub fn recent_lines() -> Result<Vec<String>, LoggerError> {
    Ok(logger()?.sink.recent_lines())
}

pub fn log_dir() -> Result<PathBuf, LoggerError> {
    Ok(logger()?.log_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_writes_file_and_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let file = RollingFileWriter::new(dir.path(), "Sink", 4096, 2).unwrap();
        let path = file.current_path();
        let mut sink = LogSink::new(file, 2);

        sink.write_all(b"one\ntwo\nthree\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(sink.recent_lines(), vec!["two", "three"]);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "one\ntwo\nthree\n");
    }

    // The only test touching the global logger
    #[test]
    fn test_init_logger_once() {
        let dir = tempfile::tempdir().unwrap();

        init_logger(dir.path(), "ShoppingTest").expect("init failed");
        info("list loaded").unwrap();
        log::warn!("from the log facade");

        let lines = recent_lines().unwrap();
        assert!(lines.iter().any(|line| line.contains("list loaded")));
        assert!(lines.iter().any(|line| line.contains("from the log facade")));
        assert_eq!(log_dir().unwrap(), dir.path());

        let content = std::fs::read_to_string(dir.path().join("ShoppingTest.log")).unwrap();
        assert!(content.contains("list loaded"));

        assert!(matches!(init_logger(dir.path(), "ShoppingTest"), Err(LoggerError::AlreadyInitialized)));
    }
}
