//! Rolling Logger
//!
//! Installs a `tracing` fmt subscriber (which also receives `log` records)
//! writing to a daily rolling file `<app>.<YYYY-MM-DD>.log`, keeping only the
//! most recent files. The same lines are copied into an in-memory buffer for
//! in-app display.

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;

/// Log files kept on disk
pub const MAX_LOG_FILES: usize = 7;
/// Lines kept in the in-memory buffer
pub const BUFFER_LINES: usize = 500;

struct Logger {
    buffer: LineBuffer,
    /// Flushes the background file writer when dropped
    _guard: Mutex<WorkerGuard>,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Daily rolling appender in `dir`, pruned to [`MAX_LOG_FILES`]
pub fn file_appender(dir: &Path, app_name: &str) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(|e| e.to_string())
}

/// Install the global logger. Fails if called twice.
pub fn init_logger(dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("logger already initialized".to_string());
    }
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| format!("{}: {}", dir.display(), e))?;

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(dir, app_name)?);
    let buffer = LineBuffer::new(BUFFER_LINES);

    tracing_subscriber::fmt()
        .with_writer(file_writer.and(buffer.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| e.to_string())?;

    LOGGER
        .set(Logger {
            buffer,
            _guard: Mutex::new(guard),
        })
        .map_err(|_| "logger already initialized".to_string())?;

    log::info!("logging to {}", dir.display());
    Ok(())
}

fn ensure_init() -> Result<(), String> {
    LOGGER
        .get()
        .map(|_| ())
        .ok_or_else(|| "logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Up to `limit` most recent log lines, oldest first. Empty before init.
pub fn recent_logs(limit: usize) -> Vec<String> {
    LOGGER.get().map(|l| l.buffer.recent(limit)).unwrap_or_default()
}

struct Lines {
    capacity: usize,
    lines: VecDeque<String>,
    /// Text after the last newline seen
    partial: String,
}

/// Ring buffer of formatted log lines, usable as a fmt writer
#[derive(Clone)]
pub struct LineBuffer {
    inner: Arc<Mutex<Lines>>,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Lines {
                capacity: capacity.max(1),
                lines: VecDeque::new(),
                partial: String::new(),
            })),
        }
    }

    /// Up to `limit` most recent complete lines, oldest first
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let Ok(state) = self.inner.lock() else {
            return Vec::new();
        };
        let skip = state.lines.len().saturating_sub(limit);
        state.lines.iter().skip(skip).cloned().collect()
    }
}

impl io::Write for LineBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
        state.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = state.partial.find('\n') {
            let line: String = state.partial.drain(..=pos).collect();
            if state.lines.len() == state.capacity {
                state.lines.pop_front();
            }
            state.lines.push_back(line.trim_end().to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LineBuffer {
    type Writer = LineBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_file_appender_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut appender = file_appender(dir.path(), "App").unwrap();

        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("App."));
        assert!(names[0].ends_with(".log"));
        assert_eq!(fs::read_to_string(dir.path().join(&names[0])).unwrap(), "hello\n");
    }

    #[test]
    fn test_buffer_keeps_last_lines() {
        let mut buffer = LineBuffer::new(3);

        for i in 0..5 {
            buffer.write_all(format!("line {}\n", i).as_bytes()).unwrap();
        }

        assert_eq!(buffer.recent(10), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.recent(1), vec!["line 4"]);
    }

    #[test]
    fn test_buffer_joins_partial_writes() {
        let buffer = LineBuffer::new(10);

        buffer.make_writer().write_all(b"first ha").unwrap();
        assert!(buffer.recent(10).is_empty());
        buffer.make_writer().write_all(b"lf\nsecond\n").unwrap();

        assert_eq!(buffer.recent(10), vec!["first half", "second"]);
    }

    #[test]
    fn test_global_logger() {
        let dir = tempfile::tempdir().unwrap();
        assert!(info("too early").is_err());

        init_logger(dir.path(), "Test").unwrap();
        assert!(init_logger(dir.path(), "Test").is_err());

        info("ready").unwrap();
        error("broken").unwrap();
        log::warn!("from the log facade");

        let recent = recent_logs(BUFFER_LINES);
        assert!(recent.iter().any(|l| l.contains("ready")));
        assert!(recent.iter().any(|l| l.contains("broken")));
        assert!(recent.iter().any(|l| l.contains("from the log facade")));
    }
}
