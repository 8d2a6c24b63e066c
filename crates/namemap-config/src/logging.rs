use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, Once, OnceLock};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt, TestWriter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

use crate::LoggingConfig;

/// Ring of the most recent formatted log lines.
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.min(8_192))),
        }
    }

    pub fn push_line(&self, line: String) {
        self.push_text(&line);
    }

    /// Append every non-empty line of `text`, evicting the oldest lines beyond capacity.
    fn push_text(&self, text: &str) {
        let mut lines = self.lines.lock().expect("LogBuffer mutex poisoned");
        for line in text.lines().filter(|line| !line.is_empty()) {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_owned());
        }
    }

    /// Up to `n` most recent lines, oldest first.
    pub fn last_lines(&self, n: usize) -> Vec<String> {
        let lines = self.lines.lock().expect("LogBuffer mutex poisoned");
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }
}

/// Feeds formatted events into a [`LogBuffer`].
struct BufferSink(Arc<LogBuffer>);

impl<'a> MakeWriter<'a> for BufferSink {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> EventWriter {
        EventWriter {
            buffer: Arc::clone(&self.0),
            pending: Vec::new(),
        }
    }
}

/// Accumulates one event; the text reaches the buffer when the writer is dropped.
struct EventWriter {
    buffer: Arc<LogBuffer>,
    pending: Vec<u8>,
}

impl Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            self.buffer.push_text(&String::from_utf8_lossy(&self.pending));
        }
    }
}

static SUBSCRIBER_INSTALLED: Once = Once::new();
static GLOBAL_LOG_BUFFER: OnceLock<Arc<LogBuffer>> = OnceLock::new();

pub fn global_log_buffer() -> Arc<LogBuffer> {
    Arc::clone(
        GLOBAL_LOG_BUFFER
            .get_or_init(|| Arc::new(LogBuffer::new(LoggingConfig::default_buffer_lines()))),
    )
}

/// Install the global tracing subscriber described by `config`.
///
/// Only the first call in a process installs anything; every call returns the global
/// in-memory log buffer. If another subscriber is already the global default, this one is
/// dropped silently.
pub fn init_tracing(config: &LoggingConfig) -> Arc<LogBuffer> {
    let buffer = Arc::clone(
        GLOBAL_LOG_BUFFER.get_or_init(|| Arc::new(LogBuffer::new(config.buffer_lines))),
    );
    SUBSCRIBER_INSTALLED.call_once(|| install(config, &buffer));
    buffer
}

fn install(config: &LoggingConfig, buffer: &Arc<LogBuffer>) {
    let (writer, file_error) = sinks(config, buffer);

    let fmt = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer);
    let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
        fmt.json().boxed()
    } else {
        fmt.boxed()
    };

    let subscriber = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    if let Some((path, err)) = file_error {
        tracing::warn!(
            target: "namemap.config",
            path = %path.display(),
            error = %err,
            "cannot open log file; file logging disabled"
        );
    }
}

/// Buffer, then stderr and the log file when enabled. A file that cannot be opened is
/// reported back instead of failing the whole setup.
fn sinks<'c>(
    config: &'c LoggingConfig,
    buffer: &Arc<LogBuffer>,
) -> (BoxMakeWriter, Option<(&'c Path, io::Error)>) {
    let mut writer = BoxMakeWriter::new(BufferSink(Arc::clone(buffer)));

    if config.stderr {
        // `TestWriter` lets `cargo test` capture output in debug builds.
        writer = if cfg!(debug_assertions) {
            BoxMakeWriter::new(writer.and(TestWriter::with_stderr))
        } else {
            BoxMakeWriter::new(writer.and(io::stderr))
        };
    }

    let mut file_error = None;
    if let Some(path) = &config.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => writer = BoxMakeWriter::new(writer.and(Mutex::new(file))),
            Err(err) => file_error = Some((path.as_path(), err)),
        }
    }

    (writer, file_error)
}
