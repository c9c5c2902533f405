//! `tracing` output routed to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};
use wasm_bindgen::JsValue;

use crate::config::LoggingConfig;

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init();
    if let Err(e) = installed {
        gloo::console::warn!(format!("tracing subscriber not installed: {e}"));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Log,
    Warn,
    Error,
}

impl Channel {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Channel::Error,
            Level::WARN => Channel::Warn,
            _ => Channel::Log,
        }
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Channel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(Channel::for_level(meta.level()))
    }
}

/// Buffers one formatted event and flushes it as a single console call on drop.
struct ConsoleWriter {
    channel: Channel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(channel: Channel) -> Self {
        Self { channel, buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let msg = JsValue::from_str(line.trim_end());
        match self.channel {
            Channel::Log => gloo::console::log!(msg),
            Channel::Warn => gloo::console::warn!(msg),
            Channel::Error => gloo::console::error!(msg),
        }
    }
}
