// crates/geobound-core/src/log.rs

//! # Log Sinks
//!
//! Progress and diagnostics are written to an injected [`LogSink`] rather
//! than a global logger. [`TracingSink`] forwards to `tracing`; [`MemorySink`]
//! keeps the lines so tests can assert on them.

use std::sync::Mutex;

/// Target used for all events emitted by [`TracingSink`].
pub const LOG_TARGET: &str = "geobound";

/// Two-severity logging capability.
pub trait LogSink {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn info(&self, msg: &str) {
        (**self).info(msg)
    }

    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

/// Default sink: emits `tracing` events under [`LOG_TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, msg: &str) {
        tracing::info!(target: LOG_TARGET, "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: LOG_TARGET, "{msg}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn info(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub message: String,
}

/// Captures lines in memory.
///
/// ```rust
/// use geobound_core::log::{LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.info("loading");
/// sink.error("boom");
/// assert_eq!(sink.errors(), vec!["boom".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<LogLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: Level, msg: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(LogLine {
            level,
            message: msg.to_owned(),
        });
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.level == level)
            .map(|l| l.message)
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Level::Error)
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl LogSink for MemorySink {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}
