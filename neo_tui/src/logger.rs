//! In-memory log sink
//!
//! The terminal belongs to the UI, so log records are kept in a bounded
//! buffer and shown in the dashboard's event log instead of stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum retained log lines
pub const MAX_LINES: usize = 200;

/// Shared handle to the captured log lines
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<(Level, String)>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, level: Level, message: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push_back((level, message));
            while lines.len() > MAX_LINES {
                lines.pop_front();
            }
        }
    }

    /// Most recent `count` lines, oldest first
    pub fn recent(&self, count: usize) -> Vec<(Level, String)> {
        match self.lines.lock() {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(count);
                lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }
}

struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(record.level(), record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Install the buffer logger as the global logger
///
/// Returns the buffer even when a logger was already installed, in which
/// case it only receives lines pushed directly.
pub fn init(level: LevelFilter) -> LogBuffer {
    let buffer = LogBuffer::new();
    let logger = Box::leak(Box::new(BufferLogger {
        buffer: buffer.clone(),
        level,
    }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LINES + 50) {
            buffer.push(Level::Info, format!("line {}", i));
        }
        assert_eq!(buffer.line_count(), MAX_LINES);
        let recent = buffer.recent(1);
        assert_eq!(recent[0].1, format!("line {}", MAX_LINES + 49));
    }

    #[test]
    fn test_recent_order() {
        let buffer = LogBuffer::new();
        buffer.push(Level::Info, "a".to_string());
        buffer.push(Level::Warn, "b".to_string());
        buffer.push(Level::Info, "c".to_string());
        let recent: Vec<String> = buffer.recent(2).into_iter().map(|(_, m)| m).collect();
        assert_eq!(recent, vec!["b".to_string(), "c".to_string()]);
    }
}
