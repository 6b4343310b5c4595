// NØNOS Operating System
// Copyright (C) 2025 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.
//
//! Ring-buffer logger for driver diagnostics.
//!
//! Entries are kept in a fixed-capacity deque; the oldest entry is dropped
//! when the buffer is full. Consumers drain with [`export_recent`].

use core::sync::atomic::{AtomicU64, Ordering};
use spin::Mutex;

use alloc::vec::Vec;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

/// Maximum message length kept per entry; longer messages are truncated.
const MESSAGE_CAPACITY: usize = 192;

/// Ring buffer capacity in entries.
const LOG_BUFFER_SIZE: usize = 256;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp_ms: u64,
    pub severity: Severity,
    pub message: heapless::String<MESSAGE_CAPACITY>,
}

pub struct Logger {
    entries: Mutex<heapless::Deque<LogEntry, LOG_BUFFER_SIZE>>,
    sequence: AtomicU64,
    min_level: Mutex<Severity>,
}

static LOGGER: Logger = Logger {
    entries: Mutex::new(heapless::Deque::new()),
    sequence: AtomicU64::new(0),
    min_level: Mutex::new(Severity::Debug),
};

impl Logger {
    fn push(&self, severity: Severity, msg: &str) {
        self.sequence.fetch_add(1, Ordering::Relaxed);

        let mut message = heapless::String::new();
        for ch in msg.chars() {
            if message.push(ch).is_err() {
                break;
            }
        }

        let entry = LogEntry {
            timestamp_ms: crate::time::timestamp_millis(),
            severity,
            message,
        };

        let mut entries = self.entries.lock();
        if entries.is_full() {
            entries.pop_front();
        }
        let _ = entries.push_back(entry);
    }
}

/// Record a message at the given severity, subject to the severity floor.
pub fn log(severity: Severity, msg: &str) {
    if severity < *LOGGER.min_level.lock() {
        return;
    }
    LOGGER.push(severity, msg);
}

pub fn log_debug(msg: &str) {
    log(Severity::Debug, msg);
}

pub fn log_info(msg: &str) {
    log(Severity::Info, msg);
}

pub fn log_warn(msg: &str) {
    log(Severity::Warn, msg);
}

pub fn log_err(msg: &str) {
    log(Severity::Error, msg);
}

/// Record a message unconditionally, bypassing the severity floor.
pub fn log_critical(msg: &str) {
    LOGGER.push(Severity::Fatal, msg);
}

/// Raise or lower the severity floor for subsequent [`log`] calls.
pub fn set_min_level(level: Severity) {
    *LOGGER.min_level.lock() = level;
}

/// Total number of messages submitted since boot (including dropped ones).
pub fn sequence() -> u64 {
    LOGGER.sequence.load(Ordering::Relaxed)
}

/// Copy out up to `count` most recent entries, oldest first.
pub fn export_recent(count: usize) -> Vec<LogEntry> {
    let entries = LOGGER.entries.lock();
    let skip = entries.len().saturating_sub(count);
    entries.iter().skip(skip).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_recorded() {
        log_info("logger-test: recorded marker");
        let recent = export_recent(LOG_BUFFER_SIZE);
        assert!(recent
            .iter()
            .any(|e| e.message.contains("logger-test: recorded marker")));
    }

    #[test]
    fn test_critical_bypasses_floor() {
        set_min_level(Severity::Fatal);
        log_critical("logger-test: critical marker");
        set_min_level(Severity::Debug);

        let recent = export_recent(LOG_BUFFER_SIZE);
        let entry = recent
            .iter()
            .find(|e| e.message.contains("logger-test: critical marker"))
            .expect("critical entry missing");
        assert_eq!(entry.severity, Severity::Fatal);
    }

    #[test]
    fn test_ring_buffer_bounded() {
        for i in 0..(LOG_BUFFER_SIZE + 16) {
            log_debug(&alloc::format!("logger-test: fill {}", i));
        }
        let recent = export_recent(usize::MAX);
        assert!(recent.len() <= LOG_BUFFER_SIZE);
    }

    #[test]
    fn test_long_message_truncated() {
        let long = "x".repeat(MESSAGE_CAPACITY * 2);
        log_warn(&long);
        let recent = export_recent(LOG_BUFFER_SIZE);
        let entry = recent
            .iter()
            .rev()
            .find(|e| e.message.starts_with("xxx"))
            .expect("truncated entry missing");
        assert_eq!(entry.message.len(), MESSAGE_CAPACITY);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }
}
