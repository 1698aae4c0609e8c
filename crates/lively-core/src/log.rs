//! Append-only lifecycle log owned by one client.
//!
//! Entries are never evicted. The receipt callback runs on a transport-owned
//! task, so appends go through a mutex. A poisoned lock is recovered; appends
//! never fail.

use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDateTime, SubsecRound};

/// One lifecycle event with its local time, truncated to whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub event: String,
    pub at: NaiveDateTime,
}

impl LogEntry {
    /// ISO-8601 form without fractional seconds, e.g. `2024-05-01T12:30:05`.
    pub fn timestamp(&self) -> String {
        self.at.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

#[derive(Debug, Default)]
pub struct EventLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&self, event: impl Into<String>) {
        let entry = LogEntry {
            event: event.into(),
            at: Local::now().naive_local().trunc_subsecs(0),
        };
        tracing::debug!(event = %entry.event, at = %entry.timestamp(), "lifecycle event");
        self.lock().push(entry);
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
