use chrono::Local;
use ringbuffer::{AllocRingBuffer, RingBuffer};

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Timestamped log of what happened in the session, oldest entries dropped first.
pub struct MoveHistory {
    entries: AllocRingBuffer<String>,
}

impl MoveHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: AllocRingBuffer::new(capacity.max(1)),
        }
    }

    pub fn record(&mut self, message: impl AsRef<str>) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.entries.enqueue(format!("[{}] {}", timestamp, message.as_ref()));
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&String> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the log, leaving a single "History cleared" entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.record("History cleared");
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
