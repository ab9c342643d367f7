//! Statistics sink for decode counting.
//!
//! The decoder owns a sink and notifies it exactly once per non-null
//! decode. The sink is the only shared mutable state in this crate; it
//! serializes its own increments so callers never need external locking
//! around decode calls.

use std::sync::Mutex;

use crate::types::{MessageFormat, MESSAGE_FORMAT_COUNT};

/// Receives one callback per successfully decoded message.
///
/// Implementations must be safe to call from many receiver threads at
/// once; a single short critical section per call is the expected shape.
pub trait SquitterStatistics: Send + Sync {
    fn record_decode(&self, format: MessageFormat, type_code: u8);
}

/// Per-format and per-type decode counters behind one mutex.
#[derive(Debug, Default)]
pub struct DecodeCounters {
    counts: Mutex<Counts>,
}

#[derive(Debug, Clone)]
struct Counts {
    by_format: [u64; MESSAGE_FORMAT_COUNT],
    by_type: [u64; 32],
}

impl Default for Counts {
    fn default() -> Counts {
        Counts {
            by_format: [0; MESSAGE_FORMAT_COUNT],
            by_type: [0; 32],
        }
    }
}

impl DecodeCounters {
    pub fn new() -> DecodeCounters {
        DecodeCounters::default()
    }

    /// Messages seen for one format.
    pub fn format_count(&self, format: MessageFormat) -> u64 {
        self.counts.lock().unwrap().by_format[format.index()]
    }

    /// Messages seen for one 5-bit type code.
    pub fn type_count(&self, type_code: u8) -> u64 {
        self.counts.lock().unwrap().by_type[(type_code & 0x1F) as usize]
    }

    /// Total messages recorded.
    pub fn total(&self) -> u64 {
        self.counts.lock().unwrap().by_format.iter().sum()
    }
}

impl SquitterStatistics for DecodeCounters {
    fn record_decode(&self, format: MessageFormat, type_code: u8) {
        let mut counts = self.counts.lock().unwrap();
        counts.by_format[format.index()] += 1;
        counts.by_type[(type_code & 0x1F) as usize] += 1;
    }
}

impl<S: SquitterStatistics + ?Sized> SquitterStatistics for &S {
    fn record_decode(&self, format: MessageFormat, type_code: u8) {
        (**self).record_decode(format, type_code);
    }
}

impl<S: SquitterStatistics + ?Sized> SquitterStatistics for std::sync::Arc<S> {
    fn record_decode(&self, format: MessageFormat, type_code: u8) {
        (**self).record_decode(format, type_code);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
