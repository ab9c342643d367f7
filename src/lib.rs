//! squitter-core: Mode S extended squitter decoding + CPR position resolution.
//!
//! No async, no I/O — just algorithms. The decoder turns CRC-checked 56-bit
//! message payloads into typed messages; the CPR codec resolves the compact
//! position coordinates those messages carry, either against a known
//! reference position or from an even/odd frame pair.

pub mod altitude;
pub mod cpr;
pub mod cursor;
pub mod decode;
pub mod squawk;
pub mod stats;
pub mod types;

// Re-export commonly used types at crate root
pub use decode::{extract_characters, SquitterDecoder, PAYLOAD_BYTES};
pub use stats::{DecodeCounters, SquitterStatistics};
pub use types::*;
