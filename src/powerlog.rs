//! Battery-usage log records.
//!
//! One record per boot or wake: sleep tier, timestamp, battery percent.
//! Records are appended as fixed 6-byte frames with the timestamp packed
//! big-endian; `line()` renders the `tier,timestamp,percent` text form
//! the offline analysis scripts consume.

use core::fmt::Write as _;
use heapless::String;

pub const RECORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub sleep_tier: u8,
    /// Seconds; big-endian in the encoded frame.
    pub timestamp: u32,
    pub battery_percent: u8,
}

impl LogRecord {
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[0] = self.sleep_tier;
        buf[1..5].copy_from_slice(&self.timestamp.to_be_bytes());
        buf[5] = self.battery_percent;
        buf
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < RECORD_LEN {
            return None;
        }
        let mut ts = [0u8; 4];
        ts.copy_from_slice(&buf[1..5]);
        Some(Self {
            sleep_tier: buf[0],
            timestamp: u32::from_be_bytes(ts),
            battery_percent: buf[5],
        })
    }

    /// `"<tier>,<timestamp>,<percent>\n"`
    pub fn line(&self) -> String<24> {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "{},{},{}",
            self.sleep_tier, self.timestamp, self.battery_percent
        );
        s
    }
}
