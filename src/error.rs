//! Unified error type for dicebox.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use crate::sleep_store::StoreError;
use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// I²C transaction to the fuel gauge failed (rail down or bus fault).
    Gauge,

    /// Flash read/write/erase failed.
    Storage,

    /// Display init or draw failed.
    Display,

    /// Retained sleep memory rejected the config write.
    SleepMemory,
}

// Convenience conversions

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable => Error::SleepMemory,
        }
    }
}
