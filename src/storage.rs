//! Flash-backed battery usage log.
//!
//! Fixed-size records are appended to a dedicated flash region (kept out
//! of the program image by the linker script) through `sequential-storage`'s
//! queue, which handles page rotation and garbage collection.

use crate::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use crate::error::Error;
use crate::powerlog::LogRecord;
use defmt::{info, warn};
use embassy_nrf::nvmc::Nvmc;
use embedded_storage::nor_flash::{
    ErrorType, NorFlash as BlockingNorFlash, ReadNorFlash as BlockingReadNorFlash,
};
use embedded_storage_async::nor_flash::{NorFlash, ReadNorFlash};

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of the log region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of the log region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Internal flash exposed through the async NorFlash traits.
///
/// The NVMC driver is blocking; an erase stalls the core for a few ms,
/// which is acceptable for one small append per boot.
pub struct LogFlash<'d> {
    nvmc: Nvmc<'d>,
}

impl<'d> LogFlash<'d> {
    pub fn new(nvmc: Nvmc<'d>) -> Self {
        Self { nvmc }
    }
}

impl ErrorType for LogFlash<'_> {
    type Error = embassy_nrf::nvmc::Error;
}

impl<'d> ReadNorFlash for LogFlash<'d> {
    const READ_SIZE: usize = <Nvmc<'d> as BlockingReadNorFlash>::READ_SIZE;

    async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.nvmc.read(offset, bytes)
    }

    fn capacity(&self) -> usize {
        self.nvmc.capacity()
    }
}

impl<'d> NorFlash for LogFlash<'d> {
    const WRITE_SIZE: usize = <Nvmc<'d> as BlockingNorFlash>::WRITE_SIZE;
    const ERASE_SIZE: usize = <Nvmc<'d> as BlockingNorFlash>::ERASE_SIZE;

    async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        self.nvmc.write(offset, bytes)
    }

    async fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        self.nvmc.erase(from, to)
    }
}

/// Append one record, overwriting the oldest entries when the region is
/// full.
pub async fn append_record(flash: &mut LogFlash<'_>, record: &LogRecord) -> Result<(), Error> {
    let bytes = record.encode();
    match sequential_storage::queue::push(
        flash,
        STORAGE_START..STORAGE_END,
        &mut sequential_storage::cache::NoCache::new(),
        &bytes,
        true,
    )
    .await
    {
        Ok(()) => {
            info!(
                "powerlog: tier={} pct={}",
                record.sleep_tier, record.battery_percent
            );
            Ok(())
        }
        Err(e) => {
            warn!("powerlog: flash append failed: {:?}", defmt::Debug2Format(&e));
            Err(Error::Storage)
        }
    }
}
