//! MAX17048 fuel-gauge adapter.
//!
//! The gauge models the cell itself; only the state-of-charge register is
//! consumed here. It shares the switched rail with the TFT, so reads are
//! only attempted while that rail is up - a read with the rail down fails
//! as a transient `Error::Gauge` and the caller skips that update.

use crate::battery_logic::clamp_percent;
use crate::error::Error;
use embedded_hal_async::i2c::I2c;

/// 7-bit I²C address.
const MAX17048_ADDR: u8 = 0x36;

/// State-of-charge register: percent in 1/256 % units, big-endian.
const REG_SOC: u8 = 0x04;

pub struct FuelGauge<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> FuelGauge<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Raw percent as the gauge reports it (can exceed 100 briefly while
    /// charging).
    pub async fn read_percent(&mut self) -> Result<f32, Error> {
        let mut soc = [0u8; 2];
        self.i2c
            .write_read(MAX17048_ADDR, &[REG_SOC], &mut soc)
            .await
            .map_err(|_| Error::Gauge)?;
        Ok(u16::from_be_bytes(soc) as f32 / 256.0)
    }

    /// Clamped integer percent for the UI.
    pub async fn read_level(&mut self) -> Result<u8, Error> {
        Ok(clamp_percent(self.read_percent().await?))
    }
}
