//! Status LED feedback.
//!
//! There is no room for error text once the display is dark, so faults
//! surface as short LED blinks and nothing else.

use embassy_nrf::gpio::Output;
use embassy_time::{Duration, Timer};

const BLINK_MS: u64 = 100;

pub struct StatusIndicator<'d> {
    led: Output<'d>,
}

impl<'d> StatusIndicator<'d> {
    pub fn new(led: Output<'d>) -> Self {
        Self { led }
    }

    /// Blink out a non-fatal fault.
    pub async fn blink_error(&mut self, times: u8) {
        for _ in 0..times {
            self.led.set_high();
            Timer::after(Duration::from_millis(BLINK_MS)).await;
            self.led.set_low();
            Timer::after(Duration::from_millis(BLINK_MS)).await;
        }
    }
}
