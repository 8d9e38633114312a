//! nRF52840 sleep/wake platform services.
//!
//! Deep sleep is System OFF: RAM is lost, wake is a full reset, and the
//! only state that survives is the retained GPREGRET register pair -
//! exactly the two bytes the persisted config needs. The wake button is
//! armed through its PIN_CNF SENSE field before suspending, and
//! RESETREAS tells the next boot whether it was a wake or a cold start.
//!
//! Light sleep needs no code here: with a single task, the Embassy
//! executor parks the core in WFE while `Buttons::wait_for_wake` is
//! pending.

use crate::config::WAKE_BUTTON_PIN;
use crate::sleep_store::{PersistedConfig, SleepMemory, StoreError, CONFIG_LEN};
use core::ptr;
use cortex_m::asm;

// POWER peripheral registers (nRF52840, base 0x40000000)
const POWER_RESETREAS: *mut u32 = 0x4000_0400 as *mut u32;
const POWER_SYSTEMOFF: *mut u32 = 0x4000_0500 as *mut u32;
const POWER_GPREGRET: *mut u32 = 0x4000_051C as *mut u32;
const POWER_GPREGRET2: *mut u32 = 0x4000_0520 as *mut u32;

/// RESETREAS bit 16: woken from System OFF by GPIO DETECT.
const RESETREAS_OFF_GPIO: u32 = 1 << 16;

// GPIO port 0 PIN_CNF[n] registers
const GPIO_P0_PIN_CNF_BASE: u32 = 0x5000_0700;

/// PIN_CNF value arming a wake pin: input buffer connected, pull-up,
/// SENSE = low.
const PIN_CNF_WAKE: u32 = (3 << 2) | (3 << 16);

/// True when this boot was a wake from System OFF, not a cold power-on.
pub fn wake_alarm_present() -> bool {
    unsafe { ptr::read_volatile(POWER_RESETREAS) & RESETREAS_OFF_GPIO != 0 }
}

/// RESETREAS bits are sticky (write-1-to-clear); clear ours so the next
/// boot reads a fresh cause.
pub fn clear_wake_alarm() {
    unsafe { ptr::write_volatile(POWER_RESETREAS, RESETREAS_OFF_GPIO) }
}

/// The retained GPREGRET pair exposed as a 2-byte sleep memory.
pub struct RetainedMemory;

impl SleepMemory for RetainedMemory {
    fn write(&mut self, config: &PersistedConfig) -> Result<(), StoreError> {
        let mut bytes = [0u8; CONFIG_LEN];
        config.encode(&mut bytes);
        unsafe {
            ptr::write_volatile(POWER_GPREGRET, bytes[0] as u32);
            ptr::write_volatile(POWER_GPREGRET2, bytes[1] as u32);
        }
        // The registers are plain retained I/O; a mismatched read-back
        // means the medium is gone.
        if self.read() == bytes {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }

    fn read(&self) -> [u8; CONFIG_LEN] {
        unsafe {
            [
                ptr::read_volatile(POWER_GPREGRET) as u8,
                ptr::read_volatile(POWER_GPREGRET2) as u8,
            ]
        }
    }
}

/// Arm the wake button and enter System OFF.
///
/// Execution ends here: wake is a reset back into the entry point, where
/// `wake_alarm_present` reports true and the persisted config is
/// restored. The diverging type makes an accidental fallthrough
/// uncompilable.
pub fn deep_sleep_until_wake_pin() -> ! {
    let pin_cnf = (GPIO_P0_PIN_CNF_BASE + 4 * WAKE_BUTTON_PIN as u32) as *mut u32;
    unsafe {
        ptr::write_volatile(pin_cnf, PIN_CNF_WAKE);
        ptr::write_volatile(POWER_SYSTEMOFF, 1);
    }
    // System OFF entry can slip by a few cycles; hold in WFE until it
    // takes effect.
    loop {
        asm::wfe();
    }
}
