//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

// Display

/// TFT resolution in landscape orientation.
pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 135;

/// Backlight level during normal operation (0.0 - 1.0).
pub const TFT_BRIGHTNESS: f32 = 0.5;

/// Backlight level once the inactivity dim threshold passes.
pub const TFT_DIM_BRIGHTNESS: f32 = 0.1;

// Inactivity policy

/// Dim the backlight after this much inactivity (ms).
pub const INACTIVITY_DIM_MS: u64 = 10_000;

/// Power the display/gauge rail off after this much inactivity (ms).
pub const INACTIVITY_RAIL_OFF_MS: u64 = 15_000;

/// In the hybrid tier, deep-sleep after this much inactivity (ms).
/// This is the main power-saving measure.
pub const INACTIVITY_DEEP_SLEEP_MS: u64 = 180_000;

// Main loop

/// Scheduler tick period (ms). Buttons are polled once per tick.
pub const TICK_INTERVAL_MS: u64 = 10;

// Roll animation

/// How long a roll animation runs (ms).
pub const ANIMATION_DURATION_MS: u64 = 500;

/// Polygon rotation advance per animation tick (degrees).
pub const ANIMATION_ROTATION_STEP_DEG: u16 = 10;

/// A fresh value is drawn every this-many animation ticks.
pub const ANIMATION_REROLL_EVERY_TICKS: u32 = 2;

// Defaults (used on cold boot; a deep-sleep wake restores persisted values)

/// Catalog index selected at cold boot - the D20.
pub const DEFAULT_DIE_INDEX: u8 = 3;

/// Sleep tier selected at cold boot - hybrid (rail off, then deep sleep).
pub const DEFAULT_SLEEP_TIER: u8 = 4;

// Battery icon geometry (pixels)

/// Icon offset from the display edge.
pub const BAT_ICON_MARGIN: i32 = 3;
pub const BAT_ICON_HEIGHT: i32 = 15;
pub const BAT_ICON_WIDTH: i32 = 35;
/// Terminal-nub step, a third of the icon height.
pub const BAT_ICON_STEP: i32 = BAT_ICON_HEIGHT / 3;
/// Gap between the icon frame and the drained bar.
pub const BAT_ICON_GAP: i32 = 2;

/// Icon is hidden while the battery reads at or above this percent.
pub const BAT_HIDE_THRESHOLD: u8 = 70;

/// Color band boundaries: red at or below, yellow at or below, else green.
pub const BAT_RED_MAX: u8 = 20;
pub const BAT_YELLOW_MAX: u8 = 70;

// GPIO pin assignments
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your board revision.
//
//   Button ROLL (wake)  → P0.11  (active-low, board pull-up)
//   Button DIE          → P0.12  (active-high, pull-down)
//   Button TIER         → P0.24  (active-high, pull-down)
//   TFT/gauge rail      → P0.22  (high = powered)
//   TFT SPI SCK / MOSI  → P0.14 / P0.13
//   TFT DC / CS / RST   → P0.15 / P0.16 / P0.17
//   TFT backlight (PWM) → P0.20
//   Status LED          → P0.06
//   RGB pixel rail      → P0.08  (driven low to save power)
//   I²C SDA / SCL       → P0.26 / P0.27

/// Port-0 pin number of the ROLL button, used to arm deep-sleep wake.
pub const WAKE_BUTTON_PIN: u8 = 11;

/// Backlight PWM resolution (counter top).
pub const BACKLIGHT_PWM_TOP: u16 = 1000;

/// Settling time after the peripheral rail powers back on (ms).
pub const RAIL_SETTLE_MS: u64 = 10;

// Battery usage log

/// Append one log record per boot/wake (for battery-life experiments).
pub const POWER_LOG_ENABLED: bool = false;

/// Flash page index where the log region starts (4 KB per page).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the log region.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;
