//! User interface subsystem - TFT display + physical buttons.
//!
//! The control loop polls the buttons every tick and repaints the scene
//! through the display wrapper when something changed.
//!
//! ## Components
//!
//! - **Display**: ST7789 240×135 color TFT via SPI, PWM backlight
//! - **Buttons**: 3 tactile switches (ROLL, DIE, TIER), polled + latched
//! - **Indicator**: status LED for minimal error feedback

pub mod buttons;
pub mod display;
pub mod indicator;
pub mod input_logic;
pub mod layout;

pub use input_logic::ButtonId;
