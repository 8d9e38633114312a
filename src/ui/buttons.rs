//! GPIO button input, polled once per scheduler tick.
//!
//! Three physical buttons:
//!   - ROLL - roll the selected die; doubles as the sleep wake pin
//!   - DIE  - cycle through the die catalog
//!   - TIER - cycle the sleep tier
//!
//! ROLL is active-low with the board pull-up; DIE and TIER are
//! active-high with pull-downs. The polarity lives in `input_logic` so
//! the mapping is testable on the host.

use crate::config::TICK_INTERVAL_MS;
use crate::ui::input_logic::{is_pressed, ButtonId};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};

pub struct Buttons<'d> {
    roll: Input<'d>,
    die: Input<'d>,
    tier: Input<'d>,
}

impl<'d> Buttons<'d> {
    pub fn new(roll_pin: AnyPin, die_pin: AnyPin, tier_pin: AnyPin) -> Self {
        Self {
            roll: Input::new(roll_pin, Pull::Up),
            die: Input::new(die_pin, Pull::Down),
            tier: Input::new(tier_pin, Pull::Down),
        }
    }

    /// Logical pressed state right now.
    pub fn pressed(&self, id: ButtonId) -> bool {
        is_pressed(self.input(id).is_high(), id.polarity())
    }

    pub fn any_pressed(&self) -> bool {
        self.pressed(ButtonId::Roll) || self.pressed(ButtonId::Die) || self.pressed(ButtonId::Tier)
    }

    /// Logical levels for the debounce latches, indexed by `ButtonId`.
    pub fn levels(&self) -> [bool; ButtonId::COUNT] {
        [
            self.pressed(ButtonId::Roll),
            self.pressed(ButtonId::Die),
            self.pressed(ButtonId::Tier),
        ]
    }

    /// Block until `id` reads released, polling at the tick period.
    ///
    /// Deliberately blocking: call sites use this instead of richer
    /// debounce state when a single release must gate progress.
    pub async fn await_release(&self, id: ButtonId) {
        while self.pressed(id) {
            Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;
        }
    }

    /// Drain a wake press: block until every button reads released, so
    /// the press that woke the device cannot double as a trigger.
    pub async fn drain(&self) {
        while self.any_pressed() {
            Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;
        }
    }

    /// Suspend until the wake button's pin goes low. With a single task,
    /// the executor parks the core in WFE here - this is the light-sleep
    /// block, not a poll loop.
    pub async fn wait_for_wake(&mut self) {
        self.roll.wait_for_low().await;
    }

    fn input(&self, id: ButtonId) -> &Input<'d> {
        match id {
            ButtonId::Roll => &self.roll,
            ButtonId::Die => &self.die,
            ButtonId::Tier => &self.tier,
        }
    }
}
