//! Tiered power-state machine.
//!
//! Pure transition logic: the control loop feeds in periodic inactivity
//! ticks and button/wake events, and executes the returned `PowerCommand`
//! on the hardware. One machine, parameterized by `SleepTier`, covers
//! every sleep configuration the gadget supports.
//!
//! State meanings:
//! - `Active`    - full brightness, everything powered.
//! - `Dimmed`    - backlight lowered; cues the user sleep is coming.
//! - `LowPower`  - display/gauge rail off; the core keeps polling buttons.
//! - `LightSleep`- core suspended on the wake pin; no polling happens.
//! - `DeepSleep` - reboot-on-wake sleep. Terminal for this process: the
//!   suspend call diverges, and config must be persisted first.

use crate::config::{INACTIVITY_DEEP_SLEEP_MS, INACTIVITY_DIM_MS, INACTIVITY_RAIL_OFF_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Active,
    Dimmed,
    LowPower,
    LightSleep,
    DeepSleep,
}

/// Sleep aggressiveness, selectable at runtime with the TIER button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepTier {
    /// Never dim or sleep.
    AlwaysOn,
    /// Display and gauge rail power off after inactivity.
    DisplayOff,
    /// Rail off, then the core suspends until the wake pin fires.
    CoreSuspend,
    /// Rail off and immediately deep-sleep (reboot on wake).
    DeepOnly,
    /// Rail off first, deep-sleep after a longer inactivity window.
    Hybrid,
}

impl SleepTier {
    pub const COUNT: u8 = 5;

    pub fn from_index(index: u8) -> Option<SleepTier> {
        match index {
            0 => Some(SleepTier::AlwaysOn),
            1 => Some(SleepTier::DisplayOff),
            2 => Some(SleepTier::CoreSuspend),
            3 => Some(SleepTier::DeepOnly),
            4 => Some(SleepTier::Hybrid),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            SleepTier::AlwaysOn => 0,
            SleepTier::DisplayOff => 1,
            SleepTier::CoreSuspend => 2,
            SleepTier::DeepOnly => 3,
            SleepTier::Hybrid => 4,
        }
    }

    /// Wrap-around step to the next tier.
    pub fn next(self) -> SleepTier {
        match SleepTier::from_index((self.index() + 1) % Self::COUNT) {
            Some(tier) => tier,
            None => SleepTier::AlwaysOn,
        }
    }

    fn sleeps_display(self) -> bool {
        !matches!(self, SleepTier::AlwaysOn)
    }

    fn suspends_core(self) -> bool {
        matches!(self, SleepTier::CoreSuspend)
    }

    fn deep_sleeps_immediately(self) -> bool {
        matches!(self, SleepTier::DeepOnly)
    }

    fn deep_sleeps_after_timeout(self) -> bool {
        matches!(self, SleepTier::Hybrid)
    }
}

/// Inactivity thresholds in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SleepSchedule {
    pub dim_after_ms: u64,
    pub rail_off_after_ms: u64,
    pub deep_sleep_after_ms: u64,
}

impl SleepSchedule {
    pub const fn standard() -> Self {
        Self {
            dim_after_ms: INACTIVITY_DIM_MS,
            rail_off_after_ms: INACTIVITY_RAIL_OFF_MS,
            deep_sleep_after_ms: INACTIVITY_DEEP_SLEEP_MS,
        }
    }
}

/// Hardware-facing side effect of one FSM step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum PowerCommand {
    /// No side effect this step.
    None,
    /// Drop the backlight to the dim level.
    DimBacklight,
    /// Power the display/gauge rail off.
    RailOff,
    /// Full brightness (button seen while Active or Dimmed).
    RestoreBrightness,
    /// Rail back on, full brightness, and drain the waking press so it
    /// does not double as a roll trigger.
    WakeFromRailOff,
    /// Block on the wake pin; the core suspends until it fires.
    SuspendCore,
    /// Persist config, then enter reboot-on-wake sleep. The suspend call
    /// diverges; it must be strictly ordered after the persist.
    PersistAndDeepSleep,
    /// Execution was observed in a state that cannot be running - the
    /// platform broke the sleep contract. Fatal.
    Fault,
}

/// Input to one FSM step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerEvent {
    /// Periodic scheduler tick carrying time since the last button press.
    Tick { inactivity_ms: u64 },
    /// Any button read as pressed by the poll loop.
    ButtonActivity,
    /// The designated wake pin fired while the core was suspended.
    WakeAlarm,
}

pub struct PowerFsm {
    state: PowerState,
    tier: SleepTier,
    schedule: SleepSchedule,
}

impl PowerFsm {
    pub const fn new(tier: SleepTier, schedule: SleepSchedule) -> Self {
        Self {
            state: PowerState::Active,
            tier,
            schedule,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn tier(&self) -> SleepTier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: SleepTier) {
        self.tier = tier;
    }

    /// Advance the machine by one event. Total: every (state, event) pair
    /// has a defined outcome.
    pub fn step(&mut self, event: PowerEvent) -> PowerCommand {
        match (self.state, event) {
            // DeepSleep never runs code; observing it means the platform
            // failed to suspend.
            (PowerState::DeepSleep, _) => PowerCommand::Fault,

            // No ticks can be delivered while the core is suspended.
            (PowerState::LightSleep, PowerEvent::Tick { .. }) => PowerCommand::None,
            (PowerState::LightSleep, PowerEvent::ButtonActivity)
            | (PowerState::LightSleep, PowerEvent::WakeAlarm) => {
                self.state = PowerState::Active;
                PowerCommand::WakeFromRailOff
            }

            (PowerState::LowPower, PowerEvent::ButtonActivity)
            | (PowerState::LowPower, PowerEvent::WakeAlarm) => {
                self.state = PowerState::Active;
                PowerCommand::WakeFromRailOff
            }

            (PowerState::Active, PowerEvent::ButtonActivity)
            | (PowerState::Active, PowerEvent::WakeAlarm)
            | (PowerState::Dimmed, PowerEvent::ButtonActivity)
            | (PowerState::Dimmed, PowerEvent::WakeAlarm) => {
                self.state = PowerState::Active;
                PowerCommand::RestoreBrightness
            }

            (PowerState::LowPower, PowerEvent::Tick { inactivity_ms }) => {
                self.low_power_tick(inactivity_ms)
            }
            (PowerState::Active, PowerEvent::Tick { inactivity_ms })
            | (PowerState::Dimmed, PowerEvent::Tick { inactivity_ms }) => {
                self.awake_tick(inactivity_ms)
            }
        }
    }

    /// Inactivity cascade while the display is on.
    fn awake_tick(&mut self, inactivity_ms: u64) -> PowerCommand {
        if !self.tier.sleeps_display() {
            // Tier can be lowered at runtime while already dimmed.
            if self.state == PowerState::Dimmed {
                self.state = PowerState::Active;
                return PowerCommand::RestoreBrightness;
            }
            return PowerCommand::None;
        }

        let target = if inactivity_ms >= self.schedule.rail_off_after_ms {
            PowerState::LowPower
        } else if inactivity_ms >= self.schedule.dim_after_ms {
            PowerState::Dimmed
        } else {
            PowerState::Active
        };

        if target == self.state {
            return PowerCommand::None;
        }
        self.state = target;
        match target {
            PowerState::LowPower => PowerCommand::RailOff,
            PowerState::Dimmed => PowerCommand::DimBacklight,
            _ => PowerCommand::RestoreBrightness,
        }
    }

    /// Escalation once the rail is already off.
    fn low_power_tick(&mut self, inactivity_ms: u64) -> PowerCommand {
        if self.tier.deep_sleeps_immediately()
            || (self.tier.deep_sleeps_after_timeout()
                && inactivity_ms >= self.schedule.deep_sleep_after_ms)
        {
            self.state = PowerState::DeepSleep;
            return PowerCommand::PersistAndDeepSleep;
        }
        if self.tier.suspends_core() {
            self.state = PowerState::LightSleep;
            return PowerCommand::SuspendCore;
        }
        PowerCommand::None
    }
}
