//! Power manager: inactivity bookkeeping over the pure power FSM.
//!
//! Owns the last-activity timestamp and the tier selection; every step
//! logs state changes. The control loop executes the returned commands
//! on the actual hardware.

use crate::power_logic::{
    PowerCommand, PowerEvent, PowerFsm, PowerState, SleepSchedule, SleepTier,
};
use defmt::info;
use embassy_time::Instant;

pub struct PowerManager {
    fsm: PowerFsm,
    last_activity: Instant,
}

impl PowerManager {
    pub fn new(tier: SleepTier) -> Self {
        Self {
            fsm: PowerFsm::new(tier, SleepSchedule::standard()),
            last_activity: Instant::now(),
        }
    }

    pub fn state(&self) -> PowerState {
        self.fsm.state()
    }

    pub fn tier(&self) -> SleepTier {
        self.fsm.tier()
    }

    /// Advance to the next sleep tier (TIER button).
    pub fn cycle_tier(&mut self) -> SleepTier {
        let next = self.fsm.tier().next();
        self.fsm.set_tier(next);
        info!("Power: sleep tier -> {}", next.index());
        next
    }

    /// Record a button press and step the FSM with it.
    pub fn activity(&mut self) -> PowerCommand {
        self.last_activity = Instant::now();
        self.step(PowerEvent::ButtonActivity)
    }

    /// The wake pin fired while the core was suspended.
    pub fn wake_alarm(&mut self) -> PowerCommand {
        self.last_activity = Instant::now();
        self.step(PowerEvent::WakeAlarm)
    }

    /// Reset the inactivity clock without stepping the FSM (used after a
    /// waking press has been drained).
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Periodic tick: drives the inactivity transitions.
    pub fn tick(&mut self) -> PowerCommand {
        let inactivity_ms = self.last_activity.elapsed().as_millis();
        self.step(PowerEvent::Tick { inactivity_ms })
    }

    fn step(&mut self, event: PowerEvent) -> PowerCommand {
        let before = self.fsm.state();
        let command = self.fsm.step(event);
        let after = self.fsm.state();
        if before != after {
            info!("Power: {} -> {}", before, after);
        }
        command
    }
}
