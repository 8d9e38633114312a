//! The cooperative control loop.
//!
//! Exactly one task runs this loop. All mutable state lives in `App`
//! and is touched only between tick boundaries, so there is nothing to
//! lock. Each tick: poll buttons, step the power FSM, advance any roll
//! animation, repaint.

use crate::battery::FuelGauge;
use crate::config::{
    DEFAULT_DIE_INDEX, DEFAULT_SLEEP_TIER, POWER_LOG_ENABLED, RAIL_SETTLE_MS, TFT_BRIGHTNESS,
    TFT_DIM_BRIGHTNESS, TICK_INTERVAL_MS,
};
use crate::die::{self, DieSpec, Roll, DICE};
use crate::platform::{self, RetainedMemory};
use crate::power::PowerManager;
use crate::power_logic::{PowerCommand, PowerState, SleepTier};
use crate::powerlog::LogRecord;
use crate::rng::HardwareRng;
use crate::sleep_store::{self, PersistedConfig, SleepMemory};
use crate::storage::{self, LogFlash};
use crate::ui::buttons::Buttons;
use crate::ui::display::{self, Backlight, DisplayParts, Frame, PeripheralRail, Tft};
use crate::ui::indicator::StatusIndicator;
use crate::ui::input_logic::DebounceLatch;
use crate::ui::layout;
use crate::ui::ButtonId;
use crate::animation::RollAnimation;
use core::fmt::Write as _;
use defmt::{info, warn};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::spi::SpiDevice;
use embedded_hal_async::i2c::I2c;
use heapless::String;

pub struct App<'d, SPI: SpiDevice, I2C: I2c> {
    display: Option<Tft<'d, SPI>>,
    parts: Option<DisplayParts<'d, SPI>>,
    backlight: Backlight<'d>,
    rail: PeripheralRail<'d>,
    buttons: Buttons<'d>,
    indicator: StatusIndicator<'d>,
    gauge: FuelGauge<I2C>,
    rng: HardwareRng<'d>,
    flash: LogFlash<'d>,
    sleep_memory: RetainedMemory,
    power: PowerManager,
    anim: RollAnimation,
    die_index: u8,
    roll: Roll,
    battery_percent: u8,
    die_latch: DebounceLatch,
    tier_latch: DebounceLatch,
}

impl<'d, SPI: SpiDevice, I2C: I2c> App<'d, SPI, I2C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        display: Tft<'d, SPI>,
        backlight: Backlight<'d>,
        rail: PeripheralRail<'d>,
        buttons: Buttons<'d>,
        indicator: StatusIndicator<'d>,
        gauge: FuelGauge<I2C>,
        mut rng: HardwareRng<'d>,
        flash: LogFlash<'d>,
    ) -> Self {
        // Wake-from-alarm boot: restore persisted settings before the
        // first frame. On a cold boot the sleep memory is stale and the
        // defaults apply.
        let sleep_memory = RetainedMemory;
        let wake_boot = platform::wake_alarm_present();
        if wake_boot {
            platform::clear_wake_alarm();
        }
        let (tier, die_index) = match sleep_store::load(&sleep_memory, wake_boot) {
            Some(PersistedConfig {
                sleep_tier,
                die_index,
            }) => {
                info!(
                    "wake boot: restored tier={} die={}",
                    sleep_tier.index(),
                    die_index
                );
                (sleep_tier, die_index)
            }
            None => (
                SleepTier::from_index(DEFAULT_SLEEP_TIER).unwrap_or(SleepTier::Hybrid),
                DEFAULT_DIE_INDEX,
            ),
        };

        let roll = DICE[die_index as usize].roll(&mut rng);
        let anim = RollAnimation::new(DICE[die_index as usize].base_rotation_deg());

        Self {
            display: Some(display),
            parts: None,
            backlight,
            rail,
            buttons,
            indicator,
            gauge,
            rng,
            flash,
            sleep_memory,
            power: PowerManager::new(tier),
            anim,
            die_index,
            roll,
            battery_percent: 0,
            die_latch: DebounceLatch::new(),
            tier_latch: DebounceLatch::new(),
        }
    }

    pub async fn run(mut self) -> ! {
        self.backlight.set_brightness(TFT_BRIGHTNESS);
        match self.gauge.read_level().await {
            Ok(pct) => self.battery_percent = pct,
            Err(_) => warn!("gauge unreadable at boot"),
        }
        if POWER_LOG_ENABLED {
            self.log_battery().await;
        }

        // a roll greets every boot, cold or wake
        self.anim.start(now_ms());

        loop {
            match self.power.state() {
                PowerState::Active | PowerState::Dimmed => self.awake_tick().await,
                PowerState::LowPower => self.low_power_tick().await,
                // suspends happen inline below; the loop can never come
                // back around in one of these states
                PowerState::LightSleep | PowerState::DeepSleep => {
                    defmt::panic!("sleep contract violated: observed {}", self.power.state())
                }
            }
            Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;
        }
    }

    /// One tick with the display rail up (Active or Dimmed).
    async fn awake_tick(&mut self) {
        let now = now_ms();

        if self.anim.running() {
            // animation gets priority; most of the tick work is skipped
            let tick = self.anim.tick(now);
            if tick.reroll {
                self.roll = self.die_spec().roll(&mut self.rng);
            }
            self.redraw();
            if tick.finished {
                // hold until the initiating press lifts so it cannot
                // immediately re-trigger
                self.buttons.await_release(ButtonId::Roll).await;
            }
        } else {
            if self.buttons.any_pressed() {
                let cmd = self.power.activity();
                self.apply(cmd).await;
            }
            if self.buttons.pressed(ButtonId::Roll) {
                self.anim.start(now);
            }

            // the gauge shares the powered rail here; a failed read is
            // transient and just skips this update
            match self.gauge.read_level().await {
                Ok(pct) if pct != self.battery_percent => {
                    self.battery_percent = pct;
                    self.redraw();
                }
                Ok(_) => {}
                Err(_) => {}
            }

            let cmd = self.power.tick();
            self.apply(cmd).await;
        }

        // die and tier switches work even mid-animation
        self.cycle_buttons(now).await;
    }

    /// One tick with the rail down: watch for deep-sleep escalation or a
    /// waking press.
    async fn low_power_tick(&mut self) {
        let cmd = self.power.tick();
        self.apply(cmd).await;

        if self.power.state() == PowerState::LowPower && self.buttons.any_pressed() {
            let cmd = self.power.activity();
            self.apply(cmd).await;
        }
    }

    /// Latched handling of the DIE and TIER buttons.
    async fn cycle_buttons(&mut self, now: u64) {
        let levels = self.buttons.levels();

        if self.die_latch.trigger(levels[ButtonId::Die.index()]) {
            self.die_index = die::next_die_index(self.die_index);
            let spec = self.die_spec();
            info!("die -> D{}", spec.sides());
            // switching dice restarts the animation on the new backdrop
            self.anim.set_rotation(spec.base_rotation_deg());
            let cmd = self.power.activity();
            self.apply(cmd).await;
            self.anim.start(now);
        }

        if self.tier_latch.trigger(levels[ButtonId::Tier.index()]) {
            let cmd = self.power.activity();
            self.apply(cmd).await;
            let _ = self.power.cycle_tier();
            self.redraw();
        }
    }

    /// Execute one FSM command on the hardware.
    async fn apply(&mut self, cmd: PowerCommand) {
        match cmd {
            PowerCommand::None => {}
            PowerCommand::DimBacklight => self.backlight.set_brightness(TFT_DIM_BRIGHTNESS),
            PowerCommand::RestoreBrightness => self.backlight.set_brightness(TFT_BRIGHTNESS),
            PowerCommand::RailOff => self.power_off_display(),
            PowerCommand::WakeFromRailOff => self.wake_from_rail_off().await,
            PowerCommand::SuspendCore => {
                info!("Power: core suspended until wake press");
                self.buttons.wait_for_wake().await;
                // the FSM maps the alarm to a rail wake-up
                let _ = self.power.wake_alarm();
                self.wake_from_rail_off().await;
            }
            PowerCommand::PersistAndDeepSleep => self.enter_deep_sleep().await,
            PowerCommand::Fault => defmt::panic!("execution resumed after deep sleep"),
        }
    }

    /// Rail down: backlight off, driver torn down, gauge unreachable.
    fn power_off_display(&mut self) {
        info!("Power: rail off");
        self.backlight.off();
        if let Some(display) = self.display.take() {
            match display::shutdown(display) {
                Ok(parts) => self.parts = Some(parts),
                Err(_) => warn!("display teardown failed"),
            }
        }
        self.rail.power_off();
    }

    /// Rail up: re-init the panel, drain the waking press, repaint.
    async fn wake_from_rail_off(&mut self) {
        info!("Power: rail waking");
        self.rail.power_on();
        Timer::after(Duration::from_millis(RAIL_SETTLE_MS)).await;

        if let Some(parts) = self.parts.take() {
            match display::revive(parts) {
                Ok(display) => self.display = Some(display),
                Err(_) => warn!("display re-init failed"),
            }
        }
        self.backlight.set_brightness(TFT_BRIGHTNESS);

        // the press that woke us is consumed here, not rolled
        self.buttons.drain().await;
        self.power.touch();

        if let Ok(pct) = self.gauge.read_level().await {
            self.battery_percent = pct;
        }
        self.redraw();
    }

    /// Persist, then suspend. Wake is a reboot; this never returns.
    async fn enter_deep_sleep(&mut self) -> ! {
        let config = PersistedConfig {
            sleep_tier: self.power.tier(),
            die_index: self.die_index,
        };
        // the write must land before the suspend - there is no second
        // chance to persist
        match self.sleep_memory.write(&config) {
            Ok(()) => info!("Power: config persisted, entering deep sleep"),
            Err(_) => {
                warn!("sleep memory write failed; next boot uses defaults");
                self.indicator.blink_error(3).await;
            }
        }
        platform::deep_sleep_until_wake_pin()
    }

    /// Repaint the scene if the display is powered.
    fn redraw(&mut self) {
        let spec = self.die_spec();
        let polygon = layout::polygon_points(
            spec.polygon_sides(),
            self.anim.rotation_deg(),
            layout::polygon_radius(),
            layout::die_area_center(),
        );
        let roll_label = self.roll.label();
        let mut die_label: String<8> = String::new();
        let _ = write!(die_label, "< D{}", spec.sides());
        let mut tier_label: String<4> = String::new();
        let _ = write!(tier_label, "S{}", self.power.tier().index());

        let frame = Frame {
            roll_text: roll_label.as_str(),
            die_label: die_label.as_str(),
            tier_label: tier_label.as_str(),
            polygon: &polygon,
            battery_percent: self.battery_percent,
        };
        if let Some(display) = self.display.as_mut() {
            if display::draw_frame(display, &frame).is_err() {
                warn!("display draw failed");
            }
        }
    }

    /// Append one battery record (logging builds only; rail must be up).
    async fn log_battery(&mut self) {
        match self.gauge.read_level().await {
            Ok(pct) => {
                let record = LogRecord {
                    sleep_tier: self.power.tier().index(),
                    timestamp: Instant::now().as_secs() as u32,
                    battery_percent: pct,
                };
                if storage::append_record(&mut self.flash, &record).await.is_err() {
                    self.indicator.blink_error(2).await;
                }
            }
            Err(_) => warn!("powerlog: gauge read failed"),
        }
    }

    fn die_spec(&self) -> &'static DieSpec {
        // die_index is validated at every assignment site
        &DICE[self.die_index as usize]
    }
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}
