//! dicebox firmware entry point - nRF52840 with an ST7789 TFT, three
//! buttons, a MAX17048 fuel gauge, and a status LED.
//!
//! Hardware is brought up here; everything else happens in the single
//! cooperative loop in `app`.

#![no_std]
#![no_main]

mod animation;
mod app;
mod battery;
mod battery_logic;
mod config;
mod die;
mod error;
mod platform;
mod power;
mod power_logic;
mod powerlog;
mod rng;
mod sleep_store;
mod storage;
mod ui;

use app::App;
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin as _};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embedded_hal_bus::spi::ExclusiveDevice;
use panic_probe as _;
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => embassy_nrf::rng::InterruptHandler<peripherals::RNG>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("dicebox boot");

    // RGB pixel rail held off - it only costs battery
    let _pixel_rail = Output::new(p.P0_08, Level::Low, OutputDrive::Standard);

    // switched rail feeding the TFT and the fuel gauge
    let rail = ui::display::PeripheralRail::new(Output::new(
        p.P0_22,
        Level::High,
        OutputDrive::Standard,
    ));

    // TFT over SPI3
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M32;
    let spi = Spim::new_txonly(p.SPI3, Irqs, p.P0_14, p.P0_13, spi_config);
    let cs = Output::new(p.P0_16, Level::High, OutputDrive::Standard);
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).expect("SPI device");
    let dc = Output::new(p.P0_15, Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P0_17, Level::High, OutputDrive::Standard);
    static SPI_BUF: StaticCell<[u8; 512]> = StaticCell::new();
    let display = ui::display::init(spi_device, dc, rst, SPI_BUF.init([0u8; 512]))
        .expect("display init");

    let backlight = ui::display::Backlight::new(SimplePwm::new_1ch(p.PWM0, p.P0_20));

    let buttons = ui::buttons::Buttons::new(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
    );

    let indicator = ui::indicator::StatusIndicator::new(Output::new(
        p.P0_06,
        Level::Low,
        OutputDrive::Standard,
    ));

    let gauge = battery::FuelGauge::new(Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_26,
        p.P0_27,
        twim::Config::default(),
    ));

    let rng = rng::HardwareRng::new(embassy_nrf::rng::Rng::new(p.RNG, Irqs));
    let flash = storage::LogFlash::new(Nvmc::new(p.NVMC));

    let app = App::new(
        display, backlight, rail, buttons, indicator, gauge, rng, flash,
    );
    app.run().await
}
