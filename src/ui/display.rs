//! ST7789 TFT wrapper: scene drawing, backlight, and the peripheral rail.
//!
//! The panel is a 240×135 landscape TFT driven through mipidsi. The rail
//! switch powers both the panel and the fuel gauge; once it drops, the
//! controller loses its init sequence, so power-off hands the interface
//! parts back and power-on rebuilds the driver from them.

use crate::battery_logic::{color_for, drained_bar_width, icon_hidden};
use crate::config::{
    BACKLIGHT_PWM_TOP, BAT_ICON_GAP, BAT_ICON_HEIGHT, BAT_ICON_MARGIN, BAT_ICON_STEP,
    BAT_ICON_WIDTH, DISPLAY_HEIGHT,
};
use crate::error::Error;
use crate::ui::layout::{self, Points};
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_time::Delay;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;
use embedded_hal::spi::SpiDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;

/// Backdrop polygon color.
const POLYGON_COLOR: u32 = 0xCF50FA; // purple

/// Panel offsets for the 1.14" 135×240 ST7789 module.
const PANEL_OFFSET: (u16, u16) = (52, 40);

/// Type alias for the concrete display driver.
///
/// Generic over the SPI device so callers pass in their HAL's bus.
pub type Tft<'d, SPI> = mipidsi::Display<SpiInterface<'d, SPI, Output<'d>>, ST7789, Output<'d>>;

/// Interface parts held while the rail is off.
pub struct DisplayParts<'d, SPI> {
    di: SpiInterface<'d, SPI, Output<'d>>,
    rst: Output<'d>,
}

/// Initialise the TFT for the first time.
pub fn init<'d, SPI>(
    spi: SPI,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'d mut [u8],
) -> Result<Tft<'d, SPI>, Error>
where
    SPI: SpiDevice,
{
    build(SpiInterface::new(spi, dc, buffer), rst)
}

/// Tear the driver down before the rail drops, keeping the parts needed
/// to bring it back.
pub fn shutdown<'d, SPI>(display: Tft<'d, SPI>) -> Result<DisplayParts<'d, SPI>, Error>
where
    SPI: SpiDevice,
{
    let (di, _model, rst) = display.release();
    let rst = rst.ok_or(Error::Display)?;
    Ok(DisplayParts { di, rst })
}

/// Re-run the panel init sequence after the rail comes back.
pub fn revive<'d, SPI>(parts: DisplayParts<'d, SPI>) -> Result<Tft<'d, SPI>, Error>
where
    SPI: SpiDevice,
{
    build(parts.di, parts.rst)
}

fn build<'d, SPI>(
    di: SpiInterface<'d, SPI, Output<'d>>,
    rst: Output<'d>,
) -> Result<Tft<'d, SPI>, Error>
where
    SPI: SpiDevice,
{
    Builder::new(ST7789, di)
        .display_size(135, 240)
        .display_offset(PANEL_OFFSET.0, PANEL_OFFSET.1)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
        .map_err(|_| Error::Display)
}

/// Everything needed to paint one frame.
pub struct Frame<'a> {
    /// Big glyph over the polygon.
    pub roll_text: &'a str,
    /// Left-hand die label, e.g. `< D20`.
    pub die_label: &'a str,
    /// Sleep-tier tag, e.g. `S4`.
    pub tier_label: &'a str,
    /// Backdrop polygon vertices, already rotated.
    pub polygon: &'a Points,
    pub battery_percent: u8,
}

/// Repaint the whole scene.
pub fn draw_frame<SPI>(display: &mut Tft<'_, SPI>, frame: &Frame<'_>) -> Result<(), Error>
where
    SPI: SpiDevice,
{
    display.clear(Rgb565::BLACK).map_err(|_| Error::Display)?;

    fill_polygon(display, frame.polygon, rgb(POLYGON_COLOR)).map_err(|_| Error::Display)?;

    // roll glyph, centered over the polygon, dark on the bright backdrop
    let glyph_style = MonoTextStyle::new(&FONT_10X20, Rgb565::BLACK);
    let glyph_width = frame.roll_text.len() as i32 * FONT_10X20.character_size.width as i32;
    let (_, cy) = layout::die_area_center();
    Text::new(
        frame.roll_text,
        Point::new(layout::centered_text_x(glyph_width), cy + 7),
        glyph_style,
    )
    .draw(display)
    .map_err(|_| Error::Display)?;

    // menu labels along the left edge
    let menu_style = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
    Text::new("< ROLL", Point::new(0, 20), menu_style)
        .draw(display)
        .map_err(|_| Error::Display)?;
    Text::new(frame.die_label, Point::new(0, cy + 7), menu_style)
        .draw(display)
        .map_err(|_| Error::Display)?;

    let tag_style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
    Text::new(frame.tier_label, Point::new(0, DISPLAY_HEIGHT as i32 - 25), tag_style)
        .draw(display)
        .map_err(|_| Error::Display)?;

    draw_battery(display, frame.battery_percent).map_err(|_| Error::Display)?;

    Ok(())
}

/// Fill a convex polygon as a triangle fan from its first vertex.
fn fill_polygon<D>(target: &mut D, pts: &Points, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if pts.len() < 3 {
        return Ok(());
    }
    let style = PrimitiveStyle::with_fill(color);
    let anchor = point(pts[0]);
    for i in 1..pts.len() - 1 {
        Triangle::new(anchor, point(pts[i]), point(pts[i + 1]))
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

/// Battery icon, bottom-left: colored body + terminal nub, with a black
/// bar covering the drained fraction. Hidden while comfortably charged.
fn draw_battery<D>(target: &mut D, percent: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if icon_hidden(percent) {
        return Ok(());
    }

    let color = rgb(color_for(percent));
    let style = PrimitiveStyle::with_fill(color);
    let x0 = BAT_ICON_MARGIN;
    let y0 = DISPLAY_HEIGHT as i32 - BAT_ICON_HEIGHT - BAT_ICON_MARGIN;

    // body, then the narrower terminal nub on the right
    Rectangle::new(
        Point::new(x0, y0),
        Size::new((BAT_ICON_WIDTH - BAT_ICON_STEP) as u32, BAT_ICON_HEIGHT as u32),
    )
    .into_styled(style)
    .draw(target)?;
    Rectangle::new(
        Point::new(x0 + BAT_ICON_WIDTH - BAT_ICON_STEP, y0 + BAT_ICON_STEP),
        Size::new(BAT_ICON_STEP as u32, BAT_ICON_STEP as u32),
    )
    .into_styled(style)
    .draw(target)?;

    // black bar over the drained fraction, growing right-to-left
    let bar_width = drained_bar_width(percent);
    Rectangle::new(
        Point::new(
            x0 + BAT_ICON_WIDTH - BAT_ICON_STEP - BAT_ICON_GAP - bar_width,
            y0 + BAT_ICON_GAP,
        ),
        Size::new(bar_width as u32, (BAT_ICON_HEIGHT - 2 * BAT_ICON_GAP) as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
    .draw(target)?;

    Ok(())
}

fn point(p: (i32, i32)) -> Point {
    Point::new(p.0, p.1)
}

fn rgb(c: u32) -> Rgb565 {
    Rgb565::new(
        ((c >> 16 & 0xFF) >> 3) as u8,
        ((c >> 8 & 0xFF) >> 2) as u8,
        ((c & 0xFF) >> 3) as u8,
    )
}

/// TFT backlight on a PWM channel; brightness 0.0 - 1.0.
pub struct Backlight<'d> {
    pwm: SimplePwm<'d, PWM0>,
}

impl<'d> Backlight<'d> {
    pub fn new(mut pwm: SimplePwm<'d, PWM0>) -> Self {
        pwm.set_max_duty(BACKLIGHT_PWM_TOP);
        pwm.set_duty(0, 0);
        Self { pwm }
    }

    pub fn set_brightness(&mut self, level: f32) {
        let level = level.clamp(0.0, 1.0);
        self.pwm.set_duty(0, (BACKLIGHT_PWM_TOP as f32 * level) as u16);
    }

    pub fn off(&mut self) {
        self.pwm.set_duty(0, 0);
    }
}

/// Power rail feeding the TFT and the fuel gauge.
pub struct PeripheralRail<'d> {
    pin: Output<'d>,
}

impl<'d> PeripheralRail<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    pub fn power_on(&mut self) {
        self.pin.set_high();
    }

    pub fn power_off(&mut self) {
        self.pin.set_low();
    }

    pub fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}
