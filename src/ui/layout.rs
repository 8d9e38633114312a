//! Screen geometry: backdrop polygon vertices and glyph centering.
//!
//! The die area is the square right-hand portion of the landscape panel;
//! menu labels stack on the left, the battery icon sits bottom-left.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use heapless::Vec;
use libm::{cosf, sinf};

/// Up to a d100 backdrop (10-gon).
pub const MAX_POLYGON_SIDES: usize = 10;

pub type Points = Vec<(i32, i32), MAX_POLYGON_SIDES>;

/// Left edge of the square die area (right-aligned on screen).
pub const fn die_area_x0() -> i32 {
    (DISPLAY_WIDTH - DISPLAY_HEIGHT) as i32
}

/// Center of the die area.
pub const fn die_area_center() -> (i32, i32) {
    (
        die_area_x0() + DISPLAY_HEIGHT as i32 / 2,
        DISPLAY_HEIGHT as i32 / 2,
    )
}

/// Radius that fills the die area.
pub fn polygon_radius() -> f32 {
    DISPLAY_HEIGHT as f32 / 2.0
}

/// Vertices of a regular n-gon, angles read clockwise from the +X axis.
pub fn polygon_points(sides: u8, rotation_deg: u16, radius: f32, center: (i32, i32)) -> Points {
    let mut pts = Points::new();
    let n = sides.min(MAX_POLYGON_SIDES as u8);
    let internal = 360.0 / n as f32;
    for i in 0..n {
        let angle = (rotation_deg as f32 + internal * i as f32).to_radians();
        let x = radius * cosf(angle);
        let y = radius * sinf(angle);
        let _ = pts.push((round(x) + center.0, round(y) + center.1));
    }
    pts
}

/// X position that centers a run of text over the die area.
pub fn centered_text_x(text_px_width: i32) -> i32 {
    die_area_center().0 - text_px_width / 2
}

fn round(v: f32) -> i32 {
    if v >= 0.0 {
        (v + 0.5) as i32
    } else {
        (v - 0.5) as i32
    }
}
