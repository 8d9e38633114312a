//! Battery readout interpretation: clamping, color bands, icon fill.

use crate::config::{
    BAT_HIDE_THRESHOLD, BAT_ICON_GAP, BAT_ICON_STEP, BAT_ICON_WIDTH, BAT_RED_MAX, BAT_YELLOW_MAX,
};

/// Clamp a raw gauge reading to integer percent 0-100.
pub fn clamp_percent(raw: f32) -> u8 {
    raw.clamp(0.0, 100.0) as u8
}

/// 0xRRGGBB icon color for a given charge level.
pub fn color_for(percent: u8) -> u32 {
    if percent <= BAT_RED_MAX {
        0xFF0000
    } else if percent <= BAT_YELLOW_MAX {
        0xFFFF00
    } else {
        0x00FF00
    }
}

/// The icon disappears once the battery is comfortably full.
pub fn icon_hidden(percent: u8) -> bool {
    percent >= BAT_HIDE_THRESHOLD
}

/// Width of the black "drained" bar overlaying the icon body.
/// Always at least one pixel so a full battery still shows a seam.
pub fn drained_bar_width(percent: u8) -> i32 {
    let inner = BAT_ICON_WIDTH - BAT_ICON_STEP - 2 * BAT_ICON_GAP;
    (inner * (100 - percent as i32) / 100).max(1)
}
