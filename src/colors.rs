//! Color constants and gradient interpolation for the HUD.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This is the native format of the panel, so every fill ends up as `Rgb565`.
//!
//! Gradient stops are kept as `Rgb888` and interpolated there, then reduced
//! with `Rgb565::from` when a pixel is written. Fixed palette entries are
//! built with [`rgb`], which drops the low bits of each 8-bit channel
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

use crate::geometry::clamp01;

/// Build a native color from 8-bit channels at compile time.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 { Rgb565::new(r >> 3, g >> 2, b >> 3) }

/// Per-channel linear interpolation between two stops.
///
/// `t` is clamped to `[0, 1]`. `t = 0` yields exactly `start` and `t = 1`
/// yields exactly `end`; in between, channels are truncated toward zero.
pub fn lerp_color(start: Rgb888, end: Rgb888, t: f32) -> Rgb888 {
    let t = clamp01(t);
    let channel = |a: u8, b: u8| -> u8 {
        let a = f32::from(a);
        let b = f32::from(b);
        (a + (b - a) * t) as u8
    };
    Rgb888::new(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
    )
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Chart background and label text on bright badges.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Latitude zero mark and numeric readouts.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Altitude alert color for filled segments below sea level.
pub const RED: Rgb565 = Rgb565::RED;

/// Latitude pointer.
pub const ORANGE: Rgb565 = rgb(255, 180, 0);

// =============================================================================
// Panel Colors
// =============================================================================

/// Navy panel background behind the gauges.
pub const PANEL_BG: Rgb565 = rgb(20, 21, 39);

/// Dark green-gray for empty segments, empty bars and bar backgrounds.
pub const GAUGE_BG: Rgb565 = rgb(30, 40, 30);

/// Bar gauge tick marks.
pub const TICK: Rgb565 = rgb(70, 80, 70);

/// Bar gauge end-of-fill marker line.
pub const MARKER: Rgb565 = rgb(230, 230, 230);

/// Bar gauge optional border.
pub const BORDER: Rgb565 = rgb(60, 60, 60);

/// Background of the local gravity pill (bar labels are drawn over it).
pub const GRAVITY_PILL: Rgb565 = rgb(253, 47, 43);

// =============================================================================
// Azimuth Ring
// =============================================================================

/// 360° base ring.
pub const RING: Rgb565 = rgb(24, 32, 28);

/// Subtle 360° track inside the ring.
pub const TRACK: Rgb565 = rgb(36, 46, 42);

/// Bright rotating heading marker.
pub const HEADING_MARKER: Rgb565 = rgb(230, 240, 255);

/// North triangle.
pub const CARDINAL_N: Rgb565 = rgb(255, 0, 0);

/// East triangle.
pub const CARDINAL_E: Rgb565 = rgb(255, 255, 0);

/// South triangle.
pub const CARDINAL_S: Rgb565 = rgb(0, 120, 255);

/// West triangle.
pub const CARDINAL_W: Rgb565 = rgb(0, 255, 0);

// =============================================================================
// GPS Signal Palette (indexed by bar count)
// =============================================================================

/// Palette for 0..=5 bars: gray, red, orange, yellow, green, strong green.
pub const GPS_BAR_COLORS: [Rgb565; 6] = [
    rgb(120, 120, 120),
    rgb(220, 60, 60),
    rgb(245, 170, 40),
    rgb(255, 220, 40),
    rgb(90, 200, 80),
    rgb(40, 170, 80),
];

// =============================================================================
// Battery
// =============================================================================

/// Battery outline and terminal tip.
pub const BATTERY_FRAME: Rgb565 = rgb(80, 80, 80);

/// Charge at or below 10%.
pub const BATTERY_LOW: Rgb565 = rgb(220, 40, 40);

/// Charge at or below 20%.
pub const BATTERY_WARN: Rgb565 = rgb(255, 220, 40);

/// Charge above 20%.
pub const BATTERY_OK: Rgb565 = rgb(0, 248, 81);

// =============================================================================
// Waveform Chart
// =============================================================================

/// Waveform polyline.
pub const CHART_LINE: Rgb565 = rgb(80, 255, 80);

/// Dashed zero reference (amber).
pub const CHART_ZERO: Rgb565 = rgb(220, 170, 40);

/// Fine grid.
pub const CHART_GRID: Rgb565 = rgb(18, 36, 18);

/// Major vertical grid lines.
pub const CHART_GRID_MAJOR: Rgb565 = rgb(32, 64, 32);

// =============================================================================
// Readout Badges
// =============================================================================

/// Northern hemisphere badge.
pub const HEMISPHERE_N: Rgb565 = rgb(235, 41, 67);

/// Southern hemisphere badge.
pub const HEMISPHERE_S: Rgb565 = rgb(26, 122, 170);

/// "TIME SLOWER" status text.
pub const DILATION_SLOWER: Rgb565 = rgb(127, 255, 27);

/// "TIME FASTER" status text.
pub const DILATION_FASTER: Rgb565 = rgb(239, 196, 16);

/// Background behind the time-dilation status text.
pub const STATUS_BG: Rgb565 = rgb(35, 34, 68);

// =============================================================================
// Gradient Stops (Rgb888, interpolated before reduction)
// =============================================================================

/// Altitude gradient, lowest segment.
pub const ALTITUDE_DARK: Rgb888 = Rgb888::new(0, 60, 0);

/// Altitude gradient, highest segment.
pub const ALTITUDE_LIGHT: Rgb888 = Rgb888::new(100, 255, 100);

/// Every filled altitude segment below sea level.
pub const ALTITUDE_ALERT: Rgb888 = Rgb888::new(255, 0, 0);

/// Rotational velocity bar, left edge.
pub const ROTATIONAL_START: Rgb888 = Rgb888::new(255, 0, 0);

/// Rotational velocity bar, right edge.
pub const ROTATIONAL_END: Rgb888 = Rgb888::new(100, 255, 100);

/// Total velocity bar, left edge.
pub const TOTAL_START: Rgb888 = Rgb888::new(28, 236, 221);

/// Total velocity bar, right edge.
pub const TOTAL_END: Rgb888 = Rgb888::new(234, 20, 223);

/// Local gravity bar, left edge.
pub const GRAVITY_START: Rgb888 = Rgb888::new(0, 160, 0);

/// Local gravity bar, right edge.
pub const GRAVITY_END: Rgb888 = Rgb888::new(218, 34, 57);

// =============================================================================
// Unit Tests
// =============================================================================
