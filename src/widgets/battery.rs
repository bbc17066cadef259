//! Battery status: outlined body, terminal tip, banded fill and a percentage.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BATTERY_FRAME, BATTERY_LOW, BATTERY_OK, BATTERY_WARN, BLACK};
use crate::config::{
    BATTERY_BODY_H, BATTERY_BODY_W, BATTERY_MAX_SCALE, BATTERY_TEXT_PAD, BATTERY_TIP_H, BATTERY_TIP_W, SCREEN_WIDTH,
};
use crate::primitives::{fill_rect, stroke_rect};
use crate::styles::{MIDDLE_LEFT, READOUT_STYLE_WHITE};
use crate::thresholds::{BATTERY_CRITICAL_PCT, BATTERY_WARNING_PCT};
use crate::widgets::bar::bar_filled_width;

/// Battery placement and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryGauge {
    pub top_left: Point,
    /// Multiplies every dimension; results are truncated to whole pixels.
    /// Clamped to `0..=BATTERY_MAX_SCALE`.
    pub scale: f32,
    pub show_percent: bool,
}

/// Pixel dimensions of a battery at some scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryDims {
    pub body: Size,
    pub tip: Size,
    pub pad: u32,
}

impl BatteryGauge {
    /// Header placement, right-aligned with room for the percentage.
    pub const HEADER: Self = Self::new(Point::new(SCREEN_WIDTH as i32 - 60, 6), 0.8, true);

    pub const fn new(
        top_left: Point,
        scale: f32,
        show_percent: bool,
    ) -> Self {
        Self { top_left, scale, show_percent }
    }

    pub fn dims(&self) -> BatteryDims {
        let s = self.scale.max(0.0).min(BATTERY_MAX_SCALE);
        let px = |v: f32| (v * s) as u32;
        BatteryDims {
            body: Size::new(px(BATTERY_BODY_W), px(BATTERY_BODY_H)),
            tip: Size::new(px(BATTERY_TIP_W), px(BATTERY_TIP_H)),
            pad: px(BATTERY_TEXT_PAD),
        }
    }
}

/// Fill color band for a charge level.
pub fn battery_fill_color(percent: u8) -> Rgb565 {
    if percent <= BATTERY_CRITICAL_PCT {
        BATTERY_LOW
    } else if percent <= BATTERY_WARNING_PCT {
        BATTERY_WARN
    } else {
        BATTERY_OK
    }
}

/// Draw the battery and return the filled width in pixels.
pub fn draw_battery<D>(
    display: &mut D,
    gauge: &BatteryGauge,
    percent: i32,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let percent = percent.clamp(0, 100) as u8;
    let BatteryDims { body, tip, pad } = gauge.dims();
    let Point { x, y } = gauge.top_left;

    stroke_rect(display, gauge.top_left, body, BATTERY_FRAME);
    let tip_y = y + (body.height as i32 - tip.height as i32) / 2;
    fill_rect(display, Point::new(x + body.width as i32, tip_y), tip, BATTERY_FRAME);

    let inner_origin = Point::new(x + 1, y + 1);
    let inner = Size::new(body.width.saturating_sub(2), body.height.saturating_sub(2));
    fill_rect(display, inner_origin, inner, BLACK);

    let filled = bar_filled_width(inner.width, f32::from(percent), 0.0, 100.0);
    fill_rect(display, inner_origin, Size::new(filled, inner.height), battery_fill_color(percent));

    if gauge.show_percent {
        let mut s: String<8> = String::new();
        write!(s, "{percent:>3}%").ok();
        let text_x = x + (body.width + tip.width + pad) as i32;
        let text_y = y + (body.height / 2) as i32;
        Text::with_text_style(&s, Point::new(text_x, text_y), READOUT_STYLE_WHITE, MIDDLE_LEFT)
            .draw(display)
            .ok();
    }

    filled
}

// =============================================================================
// Unit Tests
// =============================================================================
