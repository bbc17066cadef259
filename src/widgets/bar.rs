//! Horizontal gradient bar gauges (velocity and local gravity).
//!
//! The gradient is spatial: strip `i` always gets the color at `i / (width - 1)`
//! of the way from `start` to `end`, and the value only decides how many strips
//! are drawn. Overlays (ticks, end marker, border, labels) come after the fill.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::{
    BORDER, GAUGE_BG, GRAVITY_END, GRAVITY_START, MARKER, ROTATIONAL_END, ROTATIONAL_START, TICK, TOTAL_END,
    TOTAL_START, lerp_color,
};
use crate::config::{
    GRAVITY_BAR_HEIGHT, GRAVITY_BAR_TICKS, GRAVITY_BAR_WIDTH, GRAVITY_LABEL_DECIMALS, SPEED_BAR_HEIGHT,
    SPEED_BAR_WIDTH,
};
use crate::geometry::{proportion, widen_range};
use crate::primitives::{fill_rect, stroke_rect, vline};
use crate::styles::{BAR_LABEL_STYLE, TOP_CENTER};
use crate::thresholds::{GRAVITY_MAX, GRAVITY_MIN, ROTATIONAL_VELOCITY_MAX, TOTAL_VELOCITY_MAX};
use crate::widgets::readout::NumberFormat;

/// Per-call bar gauge configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGauge {
    pub top_left: Point,
    pub size: Size,
    pub min: f32,
    pub max: f32,
    pub start: Rgb888,
    pub end: Rgb888,
    /// Tick intervals; 0 disables ticks. `ticks + 1` marks are drawn.
    pub ticks: u32,
    /// 1px line at the last filled column.
    pub marker: bool,
    pub border: bool,
    /// Min/mid/max labels under the bar.
    pub labels: Option<NumberFormat>,
    /// Gap between the bar's bottom edge and the labels.
    pub label_margin: u32,
}

impl BarGauge {
    /// Full-featured bar: 5 ticks, end marker, labels with 3 decimals.
    pub const fn new(
        top_left: Point,
        size: Size,
        min: f32,
        max: f32,
        start: Rgb888,
        end: Rgb888,
    ) -> Self {
        Self {
            top_left,
            size,
            min,
            max,
            start,
            end,
            ticks: 5,
            marker: true,
            border: false,
            labels: Some(NumberFormat::new(3, " m/s^2")),
            label_margin: 4,
        }
    }

    /// Plain speed bar over `[0, max]`: gradient fill only.
    pub const fn speed(
        top_left: Point,
        max: f32,
        start: Rgb888,
        end: Rgb888,
    ) -> Self {
        let mut bar = Self::new(top_left, Size::new(SPEED_BAR_WIDTH, SPEED_BAR_HEIGHT), 0.0, max, start, end);
        bar.ticks = 0;
        bar.marker = false;
        bar.labels = None;
        bar
    }

    /// Local rotational velocity, 0..1700 km/h, red to green.
    pub const fn rotational_velocity(top_left: Point) -> Self {
        Self::speed(top_left, ROTATIONAL_VELOCITY_MAX, ROTATIONAL_START, ROTATIONAL_END)
    }

    /// Total velocity, 0..2700 km/h, cyan to magenta.
    pub const fn total_velocity(top_left: Point) -> Self {
        Self::speed(top_left, TOTAL_VELOCITY_MAX, TOTAL_START, TOTAL_END)
    }

    /// Local gravity bar with ticks, border and labels.
    pub const fn local_gravity(top_left: Point) -> Self {
        let mut bar = Self::new(
            top_left,
            Size::new(GRAVITY_BAR_WIDTH, GRAVITY_BAR_HEIGHT),
            GRAVITY_MIN,
            GRAVITY_MAX,
            GRAVITY_START,
            GRAVITY_END,
        );
        bar.ticks = GRAVITY_BAR_TICKS;
        bar.border = true;
        bar.labels = Some(NumberFormat::new(GRAVITY_LABEL_DECIMALS, " m/s^2"));
        bar
    }
}

/// Number of filled columns for `value` on a bar `width` pixels wide.
pub fn bar_filled_width(
    width: u32,
    value: f32,
    min: f32,
    max: f32,
) -> u32 {
    let p = proportion(value, min, max);
    libm::floorf(width as f32 * p + 0.5) as u32
}

/// Gradient color of column `i` on a bar `width` pixels wide.
pub fn bar_strip_color(
    i: u32,
    width: u32,
    start: Rgb888,
    end: Rgb888,
) -> Rgb888 {
    let denom = width.saturating_sub(1).max(1);
    lerp_color(start, end, i as f32 / denom as f32)
}

/// Draw a bar gauge and return the filled width in pixels.
pub fn draw_bar_gauge<D>(
    display: &mut D,
    gauge: &BarGauge,
    value: f32,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let w = gauge.size.width.max(1);
    let h = gauge.size.height.max(1);
    let Point { x, y } = gauge.top_left;
    let max = widen_range(gauge.min, gauge.max);

    let filled = bar_filled_width(w, value, gauge.min, max);

    fill_rect(display, gauge.top_left, Size::new(w, h), GAUGE_BG);

    for i in 0..filled {
        let color = Rgb565::from(bar_strip_color(i, w, gauge.start, gauge.end));
        vline(display, Point::new(x + i as i32, y), h, color);
    }

    if gauge.ticks > 0 {
        let tick_len = if h >= 10 { h / 3 } else { 2.min(h) };
        for k in 0..=gauge.ticks {
            let frac = k as f32 / gauge.ticks as f32;
            let x_tick = x + libm::floorf(frac * (w - 1) as f32 + 0.5) as i32;
            vline(display, Point::new(x_tick, y), tick_len, TICK);
            vline(display, Point::new(x_tick, y + (h - tick_len) as i32), tick_len, TICK);
        }
    }

    if gauge.marker && filled > 0 {
        vline(display, Point::new(x + filled as i32 - 1, y), h, MARKER);
    }

    if gauge.border {
        stroke_rect(display, gauge.top_left, Size::new(w, h), BORDER);
    }

    if let Some(format) = gauge.labels {
        let y_text = y + (h + gauge.label_margin) as i32;
        let mid = (gauge.min + max) * 0.5;
        let marks = [(x, gauge.min), (x + (w / 2) as i32, mid), (x + w as i32, max)];
        for (label_x, v) in marks {
            let s = format.format(v);
            Text::with_text_style(&s, Point::new(label_x, y_text), BAR_LABEL_STYLE, TOP_CENTER)
                .draw(display)
                .ok();
        }
    }

    filled
}

// =============================================================================
// Unit Tests
// =============================================================================
