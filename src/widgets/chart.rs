//! Scrolling waveform chart (ECG-style) for the time-dilation value.
//!
//! # Ring Buffer
//!
//! One mapped y value per column, stored in a fixed-capacity ring. `head` is
//! the newest sample; column `x` reads slot `(head + x + 1) % width`, so the
//! newest sample is always the rightmost column and the trace scrolls left.
//!
//! The first draw, and any draw on a surface of different size, seeds every
//! slot with the current sample: a cold start shows a flat line at the live
//! value instead of a ramp up from zero.
//!
//! Capacity is the const parameter `N` (default [`CHART_MAX_WIDTH`]). Size it
//! to the surface: on a surface wider than `N` the trace keeps its newest
//! sample on the right edge and the leftmost columns show only the grid.
//!
//! # Surface
//!
//! The chart fills the whole target it is given. To place it on a larger
//! display, pass `display.cropped(&area)`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::colors::{BLACK, CHART_GRID, CHART_GRID_MAJOR, CHART_LINE, CHART_ZERO, rgb};
use crate::config::{
    CHART_DASH_PX, CHART_GAP_PX, CHART_MAX_VALUE, CHART_MAX_WIDTH, CHART_MIN_DIM, CHART_MIN_VALUE, CHART_V_MAJOR_EVERY,
    CHART_V_STEP_PX,
};
use crate::geometry::map_clamped;
use crate::primitives::{fill_rect, hline, line, vline};

/// Value range, colors and grid spacing of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub min: f32,
    pub max: f32,
    pub background: Rgb565,
    pub line: Rgb565,
    pub zero: Rgb565,
    pub grid: Rgb565,
    pub grid_major: Rgb565,
    pub dash_px: u32,
    pub gap_px: u32,
    /// Vertical grid spacing; clamped to at least 1.
    pub v_step_px: u32,
    /// Every Nth vertical line is major; 0 disables major lines.
    pub v_major_every: u32,
}

impl ChartStyle {
    /// -6..3 ns/h with a dense grid and a major line every 4th.
    pub const TIME_DILATION: Self = Self {
        min: CHART_MIN_VALUE,
        max: CHART_MAX_VALUE,
        background: BLACK,
        line: CHART_LINE,
        zero: CHART_ZERO,
        grid: CHART_GRID,
        grid_major: CHART_GRID_MAJOR,
        dash_px: CHART_DASH_PX,
        gap_px: CHART_GAP_PX,
        v_step_px: CHART_V_STEP_PX,
        v_major_every: CHART_V_MAJOR_EVERY,
    };

    /// Panel variant: finer grid without major lines.
    pub const PANEL: Self = Self {
        v_step_px: 3,
        v_major_every: 0,
        grid_major: rgb(50, 90, 50),
        ..Self::TIME_DILATION
    };
}

impl Default for ChartStyle {
    fn default() -> Self { Self::TIME_DILATION }
}

/// A chart instance: style plus a ring buffer of up to `N` columns.
#[derive(Debug, Clone)]
pub struct WaveformChart<const N: usize = CHART_MAX_WIDTH> {
    style: ChartStyle,
    ybuf: Vec<i32, N>,
    head: usize,
    /// Surface size the buffer was seeded for; `None` until the first sample.
    dims: Option<Size>,
    undersized: bool,
}

impl<const N: usize> Default for WaveformChart<N> {
    fn default() -> Self { Self::new(ChartStyle::TIME_DILATION) }
}

impl<const N: usize> WaveformChart<N> {
    pub const fn new(style: ChartStyle) -> Self {
        Self {
            style,
            ybuf: Vec::new(),
            head: 0,
            dims: None,
            undersized: false,
        }
    }

    pub fn style(&self) -> &ChartStyle { &self.style }

    /// Index of the newest sample.
    pub fn head(&self) -> usize { self.head }

    /// Surface size the buffer was seeded for.
    pub fn dimensions(&self) -> Option<Size> { self.dims }

    /// Number of plotted columns.
    pub fn width(&self) -> usize { self.ybuf.len() }

    /// Blank columns left of the trace when the surface is wider than `N`.
    pub fn plot_offset(&self) -> u32 {
        self.dims.map_or(0, |size| size.width.saturating_sub(self.ybuf.len() as u32))
    }

    /// Plotted y of column `x` (0 = oldest, `width - 1` = newest).
    pub fn column_y(
        &self,
        x: usize,
    ) -> Option<i32> {
        let w = self.ybuf.len();
        if x >= w {
            return None;
        }
        self.ybuf.get((self.head + x + 1) % w).copied()
    }

    /// Record `sample` for a surface of `size` without drawing.
    ///
    /// Returns `false` if the surface (or the capacity `N`) is too small to
    /// chart, in which case the state is left unchanged.
    pub fn push(
        &mut self,
        size: Size,
        sample: f32,
    ) -> bool {
        if size.width < CHART_MIN_DIM || size.height < CHART_MIN_DIM || N < CHART_MIN_DIM as usize {
            if !self.undersized {
                hud_warn!("chart surface too small: {}x{}", size.width, size.height);
                self.undersized = true;
            }
            return false;
        }
        self.undersized = false;

        let y = map_clamped(sample, self.style.min, self.style.max, size.height as i32 - 1, 0);

        if self.dims != Some(size) {
            let w = (size.width as usize).min(N);
            self.ybuf.clear();
            // w <= capacity, so resize cannot fail
            self.ybuf.resize(w, y).ok();
            self.head = w - 1;
            self.dims = Some(size);
            hud_debug!("chart seeded {}x{}", size.width, size.height);
        } else {
            self.head = (self.head + 1) % self.ybuf.len();
            self.ybuf[self.head] = y;
        }
        true
    }

    /// Record `sample` and redraw the whole chart onto `display`.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        sample: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = display.bounding_box();
        if self.push(area.size, sample) {
            self.render(display);
        }
    }

    /// Redraw the current buffer without adding a sample.
    pub fn render<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(size) = self.dims else {
            return;
        };
        let origin = display.bounding_box().top_left;
        let s = &self.style;
        let full_w = size.width;
        let w = self.ybuf.len() as u32;
        let h = size.height;
        let y_of = |v: f32| map_clamped(v, s.min, s.max, h as i32 - 1, 0);

        fill_rect(display, origin, size, s.background);

        let v_step = s.v_step_px.max(1);
        let major_step = v_step * s.v_major_every;
        for x in (0..full_w).step_by(v_step as usize) {
            let is_major = s.v_major_every > 0 && x % major_step == 0;
            let color = if is_major { s.grid_major } else { s.grid };
            vline(display, origin + Point::new(x as i32, 0), h, color);
        }

        let u_start = libm::ceilf(s.min) as i32;
        let u_end = libm::floorf(s.max) as i32;
        for u in u_start..=u_end {
            if u == 0 {
                continue;
            }
            hline(display, origin + Point::new(0, y_of(u as f32)), full_w, s.grid);
        }

        if s.min <= 0.0 && 0.0 <= s.max {
            let y_zero = y_of(0.0);
            let period = (s.dash_px + s.gap_px).max(1);
            for x in (0..full_w).step_by(period as usize) {
                let len = s.dash_px.min(full_w - x);
                hline(display, origin + Point::new(x as i32, y_zero), len, s.zero);
            }
        }

        let trace_origin = origin + Point::new(self.plot_offset() as i32, 0);
        let mut prev = Point::new(0, self.column_y(0).unwrap_or(0));
        for x in 1..w as usize {
            let next = Point::new(x as i32, self.column_y(x).unwrap_or(prev.y));
            line(display, trace_origin + prev, trace_origin + next, s.line);
            prev = next;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::canvas::Canvas;

    /// 0..99 maps one unit per pixel row on a 100px tall surface.
    const UNIT_STYLE: ChartStyle = ChartStyle { min: 0.0, max: 99.0, ..ChartStyle::TIME_DILATION };

    #[test]
    fn test_cold_start_seeds_flat_line() {
        let mut chart: WaveformChart = WaveformChart::default();
        assert!(chart.dimensions().is_none());

        assert!(chart.push(Size::new(20, 10), CHART_MAX_VALUE));
        assert_eq!(chart.dimensions(), Some(Size::new(20, 10)));
        assert_eq!(chart.head(), 19, "head starts at the last slot");
        for x in 0..20 {
            assert_eq!(chart.column_y(x), Some(0), "max value maps to the top row at column {x}");
        }
    }

    #[test]
    fn test_head_advances_and_wraps() {
        let mut chart: WaveformChart = WaveformChart::new(UNIT_STYLE);
        let size = Size::new(5, 100);
        chart.push(size, 0.0);
        chart.push(size, 1.0);
        assert_eq!(chart.head(), 0, "head wraps from width - 1 to 0");
        chart.push(size, 2.0);
        assert_eq!(chart.head(), 1);
    }

    #[test]
    fn test_scrolls_newest_right_oldest_left() {
        let mut chart: WaveformChart = WaveformChart::new(UNIT_STYLE);
        let size = Size::new(8, 100);
        chart.push(size, 0.0);
        for i in 1..=8 {
            chart.push(size, i as f32);
        }
        // y = 99 - value on a 0..99 scale
        assert_eq!(chart.column_y(7), Some(99 - 8), "rightmost is the newest sample");
        assert_eq!(chart.column_y(0), Some(99 - 1), "leftmost is the oldest of the last 8");
        for x in 0..8 {
            assert_eq!(chart.column_y(x), Some(99 - (x as i32 + 1)));
        }
    }

    #[test]
    fn test_resize_reseeds_at_current_sample() {
        let mut chart: WaveformChart = WaveformChart::new(UNIT_STYLE);
        chart.push(Size::new(8, 100), 10.0);
        chart.push(Size::new(8, 100), 20.0);
        chart.push(Size::new(12, 100), 50.0);

        assert_eq!(chart.width(), 12);
        assert_eq!(chart.head(), 11);
        assert!((0..12).all(|x| chart.column_y(x) == Some(49)), "flat at the sample seen at resize");
    }

    #[test]
    fn test_height_change_also_reseeds() {
        let mut chart: WaveformChart = WaveformChart::new(UNIT_STYLE);
        chart.push(Size::new(8, 100), 10.0);
        chart.push(Size::new(8, 100), 20.0);
        chart.push(Size::new(8, 50), 30.0);
        assert_eq!(chart.head(), 7, "same width, new height still reseeds");
    }

    #[test]
    fn test_too_small_surface_is_ignored() {
        let mut chart: WaveformChart = WaveformChart::default();
        assert!(!chart.push(Size::new(2, 40), 1.0));
        assert!(!chart.push(Size::new(40, 2), 1.0));
        assert!(chart.dimensions().is_none(), "state untouched");

        let mut buf = vec![Rgb565::WHITE; 2 * 40];
        {
            let mut canvas = Canvas::new(&mut buf, 2, 40).unwrap();
            chart.draw(&mut canvas, 1.0);
        }
        assert!(buf.iter().all(|&c| c == Rgb565::WHITE), "nothing drawn");
    }

    #[test]
    fn test_capacity_sized_to_wide_surface() {
        let mut chart: WaveformChart<400> = WaveformChart::default();
        chart.push(Size::new(400, 40), 0.0);
        assert_eq!(chart.width(), 400, "one column per surface pixel");
        assert_eq!(chart.plot_offset(), 0);
    }

    #[test]
    fn test_surface_wider_than_capacity_keeps_newest_on_right() {
        let mut buf = vec![Rgb565::WHITE; 12 * 100];
        let mut canvas = Canvas::new(&mut buf, 12, 100).unwrap();
        let mut chart: WaveformChart<8> = WaveformChart::new(UNIT_STYLE);
        chart.draw(&mut canvas, 10.0);
        chart.draw(&mut canvas, 80.0);

        assert_eq!(chart.width(), 8, "capacity bound");
        assert_eq!(chart.plot_offset(), 4);
        assert_eq!(canvas.pixel(Point::new(11, 19)), Some(CHART_LINE), "newest sample on the right edge");
        assert_eq!(canvas.pixel(Point::new(4, 89)), Some(CHART_LINE), "oldest kept column after the offset");
        let left_blank = (0..4).all(|x| (0..100).all(|y| canvas.pixel(Point::new(x, y)) != Some(CHART_LINE)));
        assert!(left_blank, "no trace left of the offset");
        assert_eq!(canvas.pixel(Point::new(11, 80)), Some(CHART_GRID), "unit lines span the whole surface");
    }

    #[test]
    fn test_capacity_below_minimum_is_ignored() {
        let mut chart: WaveformChart<2> = WaveformChart::default();
        assert!(!chart.push(Size::new(40, 40), 0.0));
        assert!(chart.dimensions().is_none());
    }

    #[test]
    fn test_nan_sample_maps_to_bottom() {
        let mut chart: WaveformChart = WaveformChart::default();
        chart.push(Size::new(10, 40), f32::NAN);
        assert_eq!(chart.column_y(0), Some(39));
    }

    #[test]
    fn test_render_layers() {
        let mut buf = vec![Rgb565::WHITE; 40 * 40];
        let mut canvas = Canvas::new(&mut buf, 40, 40).unwrap();
        let mut chart: WaveformChart = WaveformChart::default();
        chart.draw(&mut canvas, CHART_MAX_VALUE);

        // -6..3 over 40 rows: zero at row 13, +1 at row 9
        assert_eq!(canvas.pixel(Point::new(1, 13)), Some(CHART_ZERO), "dash");
        assert_eq!(canvas.pixel(Point::new(5, 13)), Some(BLACK), "gap between dashes");
        assert_eq!(canvas.pixel(Point::new(8, 13)), Some(CHART_ZERO), "second dash");
        assert_eq!(canvas.pixel(Point::new(5, 9)), Some(CHART_GRID), "unit line");
        assert_eq!(canvas.pixel(Point::new(6, 20)), Some(CHART_GRID), "fine vertical line");
        assert_eq!(canvas.pixel(Point::new(24, 20)), Some(CHART_GRID_MAJOR), "every 4th vertical is major");
        assert_eq!(canvas.pixel(Point::new(10, 0)), Some(CHART_LINE), "flat trace on the top row");
        assert_eq!(canvas.pixel(Point::new(3, 31)), Some(BLACK), "background");
    }

    #[test]
    fn test_panel_style_has_no_major_lines() {
        let mut buf = vec![Rgb565::WHITE; 40 * 40];
        {
            let mut canvas = Canvas::new(&mut buf, 40, 40).unwrap();
            let mut chart: WaveformChart = WaveformChart::new(ChartStyle::PANEL);
            chart.draw(&mut canvas, 0.0);
        }
        assert!(!buf.iter().any(|&c| c == ChartStyle::PANEL.grid_major));
        assert_eq!(buf[20 * 40 + 3], CHART_GRID, "3px vertical grid");
    }

    #[test]
    fn test_draw_into_cropped_area() {
        let mut buf = vec![Rgb565::WHITE; 60 * 40];
        let mut canvas = Canvas::new(&mut buf, 60, 40).unwrap();
        let area = Rectangle::new(Point::new(10, 5), Size::new(30, 20));
        let mut chart: WaveformChart = WaveformChart::default();
        chart.draw(&mut canvas.cropped(&area), CHART_MAX_VALUE);

        assert_eq!(chart.dimensions(), Some(Size::new(30, 20)));
        assert_eq!(canvas.pixel(Point::new(39, 5)), Some(CHART_LINE), "newest column, top row of the area");
        assert_eq!(canvas.pixel(Point::new(9, 5)), Some(Rgb565::WHITE), "left of the area untouched");
        assert_eq!(canvas.pixel(Point::new(40, 5)), Some(Rgb565::WHITE), "right of the area untouched");
    }
}
