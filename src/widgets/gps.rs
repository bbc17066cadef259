//! GPS signal quality from horizontal dilation of precision (HDOP).
//!
//! Two readings come from one HDOP sample:
//!
//! - a discrete bar count (0..=5) from [`HDOP_BAR_LADDER`]
//! - a continuous level (0.0..=5.0) from [`HDOP_LEVEL_CUTS`], smoothed over
//!   ticks by [`GpsSignal`] so the partial bar animates
//!
//! Both render as five bottom-aligned bars of increasing height.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{GAUGE_BG, GPS_BAR_COLORS};
use crate::config::{
    GPS_BAR_COUNT, GPS_BAR_HEIGHT_FRACTIONS, GPS_LEVEL_ALPHA, GPS_MIN_BAR_WIDTH, GPS_MIN_GAP, GPS_MIN_HEIGHT,
    GPS_PARTIAL_MIN,
};
use crate::primitives::fill_rect;
use crate::smoothing::ExpSmoother;
use crate::thresholds::{GPS_MAX_BARS, HDOP_BAR_LADDER, HDOP_LEVEL_CUTS, HDOP_LEVEL_SEED};

/// Discrete bar count. Non-positive or non-finite HDOP is no signal.
pub fn signal_bars(hdop: f32) -> u8 {
    if !(hdop > 0.0) {
        return 0;
    }
    HDOP_BAR_LADDER
        .iter()
        .find(|(max_hdop, _)| hdop <= *max_hdop)
        .map_or(0, |&(_, bars)| bars)
}

/// Continuous level interpolated between ladder rungs.
///
/// The interpolation runs from the previous rung to the first cut that is
/// not exceeded; the first "previous rung" is [`HDOP_LEVEL_SEED`], so any
/// HDOP in `(0.8, 10]` lands on the coarsest rung and reads about 1.0.
pub fn signal_level(hdop: f32) -> f32 {
    if !(hdop > 0.0) {
        return 0.0;
    }
    let (finest_hdop, finest_level) = HDOP_LEVEL_CUTS[HDOP_LEVEL_CUTS.len() - 1];
    if hdop <= finest_hdop {
        return finest_level;
    }

    let mut prev_hdop = HDOP_LEVEL_SEED;
    let mut prev_level = 0.0;
    for (cut_hdop, cut_level) in HDOP_LEVEL_CUTS {
        if hdop <= cut_hdop {
            let t = crate::geometry::clamp01((prev_hdop - hdop) / (prev_hdop - cut_hdop));
            return prev_level + t * (cut_level - prev_level);
        }
        prev_hdop = cut_hdop;
        prev_level = cut_level;
    }
    0.0
}

/// Fill color for a bar count (clamped to 0..=5).
#[inline]
pub fn color_for_bars(bars: u8) -> Rgb565 { GPS_BAR_COLORS[usize::from(bars.min(GPS_MAX_BARS))] }

/// Geometry of the five-bar gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsGauge {
    pub top_left: Point,
    pub height: u32,
    pub bar_width: u32,
    pub gap: u32,
}

impl GpsGauge {
    /// Header placement.
    pub const HEADER: Self = Self::new(Point::new(82, 5), 13, 5, 2);

    pub const fn new(
        top_left: Point,
        height: u32,
        bar_width: u32,
        gap: u32,
    ) -> Self {
        Self { top_left, height, bar_width, gap }
    }

    /// Bar `i` (0 = shortest) as `(top_left, size)`, with minimum dimensions applied.
    pub fn bar(
        &self,
        i: usize,
    ) -> (Point, Size) {
        let h = self.height.max(GPS_MIN_HEIGHT);
        let w = self.bar_width.max(GPS_MIN_BAR_WIDTH);
        let gap = self.gap.max(GPS_MIN_GAP);

        let frac = GPS_BAR_HEIGHT_FRACTIONS[i.min(GPS_BAR_COUNT - 1)];
        let bh = libm::floorf(h as f32 * frac + 0.5) as u32;
        let x = self.top_left.x + (i as u32 * (w + gap)) as i32;
        let y = self.top_left.y + (h - bh) as i32;
        (Point::new(x, y), Size::new(w, bh))
    }
}

/// Flat gauge: the first `bars` bars filled in the color for `bars`.
pub fn draw_gps_bars<D>(
    display: &mut D,
    gauge: &GpsGauge,
    bars: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bars = usize::from(bars.min(GPS_MAX_BARS));
    let fill = color_for_bars(bars as u8);

    for i in 0..GPS_BAR_COUNT {
        let (top_left, size) = gauge.bar(i);
        fill_rect(display, top_left, size, if i < bars { fill } else { GAUGE_BG });
    }
}

/// Smooth gauge: `floor(level)` bars full, the next one filled bottom-up by
/// the fractional part. Color follows `ceil(level)`, so it changes as soon
/// as a bar starts filling.
pub fn draw_gps_level<D>(
    display: &mut D,
    gauge: &GpsGauge,
    level: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level = level.max(0.0).min(f32::from(GPS_MAX_BARS));
    let mut full = libm::floorf(level) as usize;
    let mut part = level - full as f32;
    if full >= GPS_BAR_COUNT {
        full = GPS_BAR_COUNT;
        part = 0.0;
    }
    let fill = color_for_bars(libm::ceilf(level) as u8);

    for i in 0..GPS_BAR_COUNT {
        let (top_left, size) = gauge.bar(i);
        fill_rect(display, top_left, size, GAUGE_BG);

        if i < full {
            fill_rect(display, top_left, size, fill);
        } else if i == full && part > GPS_PARTIAL_MIN {
            let ph = libm::floorf(size.height as f32 * part + 0.5) as u32;
            let y = top_left.y + (size.height - ph) as i32;
            fill_rect(display, Point::new(top_left.x, y), Size::new(size.width, ph), fill);
        }
    }
}

/// Per-instance GPS estimator: owns the smoothed level.
#[derive(Debug, Clone, Copy)]
pub struct GpsSignal {
    level: ExpSmoother,
    bars: u8,
}

impl Default for GpsSignal {
    fn default() -> Self { Self::new() }
}

impl GpsSignal {
    /// No signal: level 0, 0 bars.
    pub fn new() -> Self {
        Self {
            level: ExpSmoother::new(0.0, GPS_LEVEL_ALPHA, 0.0, f32::from(GPS_MAX_BARS)),
            bars: 0,
        }
    }

    /// Feed one HDOP sample and return the smoothed level.
    pub fn update(
        &mut self,
        hdop: f32,
    ) -> f32 {
        let bars = signal_bars(hdop);
        if bars != self.bars {
            if bars == 0 {
                hud_warn!("GPS signal lost");
            } else if self.bars == 0 {
                hud_info!("GPS signal acquired: {} bars", bars);
            } else {
                hud_debug!("GPS bars {} -> {}", self.bars, bars);
            }
            self.bars = bars;
        }
        self.level.update(signal_level(hdop))
    }

    pub fn level(&self) -> f32 { self.level.value() }

    /// Bar count of the most recent sample (unsmoothed).
    pub fn bars(&self) -> u8 { self.bars }

    /// Draw the smooth gauge at the current level.
    pub fn draw<D>(
        &self,
        display: &mut D,
        gauge: &GpsGauge,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_gps_level(display, gauge, self.level());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::colors::BLACK;

    #[test]
    fn test_signal_bars_ladder() {
        assert_eq!(signal_bars(0.9), 5);
        assert_eq!(signal_bars(1.5), 4);
        assert_eq!(signal_bars(3.0), 3);
        assert_eq!(signal_bars(6.0), 2);
        assert_eq!(signal_bars(10.0), 1);
        assert_eq!(signal_bars(10.01), 0, "worse than the last rung is no signal");
        assert_eq!(signal_bars(0.0), 0, "zero HDOP is invalid");
        assert_eq!(signal_bars(-2.0), 0);
        assert_eq!(signal_bars(f32::NAN), 0, "NaN is invalid");
        assert_eq!(signal_bars(0.1), 5);
    }

    #[test]
    fn test_signal_level_boundaries() {
        assert_eq!(signal_level(0.8), 5.0, "finest cut is full level");
        assert_eq!(signal_level(0.5), 5.0);
        assert_eq!(signal_level(10.0), 1.0, "coarsest cut is level 1");
        assert_eq!(signal_level(10.5), 0.0);
        assert_eq!(signal_level(f32::NAN), 0.0);
        assert_eq!(signal_level(-1.0), 0.0);
    }

    #[test]
    fn test_signal_level_plateau() {
        // The seed rung makes everything between the coarsest and finest cut read ~1
        for hdop in [1.0, 2.0, 3.0, 6.0, 9.9] {
            let level = signal_level(hdop);
            assert!((level - 1.0).abs() < 1e-3, "hdop {hdop} -> {level}");
        }
    }

    #[test]
    fn test_color_for_bars_clamps() {
        assert_eq!(color_for_bars(0), GPS_BAR_COLORS[0]);
        assert_eq!(color_for_bars(3), GPS_BAR_COLORS[3]);
        assert_eq!(color_for_bars(200), GPS_BAR_COLORS[5]);
    }

    #[test]
    fn test_bar_geometry() {
        let g = GpsGauge::HEADER;
        let heights: Vec<u32> = (0..5).map(|i| g.bar(i).1.height).collect();
        assert_eq!(heights, vec![7, 9, 10, 12, 13]);
        // Bottom-aligned
        for i in 0..5 {
            let (p, s) = g.bar(i);
            assert_eq!(p.y + s.height as i32, 5 + 13, "bar {i} ends at the gauge bottom");
            assert_eq!(p.x, 82 + 7 * i as i32);
        }
    }

    #[test]
    fn test_bar_geometry_minimums() {
        let g = GpsGauge::new(Point::zero(), 2, 1, 0);
        let (p, s) = g.bar(4);
        assert_eq!(s, Size::new(3, 8), "height >= 8, width >= 3");
        assert_eq!(p.x, 4 * 4, "gap >= 1");
    }

    #[test]
    fn test_draw_flat() {
        let mut buf = vec![BLACK; 60 * 20];
        let mut canvas = Canvas::new(&mut buf, 60, 20).unwrap();
        let g = GpsGauge::new(Point::zero(), 13, 5, 2);
        draw_gps_bars(&mut canvas, &g, 2);

        let bottom = 12;
        assert_eq!(canvas.pixel(Point::new(0, bottom)), Some(GPS_BAR_COLORS[2]));
        assert_eq!(canvas.pixel(Point::new(7, bottom)), Some(GPS_BAR_COLORS[2]));
        assert_eq!(canvas.pixel(Point::new(14, bottom)), Some(GAUGE_BG), "third bar empty");
        assert_eq!(canvas.pixel(Point::new(5, bottom)), Some(BLACK), "gap between bars");
    }

    #[test]
    fn test_draw_smooth_partial() {
        let mut buf = vec![BLACK; 60 * 20];
        let mut canvas = Canvas::new(&mut buf, 60, 20).unwrap();
        let g = GpsGauge::new(Point::zero(), 13, 5, 2);
        draw_gps_level(&mut canvas, &g, 2.5);

        let fill = GPS_BAR_COLORS[3];
        assert_eq!(canvas.pixel(Point::new(0, 12)), Some(fill), "bar 0 full, color from ceil(2.5)");
        assert_eq!(canvas.pixel(Point::new(7, 4)), Some(fill), "bar 1 full to its top");
        // Bar 2: height 10 (rows 3..13), half filled -> rows 8..13
        assert_eq!(canvas.pixel(Point::new(14, 12)), Some(fill));
        assert_eq!(canvas.pixel(Point::new(14, 8)), Some(fill));
        assert_eq!(canvas.pixel(Point::new(14, 7)), Some(GAUGE_BG), "upper half stays empty");
        assert_eq!(canvas.pixel(Point::new(21, 12)), Some(GAUGE_BG), "bar 3 empty");
    }

    #[test]
    fn test_draw_smooth_clamps() {
        let g = GpsGauge::new(Point::zero(), 13, 5, 2);
        let mut full = vec![BLACK; 60 * 20];
        {
            let mut canvas = Canvas::new(&mut full, 60, 20).unwrap();
            draw_gps_level(&mut canvas, &g, 9.0);
        }
        assert!(!full.iter().any(|&c| c == GAUGE_BG), "over-range fills every bar");

        let mut empty = vec![BLACK; 60 * 20];
        {
            let mut canvas = Canvas::new(&mut empty, 60, 20).unwrap();
            draw_gps_level(&mut canvas, &g, f32::NAN);
        }
        assert!(!empty.iter().any(|&c| GPS_BAR_COLORS.contains(&c)), "NaN draws empty bars");
    }

    #[test]
    fn test_gps_signal_smooths_toward_target() {
        let mut gps = GpsSignal::new();
        assert_eq!(gps.level(), 0.0);
        assert_eq!(gps.bars(), 0);

        let first = gps.update(0.5);
        assert_eq!(gps.bars(), 5);
        assert!((first - 1.25).abs() < 1e-6, "one step of alpha 0.25 toward 5");

        let mut prev = first;
        for _ in 0..50 {
            let level = gps.update(0.5);
            assert!(level >= prev && level <= 5.0, "monotone, never above 5");
            prev = level;
        }
        assert!(prev > 4.99);

        gps.update(f32::NAN);
        assert_eq!(gps.bars(), 0, "invalid sample drops the bar count immediately");
        assert!(gps.level() < prev, "level decays toward 0");
    }
}
