//! Segmented arc gauges: altitude and latitude.
//!
//! A gauge splits `total_deg` into `segments` equal slices starting at
//! `start_deg` (surface angles) and draws each slice as an annulus arc,
//! narrowed by `gap_deg`. Slice bounds are truncated to whole degrees.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;

use crate::colors::{ALTITUDE_ALERT, ALTITUDE_DARK, ALTITUDE_LIGHT, GAUGE_BG, ORANGE, WHITE, lerp_color};
use crate::config::{
    ALTITUDE_INNER_R, ALTITUDE_OUTER_R, ALTITUDE_SEGMENTS, ALTITUDE_SPAN_DEG, ALTITUDE_START_DEG, LATITUDE_INNER_R,
    LATITUDE_OUTER_R, LATITUDE_SEGMENTS, LATITUDE_SPAN_DEG, LATITUDE_START_DEG, LATITUDE_ZERO_MARK_DEG,
};
use crate::geometry::proportion;
use crate::primitives::{ArcSpan, fill_arc};
use crate::thresholds::{ALTITUDE_ALERT_BELOW_M, ALTITUDE_MAX_M, ALTITUDE_MIN_M, LATITUDE_LIMIT_DEG};

/// Geometry of a segmented arc gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentedArc {
    pub center: Point,
    pub outer: u32,
    pub inner: u32,
    /// Clamped to at least 1 when used.
    pub segments: u32,
    pub start_deg: i32,
    pub total_deg: i32,
    pub gap_deg: i32,
}

impl SegmentedArc {
    /// Full-circle altitude ring on a 90x90 surface.
    pub const ALTITUDE: Self = Self {
        center: Point::new(45, 45),
        outer: ALTITUDE_OUTER_R,
        inner: ALTITUDE_INNER_R,
        segments: ALTITUDE_SEGMENTS,
        start_deg: ALTITUDE_START_DEG,
        total_deg: ALTITUDE_SPAN_DEG,
        gap_deg: 0,
    };

    /// Half-circle latitude gauge on a 90x90 surface.
    pub const LATITUDE: Self = Self {
        center: Point::new(45, 45),
        outer: LATITUDE_OUTER_R,
        inner: LATITUDE_INNER_R,
        segments: LATITUDE_SEGMENTS,
        start_deg: LATITUDE_START_DEG,
        total_deg: LATITUDE_SPAN_DEG,
        gap_deg: 0,
    };

    /// Same gauge drawn around a different center.
    pub const fn at(
        self,
        center: Point,
    ) -> Self {
        Self { center, ..self }
    }

    #[inline]
    pub fn segment_count(&self) -> u32 { self.segments.max(1) }

    #[inline]
    pub fn angle_per_segment(&self) -> f32 { self.total_deg as f32 / self.segment_count() as f32 }

    /// Angular bounds of slice `i`. Never inverted; may be empty when the gap
    /// eats the whole slice.
    pub fn segment_span(
        &self,
        i: u32,
    ) -> ArcSpan {
        let aps = self.angle_per_segment();
        let start = (self.start_deg as f32 + i as f32 * aps) as i32;
        let end = ((start as f32 + aps - self.gap_deg as f32) as i32).max(start);
        ArcSpan::new(start, end)
    }

    fn fill_segment<D>(
        &self,
        display: &mut D,
        span: ArcSpan,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        fill_arc(display, self.center, self.outer, self.inner, span, color);
    }
}

// =============================================================================
// Altitude
// =============================================================================

/// `round(segments * p)` where `p` is the altitude's share of the scale.
pub fn altitude_filled_segments(
    segments: u32,
    altitude: f32,
) -> u32 {
    let p = proportion(altitude, ALTITUDE_MIN_M, ALTITUDE_MAX_M);
    libm::floorf(segments.max(1) as f32 * p + 0.5) as u32
}

/// Color of filled segment `i`: the index gradient, or the alert color for
/// every segment when below sea level.
pub fn altitude_segment_color(
    i: u32,
    segments: u32,
    altitude: f32,
) -> Rgb888 {
    if altitude < ALTITUDE_ALERT_BELOW_M {
        return ALTITUDE_ALERT;
    }
    let segments = segments.max(1);
    let t = if segments > 1 { i as f32 / (segments - 1) as f32 } else { 1.0 };
    lerp_color(ALTITUDE_DARK, ALTITUDE_LIGHT, t)
}

/// Draw the altitude gauge and return the number of filled segments.
pub fn draw_altitude_gauge<D>(
    display: &mut D,
    gauge: &SegmentedArc,
    altitude: f32,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let segments = gauge.segment_count();
    let filled = altitude_filled_segments(segments, altitude);

    for i in 0..segments {
        let color = if i < filled {
            Rgb565::from(altitude_segment_color(i, segments, altitude))
        } else {
            GAUGE_BG
        };
        gauge.fill_segment(display, gauge.segment_span(i), color);
    }
    filled
}

// =============================================================================
// Latitude
// =============================================================================

/// Fixed reference mark at latitude 0 (the middle of the span).
pub fn latitude_zero_span(gauge: &SegmentedArc) -> ArcSpan {
    let mid = gauge.start_deg as f32 + gauge.total_deg as f32 / 2.0;
    let half = LATITUDE_ZERO_MARK_DEG as f32 / 2.0;
    ArcSpan::new((mid - half) as i32, (mid + half) as i32)
}

/// Pointer slice for `latitude`, about one segment wide, kept inside the span.
pub fn latitude_pointer_span(
    gauge: &SegmentedArc,
    latitude: f32,
) -> ArcSpan {
    let lat = latitude.max(-LATITUDE_LIMIT_DEG).min(LATITUDE_LIMIT_DEG);
    let t = (lat + LATITUDE_LIMIT_DEG) / (2.0 * LATITUDE_LIMIT_DEG);
    let angle = gauge.start_deg as f32 + t * gauge.total_deg as f32;
    let aps = gauge.angle_per_segment();

    let start = ((angle - aps / 2.0) as i32).max(gauge.start_deg);
    let end = ((angle + aps / 2.0 - gauge.gap_deg as f32) as i32).min(gauge.start_deg + gauge.total_deg);
    ArcSpan::new(start, end)
}

/// Draw the latitude gauge and return the pointer span.
pub fn draw_latitude_gauge<D>(
    display: &mut D,
    gauge: &SegmentedArc,
    latitude: f32,
) -> ArcSpan
where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..gauge.segment_count() {
        gauge.fill_segment(display, gauge.segment_span(i), GAUGE_BG);
    }
    gauge.fill_segment(display, latitude_zero_span(gauge), WHITE);

    let pointer = latitude_pointer_span(gauge, latitude);
    gauge.fill_segment(display, pointer, ORANGE);
    pointer
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::canvas::Canvas;
    use crate::colors::{BLACK, RED};
    use crate::geometry::polar;

    fn surface() -> Vec<Rgb565> { vec![BLACK; 90 * 90] }

    /// Pixel on the ring's mid radius at surface angle `deg`.
    fn ring_point(
        gauge: &SegmentedArc,
        deg: f32,
    ) -> Point {
        let r = (gauge.outer + gauge.inner) as f32 / 2.0;
        polar(gauge.center, r, deg.to_radians())
    }

    #[test]
    fn test_altitude_filled_segments_bounds() {
        assert_eq!(altitude_filled_segments(160, ALTITUDE_MIN_M), 0, "bottom of scale is empty");
        assert_eq!(altitude_filled_segments(160, ALTITUDE_MAX_M), 160, "top of scale is full");
        assert_eq!(altitude_filled_segments(160, -10_000.0), 0);
        assert_eq!(altitude_filled_segments(160, 50_000.0), 160);
        // (4250 + 500) / 9500 = 0.5
        assert_eq!(altitude_filled_segments(160, 4250.0), 80);
    }

    #[test]
    fn test_altitude_alert_overrides_gradient() {
        for i in [0, 1, 50, 159] {
            assert_eq!(altitude_segment_color(i, 160, -0.5), ALTITUDE_ALERT, "segment {i} below sea level");
        }
        assert_ne!(altitude_segment_color(0, 160, 0.0), ALTITUDE_ALERT, "sea level itself is not an alert");
    }

    #[test]
    fn test_altitude_gradient_progresses() {
        let mut prev = altitude_segment_color(0, 160, 100.0);
        assert_eq!(prev, ALTITUDE_DARK, "first segment is the dark stop");
        for i in 1..160 {
            let c = altitude_segment_color(i, 160, 100.0);
            assert!(c.g() > prev.g(), "green rises strictly at segment {i}");
            assert!(c.r() >= prev.r() && c.b() >= prev.b(), "red/blue never fall at segment {i}");
            prev = c;
        }
        assert_eq!(prev, ALTITUDE_LIGHT, "last segment is the light stop");
        assert_eq!(altitude_segment_color(0, 1, 100.0), ALTITUDE_LIGHT, "single segment uses t = 1");
    }

    #[test]
    fn test_segment_span_truncates_and_respects_gap() {
        let gauge = SegmentedArc::ALTITUDE;
        // 360 / 160 = 2.25 degrees per segment
        assert_eq!(gauge.segment_span(0), ArcSpan::new(180, 182));
        assert_eq!(gauge.segment_span(1), ArcSpan::new(182, 184));
        assert_eq!(gauge.segment_span(3), ArcSpan::new(186, 188), "end is measured from the truncated start");

        let gapped = SegmentedArc { gap_deg: 5, ..gauge };
        let span = gapped.segment_span(2);
        assert!(span.is_empty() && span.end == span.start, "gap wider than a slice collapses it");
    }

    #[test]
    fn test_zero_segments_clamped() {
        let gauge = SegmentedArc { segments: 0, ..SegmentedArc::LATITUDE };
        assert_eq!(gauge.segment_count(), 1);
        assert!(gauge.angle_per_segment().is_finite());
    }

    #[test]
    fn test_altitude_draw_below_sea_level() {
        let mut buf = surface();
        let mut canvas = Canvas::new(&mut buf, 90, 90).unwrap();
        let gauge = SegmentedArc::ALTITUDE;
        let filled = draw_altitude_gauge(&mut canvas, &gauge, -100.0);

        // 400 / 9500 * 160 = 6.7
        assert_eq!(filled, 7);
        assert_eq!(canvas.pixel(ring_point(&gauge, 181.5)), Some(RED), "first segment is red");
        assert_eq!(canvas.pixel(ring_point(&gauge, 1.0)), Some(GAUGE_BG), "opposite side is empty");
        assert_eq!(canvas.pixel(gauge.center), Some(BLACK), "center untouched");
    }

    #[test]
    fn test_altitude_draw_full_scale() {
        let mut buf = surface();
        let mut canvas = Canvas::new(&mut buf, 90, 90).unwrap();
        let gauge = SegmentedArc::ALTITUDE;
        assert_eq!(draw_altitude_gauge(&mut canvas, &gauge, ALTITUDE_MAX_M), 160);
        // Segment 120 covers 450..452, i.e. 90..92 on the surface
        let expected = Rgb565::from(altitude_segment_color(120, 160, ALTITUDE_MAX_M));
        assert_eq!(canvas.pixel(ring_point(&gauge, 91.0)), Some(expected));
        assert!(!buf.iter().any(|&c| c == GAUGE_BG), "full gauge leaves no background segments");
    }

    #[test]
    fn test_latitude_pointer_span() {
        let gauge = SegmentedArc::LATITUDE;
        // 180 / 60 = 3 degrees per segment; lat 0 sits at 113 + 90 = 203
        assert_eq!(latitude_pointer_span(&gauge, 0.0), ArcSpan::new(201, 204));
        assert_eq!(latitude_pointer_span(&gauge, 90.0), ArcSpan::new(291, 293), "clamped to span end");
        assert_eq!(latitude_pointer_span(&gauge, -90.0), ArcSpan::new(113, 114), "clamped to span start");
        assert_eq!(
            latitude_pointer_span(&gauge, 400.0),
            latitude_pointer_span(&gauge, 90.0),
            "input is clamped to +-90 first"
        );
    }

    #[test]
    fn test_latitude_zero_mark() {
        assert_eq!(latitude_zero_span(&SegmentedArc::LATITUDE), ArcSpan::new(201, 205));
    }

    #[test]
    fn test_latitude_draw_layers() {
        let mut buf = surface();
        let mut canvas = Canvas::new(&mut buf, 90, 90).unwrap();
        let gauge = SegmentedArc::LATITUDE;
        draw_latitude_gauge(&mut canvas, &gauge, 45.0);

        // 45 deg -> 113 + 0.75 * 180 = 248
        assert_eq!(canvas.pixel(ring_point(&gauge, 248.0)), Some(ORANGE), "pointer");
        assert_eq!(canvas.pixel(ring_point(&gauge, 203.0)), Some(WHITE), "zero mark");
        assert_eq!(canvas.pixel(ring_point(&gauge, 150.0)), Some(GAUGE_BG), "background slice");
        assert_eq!(canvas.pixel(ring_point(&gauge, 0.0)), Some(BLACK), "outside the half circle");
    }
}
