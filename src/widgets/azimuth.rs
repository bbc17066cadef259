//! Azimuth ring drawn around the altitude gauge.
//!
//! Four passes, back to front: a 360° base ring, an optional 360° track
//! inset inside it, a short marker arc at the current heading, and four fixed
//! cardinal triangles pointing outward. A negative (or NaN) azimuth hides the
//! marker only.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::colors::{CARDINAL_E, CARDINAL_N, CARDINAL_S, CARDINAL_W, HEADING_MARKER, RING, TRACK};
use crate::config::{
    ALTITUDE_OUTER_R, MARKER_ARC_DEG, RING_OFFSET_PX, RING_THICKNESS_PX, TRIANGLE_BASE_HALF_DEG, TRIANGLE_TIP_PX,
};
use crate::geometry::{normalize_angle, polar, to_drawing_angle};
use crate::primitives::{ArcSpan, fill_arc, fill_triangle};
use crate::thresholds::AZIMUTH_NORTH_OFFSET_DEG;

/// Cardinal directions (domain degrees) and their triangle colors.
pub const CARDINALS: [(i32, Rgb565); 4] = [(0, CARDINAL_N), (90, CARDINAL_E), (180, CARDINAL_S), (270, CARDINAL_W)];

/// Azimuth ring geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AzimuthRing {
    pub center: Point,
    /// Outer radius of the gauge the ring surrounds.
    pub gauge_outer: u32,
    pub offset: u32,
    pub thickness: u32,
    /// Angular width of the heading marker; at least 1.
    pub marker_deg: i32,
    pub tip_len: u32,
    pub base_half_deg: i32,
    pub inset_outer: u32,
    pub inset_inner: u32,
    pub draw_track: bool,
}

impl AzimuthRing {
    pub const fn new(
        center: Point,
        gauge_outer: u32,
    ) -> Self {
        Self {
            center,
            gauge_outer,
            offset: RING_OFFSET_PX,
            thickness: RING_THICKNESS_PX,
            marker_deg: MARKER_ARC_DEG,
            tip_len: TRIANGLE_TIP_PX,
            base_half_deg: TRIANGLE_BASE_HALF_DEG,
            inset_outer: 1,
            inset_inner: 1,
            draw_track: true,
        }
    }

    /// Ring around the panel's altitude gauge: thin marker, deep insets.
    pub const PANEL: Self = {
        let mut ring = Self::new(Point::new(45, 45), ALTITUDE_OUTER_R);
        ring.marker_deg = 3;
        ring.inset_outer = 4;
        ring.inset_inner = 2;
        ring
    };

    /// `(outer, inner)` radii of the base ring.
    pub fn ring_radii(&self) -> (u32, u32) {
        let outer = self.gauge_outer + self.offset;
        (outer, outer.saturating_sub(self.thickness))
    }

    /// `(outer, inner)` radii of the track and marker. When the insets cross,
    /// the track collapses to a 2px band around their midpoint.
    pub fn track_radii(&self) -> (u32, u32) {
        let (ring_outer, ring_inner) = self.ring_radii();
        let outer = ring_outer as i32 - self.inset_outer as i32;
        let inner = ring_inner as i32 + self.inset_inner as i32;
        if outer < inner {
            let mid = (outer + inner) / 2;
            ((mid + 1).max(0) as u32, (mid - 1).max(0) as u32)
        } else {
            (outer as u32, inner as u32)
        }
    }
}

/// Surface spans covered by the heading marker. Empty when hidden; two spans
/// when the marker crosses 0°, together exactly as wide as an unsplit one.
pub fn marker_spans(
    azimuth: f32,
    marker_deg: i32,
) -> Vec<ArcSpan, 2> {
    let mut spans = Vec::new();
    if !(azimuth >= 0.0) || !azimuth.is_finite() {
        return spans;
    }

    let marker = marker_deg.max(1);
    // Reduce before the integer cast so huge headings cannot overflow
    let turn = libm::fmodf(azimuth, 360.0);
    let center = normalize_angle(libm::roundf(turn) as i32 + AZIMUTH_NORTH_OFFSET_DEG);
    let half = marker / 2;
    let start = normalize_angle(center - half);
    let end = normalize_angle(center + half);

    // Capacity is 2 and at most 2 spans are pushed
    if start <= end {
        spans.push(ArcSpan::new(start, end)).ok();
    } else {
        spans.push(ArcSpan::new(start, 360)).ok();
        spans.push(ArcSpan::new(0, end)).ok();
    }
    spans
}

/// Corners of the cardinal triangle for `direction_deg` (domain angle):
/// apex beyond the ring, base just inside its outer edge.
pub fn direction_triangle(
    center: Point,
    ring_outer: u32,
    tip_len: u32,
    base_half_deg: i32,
    direction_deg: i32,
) -> [Point; 3] {
    let apex = polar(center, (ring_outer + tip_len) as f32, to_drawing_angle(direction_deg));
    let base_r = ring_outer as f32 - 1.0;
    let left = polar(center, base_r, to_drawing_angle(normalize_angle(direction_deg - base_half_deg)));
    let right = polar(center, base_r, to_drawing_angle(normalize_angle(direction_deg + base_half_deg)));
    [apex, left, right]
}

/// Draw the ring. Returns `true` if the heading marker was drawn.
pub fn draw_azimuth_ring<D>(
    display: &mut D,
    ring: &AzimuthRing,
    azimuth: f32,
) -> bool
where
    D: DrawTarget<Color = Rgb565>,
{
    let (ring_outer, ring_inner) = ring.ring_radii();
    fill_arc(display, ring.center, ring_outer, ring_inner, ArcSpan::FULL, RING);

    let (track_outer, track_inner) = ring.track_radii();
    if ring.draw_track {
        fill_arc(display, ring.center, track_outer, track_inner, ArcSpan::FULL, TRACK);
    }

    let spans = marker_spans(azimuth, ring.marker_deg);
    for span in &spans {
        fill_arc(display, ring.center, track_outer, track_inner, *span, HEADING_MARKER);
    }

    for (direction, color) in CARDINALS {
        let corners = direction_triangle(ring.center, ring_outer, ring.tip_len, ring.base_half_deg, direction);
        fill_triangle(display, corners, color);
    }

    !spans.is_empty()
}

// =============================================================================
// Unit Tests
// =============================================================================
