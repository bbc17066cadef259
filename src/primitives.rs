//! Low-level drawing primitives shared across gauges.
//!
//! Thin wrappers over embedded-graphics shapes, plus the one shape it does not
//! provide: a filled annulus arc between two radii and two angles.
//!
//! # Annulus Arc
//!
//! [`fill_arc`] takes angles in the surface convention (0° at 3 o'clock,
//! clockwise). Spans are ascending: a wrapped span must be split by the caller
//! into `start..360` and `0..end`. An empty span (`end <= start`) draws nothing.
//!
//! Only the bounding box of the arc itself is scanned, so a thin segment of a
//! large ring costs about as many pixel tests as it has pixels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::geometry::{normalize_angle, surface_angle_deg};

/// Ascending angular range in surface degrees. May extend past 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArcSpan {
    pub start: i32,
    pub end: i32,
}

impl ArcSpan {
    /// Whole circle.
    pub const FULL: Self = Self::new(0, 360);

    pub const fn new(
        start: i32,
        end: i32,
    ) -> Self {
        Self { start, end }
    }

    /// Angular width in degrees, 0 for empty or inverted spans.
    pub const fn width(&self) -> i32 { if self.end > self.start { self.end - self.start } else { 0 } }

    pub const fn is_empty(&self) -> bool { self.end <= self.start }
}

/// Fill the annulus between `inner` and `outer` radius over `span`.
pub fn fill_arc<D>(
    display: &mut D,
    center: Point,
    outer: u32,
    inner: u32,
    span: ArcSpan,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if span.is_empty() || inner > outer {
        return;
    }

    let width = span.width();
    let full = width >= 360;
    let start = normalize_angle(span.start) as f32;
    let end = start + width as f32;

    let bounds = if full { square_bounds(outer) } else { arc_bounds(outer, inner, start, end) };

    let outer_sq = (outer * outer) as i32;
    let inner_sq = (inner * inner) as i32;

    let pixels = bounds.points().filter_map(|offset| {
        let d2 = offset.x * offset.x + offset.y * offset.y;
        if d2 > outer_sq || d2 < inner_sq {
            return None;
        }
        if !full {
            let mut a = surface_angle_deg(offset.x, offset.y);
            if a < start {
                a += 360.0;
            }
            if a > end {
                return None;
            }
        }
        Some(Pixel(center + offset, color))
    });

    display.draw_iter(pixels).ok();
}

/// Offsets covering a full disc of radius `r`.
fn square_bounds(r: u32) -> Rectangle {
    let r = r as i32;
    Rectangle::with_corners(Point::new(-r, -r), Point::new(r, r))
}

/// Offsets covering the arc: both endpoints at both radii, plus every
/// axis extreme the span passes through. Padded by one pixel for rounding.
fn arc_bounds(
    outer: u32,
    inner: u32,
    start: f32,
    end: f32,
) -> Rectangle {
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
    let mut include = |deg: f32, r: f32| {
        let rad = deg.to_radians();
        let (x, y) = (libm::cosf(rad) * r, libm::sinf(rad) * r);
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };

    for r in [outer as f32, inner as f32] {
        include(start, r);
        include(end, r);
    }
    let mut axis = 0.0;
    while axis <= 720.0 {
        if axis >= start && axis <= end {
            include(axis, outer as f32);
        }
        axis += 90.0;
    }

    let r = outer as i32;
    let clamp = |v: i32| v.clamp(-r, r);
    Rectangle::with_corners(
        Point::new(clamp(libm::floorf(min_x) as i32 - 1), clamp(libm::floorf(min_y) as i32 - 1)),
        Point::new(clamp(libm::ceilf(max_x) as i32 + 1), clamp(libm::ceilf(max_y) as i32 + 1)),
    )
}

/// Filled rectangle. Zero-sized rectangles draw nothing.
pub fn fill_rect<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if size.width == 0 || size.height == 0 {
        return;
    }
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// 1px rectangle outline.
pub fn stroke_rect<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Vertical line of `len` pixels going down from `top`.
#[inline]
pub fn vline<D>(
    display: &mut D,
    top: Point,
    len: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, top, Size::new(1, len), color);
}

/// Horizontal line of `len` pixels going right from `left`.
#[inline]
pub fn hline<D>(
    display: &mut D,
    left: Point,
    len: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, left, Size::new(len, 1), color);
}

/// 1px straight line between two points, both ends inclusive.
pub fn line<D>(
    display: &mut D,
    from: Point,
    to: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Filled triangle.
pub fn fill_triangle<D>(
    display: &mut D,
    corners: [Point; 3],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(corners[0], corners[1], corners[2])
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Filled circle of the given `radius` around `center`.
pub fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
