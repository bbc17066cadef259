//! Angle and range helpers shared by every gauge.
//!
//! All functions are pure and total: out-of-range or non-finite inputs are
//! clamped, never rejected.
//!
//! # Angle Conventions
//!
//! Two conventions meet in this crate:
//!
//! - **Domain angles** (azimuth, cardinal directions): 0° is North, at the top.
//! - **Surface angles** (the annulus-arc primitive): 0° is at 3 o'clock and
//!   angles grow clockwise, because screen Y grows downward.
//!
//! [`to_drawing_angle`] rotates a domain angle by -90° into surface radians.

use core::f32::consts::PI;

use embedded_graphics::prelude::Point;

/// Smallest span substituted when a range collapses to a single value.
pub const RANGE_EPSILON: f32 = 1e-6;

/// Canonicalize an integer angle to `[0, 360)`.
#[inline]
pub const fn normalize_angle(deg: i32) -> i32 { deg.rem_euclid(360) }

/// Convert a domain angle in degrees to surface radians, with 0° at the top.
#[inline]
pub fn to_drawing_angle(deg: i32) -> f32 { (deg - 90) as f32 * (PI / 180.0) }

/// Clamp to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x > 0.0 {
        if x < 1.0 { x } else { 1.0 }
    } else {
        0.0
    }
}

/// Return `max` widened by [`RANGE_EPSILON`] when the range is empty or inverted.
#[inline]
pub fn widen_range(min: f32, max: f32) -> f32 { if max > min { max } else { min + RANGE_EPSILON } }

/// Fraction of `[min, max]` covered by `value`, clamped to `[0, 1]`.
#[inline]
pub fn proportion(value: f32, min: f32, max: f32) -> f32 {
    let max = widen_range(min, max);
    clamp01((value - min) / (max - min))
}

/// Round half away from zero to the nearest pixel.
#[inline]
pub fn round_px(v: f32) -> i32 { libm::roundf(v) as i32 }

/// Clamp `v` to `[in_min, in_max]` and map it onto `[out_min, out_max]`.
///
/// The output range may be inverted (`out_min > out_max`), which is how chart
/// rows are mapped so that larger values land higher on screen. The result is
/// rounded to the nearest integer pixel.
pub fn map_clamped(v: f32, in_min: f32, in_max: f32, out_min: i32, out_max: i32) -> i32 {
    let in_max = widen_range(in_min, in_max);
    // max/min (not clamp) so NaN collapses to in_min instead of propagating
    let v = v.max(in_min).min(in_max);
    let p = (v - in_min) / (in_max - in_min);
    libm::floorf(out_min as f32 + p * (out_max - out_min) as f32 + 0.5) as i32
}

/// Point at `radius` from `center` along surface angle `rad`.
#[inline]
pub fn polar(center: Point, radius: f32, rad: f32) -> Point {
    Point::new(
        center.x + round_px(libm::cosf(rad) * radius),
        center.y + round_px(libm::sinf(rad) * radius),
    )
}

/// Surface angle of the pixel offset `(dx, dy)` in degrees, in `[0, 360)`.
#[inline]
pub fn surface_angle_deg(dx: i32, dy: i32) -> f32 {
    let deg = libm::atan2f(dy as f32, dx as f32) * (180.0 / PI);
    if deg < 0.0 { deg + 360.0 } else { deg }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0), 0);
        assert_eq!(normalize_angle(360), 0, "360 wraps to 0");
        assert_eq!(normalize_angle(725), 5);
        assert_eq!(normalize_angle(-1), 359, "negative angles wrap upward");
        assert_eq!(normalize_angle(-725), 355);
    }

    #[test]
    fn test_to_drawing_angle_zero_points_up() {
        let p = polar(Point::new(50, 50), 10.0, to_drawing_angle(0));
        assert_eq!(p, Point::new(50, 40), "0 deg should point to the top");

        let p = polar(Point::new(50, 50), 10.0, to_drawing_angle(90));
        assert_eq!(p, Point::new(60, 50), "90 deg should point right");

        let p = polar(Point::new(50, 50), 10.0, to_drawing_angle(180));
        assert_eq!(p, Point::new(50, 60), "180 deg should point down");
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0, "NaN should clamp to 0");
    }

    #[test]
    fn test_proportion_degenerate_range() {
        // Equal bounds must not divide by zero
        let p = proportion(5.0, 5.0, 5.0);
        assert!(p.is_finite(), "Degenerate range should produce a finite proportion");
        assert_eq!(proportion(6.0, 5.0, 5.0), 1.0);
        assert_eq!(proportion(4.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_map_clamped_inverted_output() {
        // Chart mapping: larger values go to smaller y
        assert_eq!(map_clamped(-6.0, -6.0, 3.0, 39, 0), 39);
        assert_eq!(map_clamped(3.0, -6.0, 3.0, 39, 0), 0);
        assert_eq!(map_clamped(100.0, -6.0, 3.0, 39, 0), 0, "above range clamps to top");
        assert_eq!(map_clamped(-100.0, -6.0, 3.0, 39, 0), 39, "below range clamps to bottom");
    }

    #[test]
    fn test_map_clamped_rounds_to_nearest() {
        assert_eq!(map_clamped(0.24, 0.0, 1.0, 0, 10), 2);
        assert_eq!(map_clamped(0.26, 0.0, 1.0, 0, 10), 3);
    }

    #[test]
    fn test_map_clamped_nan_and_degenerate() {
        assert_eq!(map_clamped(f32::NAN, 0.0, 1.0, 0, 10), 0, "NaN maps to in_min");
        let y = map_clamped(1.0, 1.0, 1.0, 0, 10);
        assert!((0..=10).contains(&y), "Degenerate range stays within output bounds");
    }

    #[test]
    fn test_surface_angle_deg_quadrants() {
        assert!((surface_angle_deg(10, 0) - 0.0).abs() < 0.01);
        assert!((surface_angle_deg(0, 10) - 90.0).abs() < 0.01, "screen-down is 90");
        assert!((surface_angle_deg(-10, 0) - 180.0).abs() < 0.01);
        assert!((surface_angle_deg(0, -10) - 270.0).abs() < 0.01, "screen-up is 270");
    }
}
