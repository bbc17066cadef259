//! Centralized threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions.
//! If a ladder is configured out of order, compilation fails.
//!
//! # Usage
//!
//! ```ignore
//! use hud_gauges::thresholds::{HDOP_BAR_LADDER, ALTITUDE_MIN_M};
//! ```

// =============================================================================
// GPS Horizontal Dilation of Precision (HDOP)
// =============================================================================

/// Discrete ladder: `(max HDOP, bars)`. The first rung whose bound is not
/// exceeded wins; anything worse than the last rung is 0 bars.
pub const HDOP_BAR_LADDER: [(f32, u8); 5] = [(0.9, 5), (1.5, 4), (3.0, 3), (6.0, 2), (10.0, 1)];

/// Continuous ladder: `(HDOP cut, level)`, coarsest first. Level is
/// interpolated between the previous rung and the first cut not exceeded.
pub const HDOP_LEVEL_CUTS: [(f32, f32); 5] = [(10.0, 1.0), (6.0, 2.0), (3.0, 3.0), (1.5, 4.0), (0.8, 5.0)];

/// Seed for the "previous cut" before the coarsest rung.
///
/// Effectively infinite, which makes the level nearly flat at 1.0 for
/// HDOP between the two coarsest cuts.
pub const HDOP_LEVEL_SEED: f32 = 1e9;

/// Highest bar count / level.
pub const GPS_MAX_BARS: u8 = 5;

const _: () = assert!(HDOP_BAR_LADDER[0].0 < HDOP_BAR_LADDER[1].0);
const _: () = assert!(HDOP_BAR_LADDER[1].0 < HDOP_BAR_LADDER[2].0);
const _: () = assert!(HDOP_BAR_LADDER[2].0 < HDOP_BAR_LADDER[3].0);
const _: () = assert!(HDOP_BAR_LADDER[3].0 < HDOP_BAR_LADDER[4].0);
const _: () = assert!(HDOP_LEVEL_CUTS[0].0 > HDOP_LEVEL_CUTS[1].0);
const _: () = assert!(HDOP_LEVEL_CUTS[1].0 > HDOP_LEVEL_CUTS[2].0);
const _: () = assert!(HDOP_LEVEL_CUTS[2].0 > HDOP_LEVEL_CUTS[3].0);
const _: () = assert!(HDOP_LEVEL_CUTS[3].0 > HDOP_LEVEL_CUTS[4].0);
const _: () = assert!(HDOP_LEVEL_SEED > HDOP_LEVEL_CUTS[0].0);

// =============================================================================
// Altitude
// =============================================================================

/// Bottom of the altitude scale in meters (empty gauge).
pub const ALTITUDE_MIN_M: f32 = -500.0;

/// Top of the altitude scale in meters (full gauge).
pub const ALTITUDE_MAX_M: f32 = 9000.0;

/// Below this altitude every filled segment switches to the alert color.
pub const ALTITUDE_ALERT_BELOW_M: f32 = 0.0;

const _: () = assert!(ALTITUDE_MIN_M < ALTITUDE_ALERT_BELOW_M);
const _: () = assert!(ALTITUDE_ALERT_BELOW_M < ALTITUDE_MAX_M);

// =============================================================================
// Latitude / Azimuth
// =============================================================================

/// Latitude inputs are clamped to `[-LATITUDE_LIMIT_DEG, LATITUDE_LIMIT_DEG]`.
pub const LATITUDE_LIMIT_DEG: f32 = 90.0;

/// Surface-angle offset that puts azimuth 0 (North) at the top of the ring.
pub const AZIMUTH_NORTH_OFFSET_DEG: i32 = 270;

// =============================================================================
// Velocity Domains (km/h)
// =============================================================================

/// Full scale of the local rotational velocity bar.
pub const ROTATIONAL_VELOCITY_MAX: f32 = 1700.0;

/// Full scale of the total velocity bar.
pub const TOTAL_VELOCITY_MAX: f32 = 2700.0;

// =============================================================================
// Local Gravity (m/s^2)
// =============================================================================

/// Gravity bar domain.
pub const GRAVITY_MIN: f32 = 9.76;
pub const GRAVITY_MAX: f32 = 9.84;

const _: () = assert!(GRAVITY_MIN < GRAVITY_MAX);

// =============================================================================
// Battery (percent)
// =============================================================================

/// At or below this charge the fill is red.
pub const BATTERY_CRITICAL_PCT: u8 = 10;

/// At or below this charge the fill is yellow.
pub const BATTERY_WARNING_PCT: u8 = 20;

const _: () = assert!(BATTERY_CRITICAL_PCT < BATTERY_WARNING_PCT);

// =============================================================================
// Unit Tests
// =============================================================================
