//! Panel geometry and default gauge parameters.
//!
//! # Pre-computed Layout Constants
//!
//! Every fixed size the gauges use is a `const` so per-frame code never
//! recomputes layout. The values mirror the 320x240 instrument panel; the
//! engines themselves take all geometry as arguments and work at any size.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (320x240 landscape panel).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Segmented Arc Gauges
// =============================================================================

/// Altitude gauge: segment count around the full circle.
pub const ALTITUDE_SEGMENTS: u32 = 160;

/// Altitude gauge: first segment starts at 9 o'clock (surface angle).
pub const ALTITUDE_START_DEG: i32 = 180;

/// Altitude gauge: full circle.
pub const ALTITUDE_SPAN_DEG: i32 = 360;

/// Altitude gauge radii.
pub const ALTITUDE_OUTER_R: u32 = 33;
pub const ALTITUDE_INNER_R: u32 = 27;

/// Latitude gauge: segment count across the half circle.
pub const LATITUDE_SEGMENTS: u32 = 60;

/// Latitude gauge start angle, tilted by Earth's axial tilt (90 + 23.4, truncated).
pub const LATITUDE_START_DEG: i32 = 113;

/// Latitude gauge: half circle.
pub const LATITUDE_SPAN_DEG: i32 = 180;

/// Latitude gauge radii.
pub const LATITUDE_OUTER_R: u32 = 36;
pub const LATITUDE_INNER_R: u32 = 28;

/// Width of the fixed latitude-zero reference mark in degrees.
pub const LATITUDE_ZERO_MARK_DEG: i32 = 4;

// =============================================================================
// Azimuth Ring
// =============================================================================

/// Gap between the gauge's outer radius and the ring's outer radius.
pub const RING_OFFSET_PX: u32 = 7;

/// Radial thickness of the base ring.
pub const RING_THICKNESS_PX: u32 = 4;

/// Default angular width of the heading marker.
pub const MARKER_ARC_DEG: i32 = 12;

/// Cardinal triangle tip length beyond the ring.
pub const TRIANGLE_TIP_PX: u32 = 2;

/// Half of the cardinal triangle base, in degrees either side of its direction.
pub const TRIANGLE_BASE_HALF_DEG: i32 = 7;

// =============================================================================
// Bar Gauges
// =============================================================================

/// Velocity bars (rotational and total) share this geometry.
pub const SPEED_BAR_WIDTH: u32 = 250;
pub const SPEED_BAR_HEIGHT: u32 = 10;

/// Local gravity bar geometry.
pub const GRAVITY_BAR_WIDTH: u32 = 110;
pub const GRAVITY_BAR_HEIGHT: u32 = 12;

/// Tick intervals on the gravity bar.
pub const GRAVITY_BAR_TICKS: u32 = 5;

/// Decimals printed in the gravity bar's min/mid/max labels.
pub const GRAVITY_LABEL_DECIMALS: u8 = 2;

// =============================================================================
// GPS Signal Gauge
// =============================================================================

/// Number of bars in the signal gauge.
pub const GPS_BAR_COUNT: usize = 5;

/// Height of each bar as a fraction of the gauge height, shortest first.
pub const GPS_BAR_HEIGHT_FRACTIONS: [f32; GPS_BAR_COUNT] = [0.52, 0.66, 0.78, 0.90, 1.00];

/// Minimum dimensions for the signal gauge.
pub const GPS_MIN_HEIGHT: u32 = 8;
pub const GPS_MIN_BAR_WIDTH: u32 = 3;
pub const GPS_MIN_GAP: u32 = 1;

/// Smoothing factor for the GPS level (0..1, higher = faster).
pub const GPS_LEVEL_ALPHA: f32 = 0.25;

/// Partial bars below this fraction are not drawn.
pub const GPS_PARTIAL_MIN: f32 = 0.01;

// =============================================================================
// Waveform Chart
// =============================================================================

/// Default chart capacity (one sample per column): a full screen width.
/// Wider surfaces keep the trace on their rightmost columns.
pub const CHART_MAX_WIDTH: usize = SCREEN_WIDTH as usize;

/// Smallest chart surface that is drawn at all.
pub const CHART_MIN_DIM: u32 = 3;

/// Time-dilation chart value range (ns/h).
pub const CHART_MIN_VALUE: f32 = -6.0;
pub const CHART_MAX_VALUE: f32 = 3.0;

/// Dashed zero line: dash and gap lengths in pixels.
pub const CHART_DASH_PX: u32 = 4;
pub const CHART_GAP_PX: u32 = 3;

/// Vertical grid spacing and the stride of "major" lines.
pub const CHART_V_STEP_PX: u32 = 6;
pub const CHART_V_MAJOR_EVERY: u32 = 4;

// =============================================================================
// Battery
// =============================================================================

/// Unscaled battery body and terminal dimensions.
pub const BATTERY_BODY_W: f32 = 34.0;
pub const BATTERY_BODY_H: f32 = 16.0;
pub const BATTERY_TIP_W: f32 = 3.0;
pub const BATTERY_TIP_H: f32 = 8.0;
pub const BATTERY_TEXT_PAD: f32 = 2.0;
/// Largest accepted scale; the body is then 272px wide.
pub const BATTERY_MAX_SCALE: f32 = 8.0;

// =============================================================================
// Text
// =============================================================================

/// Capacity of formatted number labels.
pub const LABEL_LEN: usize = 24;
