//! Gauge widgets for the relativistic clock HUD.
//!
//! - [`bar`]: Gradient bar gauges (velocity, local gravity)
//! - [`arc`]: Segmented arc gauges (altitude, latitude)
//! - [`azimuth`]: Heading ring with cardinal markers
//! - [`gps`]: Five-bar GPS signal gauge and its HDOP estimator
//! - [`battery`]: Battery status
//! - [`chart`]: Scrolling time-dilation waveform
//! - [`readout`]: Number formatting, hemisphere badge, dilation status
//!
//! # Conventions
//!
//! Every draw function is generic over `DrawTarget<Color = Rgb565>` and takes
//! a `&mut` surface for that call only. Draw errors are discarded (`.ok()`):
//! a failed frame is redrawn on the next tick anyway. Draw functions return
//! the number they derived (filled width, segment count, pointer span) so
//! callers and tests can check geometry without reading pixels.
//!
//! Stateful gauges ([`WaveformChart`], [`GpsSignal`]) are plain values owned
//! by the caller; nothing in this module keeps hidden state.

pub mod arc;
pub mod azimuth;
pub mod bar;
pub mod battery;
pub mod chart;
pub mod gps;
pub mod readout;

pub use arc::{
    SegmentedArc,
    altitude_filled_segments,
    altitude_segment_color,
    draw_altitude_gauge,
    draw_latitude_gauge,
    latitude_pointer_span,
    latitude_zero_span,
};
pub use azimuth::{AzimuthRing, direction_triangle, draw_azimuth_ring, marker_spans};
pub use bar::{BarGauge, bar_filled_width, bar_strip_color, draw_bar_gauge};
pub use battery::{BatteryGauge, battery_fill_color, draw_battery};
pub use chart::{ChartStyle, WaveformChart};
pub use gps::{GpsGauge, GpsSignal, color_for_bars, draw_gps_bars, draw_gps_level, signal_bars, signal_level};
pub use readout::{
    DilationStatus,
    Hemisphere,
    NumberFormat,
    draw_dilation_status,
    draw_hemisphere_badge,
    draw_number,
};
