//! Gauge rendering and signal-shaping engine for the relativistic clock HUD.
//!
//! Turns telemetry scalars into pixels on any `DrawTarget<Color = Rgb565>`:
//!
//! - [`geometry`]: Angle normalization, drawing-angle conversion, clamped range mapping
//! - [`colors`]: Palette constants and per-channel gradient interpolation
//! - [`primitives`]: Annulus-arc fill and the other shapes the gauges are built from
//! - [`canvas`]: In-memory pixel surface (`DrawTarget` over a borrowed slice)
//! - [`widgets`]: Bar, arc, azimuth ring, GPS, battery, waveform chart and readouts
//! - [`smoothing`]: Low-pass and circular heading filters
//! - [`config`] / [`thresholds`]: Compile-time layout and threshold constants
//!
//! # Ownership
//!
//! Engines own no surface. The caller passes `&mut D` for one draw call and
//! keeps every stateful gauge ([`widgets::WaveformChart`], [`widgets::GpsSignal`])
//! itself, so any number of instances can coexist.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the library itself is
//! `no_std` and allocation-free.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

pub mod canvas;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod primitives;
pub mod smoothing;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use canvas::Canvas;
pub use colors::{lerp_color, rgb};
pub use geometry::{map_clamped, normalize_angle, to_drawing_angle};
