//! State-transition logging.
//!
//! With the `defmt` feature enabled these macros forward to `defmt`; without
//! it they expand to nothing, so the library stays free of any I/O.
//!
//! # Usage
//!
//! ```ignore
//! hud_debug!("chart seeded {}x{}", width, height);
//! hud_warn!("GPS signal lost");
//! ```
//!
//! Only state transitions are logged (chart reseed, GPS bar changes). Nothing
//! is emitted per pixel or per frame.

/// Log a message at Debug level.
#[cfg(feature = "defmt")]
macro_rules! hud_debug {
    ($($arg:tt)*) => {{
        defmt::debug!($($arg)*);
    }};
}

/// Log a message at Debug level.
#[cfg(not(feature = "defmt"))]
macro_rules! hud_debug {
    ($($arg:tt)*) => {{}};
}

/// Log a message at Info level.
#[cfg(feature = "defmt")]
macro_rules! hud_info {
    ($($arg:tt)*) => {{
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Info level.
#[cfg(not(feature = "defmt"))]
macro_rules! hud_info {
    ($($arg:tt)*) => {{}};
}

/// Log a message at Warn level.
#[cfg(feature = "defmt")]
macro_rules! hud_warn {
    ($($arg:tt)*) => {{
        defmt::warn!($($arg)*);
    }};
}

/// Log a message at Warn level.
#[cfg(not(feature = "defmt"))]
macro_rules! hud_warn {
    ($($arg:tt)*) => {{}};
}
