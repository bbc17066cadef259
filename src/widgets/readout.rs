//! Text readouts: fixed-decimal number formatting, the hemisphere badge and
//! the time-dilation status line.

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Text, TextStyle};
use heapless::String;

use crate::colors::{DILATION_FASTER, DILATION_SLOWER, HEMISPHERE_N, HEMISPHERE_S, PANEL_BG, STATUS_BG};
use crate::config::LABEL_LEN;
use crate::primitives::fill_circle;
use crate::styles::{LABEL_STYLE_BLACK, LABEL_STYLE_WHITE, MIDDLE_CENTER, READOUT_FONT, TOP_LEFT};

/// Locale-free number format: fixed decimal count plus a unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: u8,
    pub unit: &'static str,
}

impl NumberFormat {
    pub const fn new(
        decimals: u8,
        unit: &'static str,
    ) -> Self {
        Self { decimals, unit }
    }

    /// Format `value`. Output longer than the label capacity is truncated.
    pub fn format(
        &self,
        value: f32,
    ) -> String<LABEL_LEN> {
        let mut s: String<LABEL_LEN> = String::new();
        write!(Truncating(&mut s), "{:.*}{}", usize::from(self.decimals), value, self.unit).ok();
        s
    }
}

/// Writer that keeps the characters that fit and drops the rest.
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Draw `value` formatted by `format` at `position`.
pub fn draw_number<D>(
    display: &mut D,
    position: Point,
    value: f32,
    format: NumberFormat,
    char_style: MonoTextStyle<'_, Rgb565>,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let s = format.format(value);
    Text::with_text_style(&s, position, char_style, text_style)
        .draw(display)
        .ok();
}

// =============================================================================
// Hemisphere Badge
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hemisphere {
    North,
    South,
    /// Exactly on the equator, or no valid latitude.
    Equator,
}

impl Hemisphere {
    pub fn from_latitude(lat: f32) -> Self {
        if lat > 0.0 {
            Self::North
        } else if lat < 0.0 {
            Self::South
        } else {
            Self::Equator
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::Equator => "--",
        }
    }

    pub const fn color(self) -> Rgb565 {
        match self {
            Self::North => HEMISPHERE_N,
            Self::South => HEMISPHERE_S,
            Self::Equator => PANEL_BG,
        }
    }
}

/// Filled circle with the hemisphere letter centered on it.
pub fn draw_hemisphere_badge<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    latitude: f32,
) -> Hemisphere
where
    D: DrawTarget<Color = Rgb565>,
{
    let hemisphere = Hemisphere::from_latitude(latitude);
    fill_circle(display, center, radius, hemisphere.color());

    let style = match hemisphere {
        Hemisphere::Equator => LABEL_STYLE_WHITE,
        _ => LABEL_STYLE_BLACK,
    };
    Text::with_text_style(hemisphere.label(), center, style, MIDDLE_CENTER)
        .draw(display)
        .ok();
    hemisphere
}

// =============================================================================
// Time Dilation Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DilationStatus {
    Slower,
    Faster,
}

impl DilationStatus {
    /// `None` at exactly zero (or NaN): nothing to report.
    pub fn from_dilation(value: f32) -> Option<Self> {
        if value < 0.0 {
            Some(Self::Slower)
        } else if value > 0.0 {
            Some(Self::Faster)
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Slower => "TIME SLOWER",
            Self::Faster => "TIME FASTER",
        }
    }

    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Slower => DILATION_SLOWER,
            Self::Faster => DILATION_FASTER,
        }
    }
}

/// Draw the status line with its top-left at `position`.
pub fn draw_dilation_status<D>(
    display: &mut D,
    position: Point,
    dilation: f32,
) -> Option<DilationStatus>
where
    D: DrawTarget<Color = Rgb565>,
{
    let status = DilationStatus::from_dilation(dilation)?;
    let style = MonoTextStyleBuilder::new()
        .font(READOUT_FONT)
        .text_color(status.color())
        .background_color(STATUS_BG)
        .build();
    Text::with_text_style(status.label(), position, style, TOP_LEFT)
        .draw(display)
        .ok();
    Some(status)
}

// =============================================================================
// Unit Tests
// =============================================================================
