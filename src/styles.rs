//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! All styles are `const`, so they live in read-only data and no draw call
//! builds a style object. Gauges that need a run-time color (GPS, battery
//! bands) use [`LABEL_FONT`] / [`READOUT_FONT`] with `MonoTextStyle::new`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_9_POINT, PROFONT_12_POINT};

use crate::colors::{BLACK, GRAVITY_PILL, WHITE};

// =============================================================================
// Text Anchors (const - zero runtime cost)
// =============================================================================

/// Anchor at the top-center of the text. Bar gauge labels.
pub const TOP_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Anchor at the vertical middle of the left edge. Battery percentage.
pub const MIDDLE_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Anchor at the center of the text box. Hemisphere badge.
pub const MIDDLE_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Anchor at the top-left corner. Status lines and numeric readouts.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Readout font (`ProFont` 12pt). Battery percentage and status text.
pub const READOUT_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Bar gauge scale labels: black on the gravity pill, with an opaque background
/// so a label repaints cleanly over the previous frame.
pub const BAR_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = with_background(&PROFONT_9_POINT, BLACK, GRAVITY_PILL);

/// White readout text on black (battery percentage).
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = with_background(&PROFONT_12_POINT, WHITE, BLACK);

/// Small white label text, transparent background.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small black label text, for badges with a bright fill.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

const fn with_background(
    font: &'static MonoFont<'static>,
    text: Rgb565,
    background: Rgb565,
) -> MonoTextStyle<'static, Rgb565> {
    let mut style = MonoTextStyle::new(font, text);
    style.background_color = Some(background);
    style
}
