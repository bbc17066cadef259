// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in signal generation
#![allow(clippy::too_many_lines)] // main() lays out the whole panel

//! HUD preview renderer.
//!
//! Drives every gauge with synthetic telemetry for a number of ticks on a
//! host-side `SimulatorDisplay`, then writes the final 320x240 frame to PNG.
//!
//! ```bash
//! cargo run --bin hud-preview -- [OUTPUT.png] [TICKS]
//! ```
//!
//! The waveform chart and GPS estimator are advanced every tick so the
//! picture shows a scrolled trace and a settled signal level, the same state
//! the panel would reach after that many refreshes.

use std::process::ExitCode;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use hud_gauges::colors::{GRAVITY_PILL, PANEL_BG};
use hud_gauges::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use hud_gauges::primitives::fill_rect;
use hud_gauges::smoothing::{HeadingSmoother, keep_or, low_pass};
use hud_gauges::styles::{LABEL_STYLE_WHITE, TOP_LEFT};
use hud_gauges::widgets::{
    AzimuthRing,
    BarGauge,
    BatteryGauge,
    ChartStyle,
    GpsGauge,
    GpsSignal,
    NumberFormat,
    SegmentedArc,
    WaveformChart,
    draw_altitude_gauge,
    draw_azimuth_ring,
    draw_bar_gauge,
    draw_battery,
    draw_dilation_status,
    draw_hemisphere_badge,
    draw_latitude_gauge,
    draw_number,
};

// =============================================================================
// Panel Layout (preview only)
// =============================================================================

const DEFAULT_OUTPUT: &str = "hud-preview.png";
const DEFAULT_TICKS: u32 = 120;

/// Header strip: satellites, GPS bars, battery.
const HEADER_ORIGIN: Point = Point::new(140, 0);

/// 90x90 boxes for the round gauges.
const ALTITUDE_AREA: Rectangle = Rectangle::new(Point::new(215, 100), Size::new(90, 90));
const LATITUDE_AREA: Rectangle = Rectangle::new(Point::new(150, 100), Size::new(90, 90));

/// Time-dilation chart, one buffered column per pixel.
const CHART_AREA: Rectangle = Rectangle::new(Point::new(5, 195), Size::new(160, 40));
const CHART_COLUMNS: usize = CHART_AREA.size.width as usize;

const ROTATIONAL_BAR: Point = Point::new(10, 30);
const TOTAL_BAR: Point = Point::new(10, 60);

/// Pill behind the gravity bar and its labels.
const GRAVITY_PILL_AREA: Rectangle = Rectangle::new(Point::new(5, 100), Size::new(140, 42));
const GRAVITY_BAR: Point = Point::new(20, 108);

const DILATION_STATUS: Point = Point::new(10, 175);

// =============================================================================
// Synthetic Telemetry
// =============================================================================

/// One tick of fake sensor data, shaped like a slow flight.
struct Telemetry {
    altitude: f32,
    latitude: f32,
    azimuth: f32,
    rotational_velocity: f32,
    total_velocity: f32,
    gravity: f32,
    dilation: f32,
    hdop: f32,
    satellites: u32,
    battery: i32,
}

fn telemetry_at(tick: u32) -> Telemetry {
    let t = tick as f32 * 0.1;
    // No fix for the first second, then HDOP improves from 6 toward 0.7
    let hdop = if tick < 10 { f32::NAN } else { 0.7 + 5.3 * libm::expf(-((tick - 10) as f32) * 0.05) };
    Telemetry {
        altitude: 1200.0 + 900.0 * libm::sinf(t * 0.3),
        latitude: 41.39 + 0.01 * libm::sinf(t),
        azimuth: (tick as f32 * 3.0) % 360.0,
        rotational_velocity: 1250.0 + 15.0 * libm::sinf(t * 0.2),
        total_velocity: 1650.0 + 400.0 * libm::sinf(t * 0.1),
        gravity: 9.803 + 0.01 * libm::sinf(t * 0.7),
        dilation: -1.5 + 2.5 * libm::sinf(t * 0.5),
        hdop,
        satellites: if tick < 10 { 0 } else { 4 + (tick / 15).min(8) },
        battery: 87 - (tick / 20) as i32,
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let ticks = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_TICKS,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            eprintln!("usage: hud-preview [OUTPUT.png] [TICKS > 0]");
            return ExitCode::from(2);
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

    // Per-instance gauge state, owned here and threaded into each draw
    let mut chart: WaveformChart<CHART_COLUMNS> = WaveformChart::new(ChartStyle::PANEL);
    let mut gps = GpsSignal::new();
    let mut heading = HeadingSmoother::new(0.3);
    let mut dilation = f32::NAN;
    let mut last_latitude = 0.0;

    let mut sample = telemetry_at(0);
    for tick in 0..ticks {
        sample = telemetry_at(tick);
        gps.update(sample.hdop);
        heading.update(sample.azimuth);
        dilation = low_pass(dilation, sample.dilation, 0.4);
        last_latitude = keep_or(last_latitude, sample.latitude);
        chart.push(CHART_AREA.size, dilation);
    }
    println!(
        "hud-preview: {ticks} ticks, GPS level {:.2} ({} bars), chart head {}",
        gps.level(),
        gps.bars(),
        chart.head()
    );

    render_frame(&mut display, &sample, &chart, &gps, heading.value(), dilation, last_latitude);

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    match display.to_rgb_output_image(&output_settings).save_png(&output) {
        Ok(()) => {
            println!("hud-preview: wrote {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hud-preview: failed to write {output}: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Compose one full panel frame from the final telemetry and gauge state.
fn render_frame<D>(
    display: &mut D,
    sample: &Telemetry,
    chart: &WaveformChart<CHART_COLUMNS>,
    gps: &GpsSignal,
    azimuth: f32,
    dilation: f32,
    latitude: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(PANEL_BG).ok();

    // Header
    let sat_label = HEADER_ORIGIN + Point::new(0, 6);
    Text::with_text_style("SAT:", sat_label, LABEL_STYLE_WHITE, TOP_LEFT)
        .draw(display)
        .ok();
    draw_number(
        display,
        sat_label + Point::new(30, 0),
        sample.satellites as f32,
        NumberFormat::new(0, ""),
        LABEL_STYLE_WHITE,
        TOP_LEFT,
    );
    let gps_gauge = GpsGauge { top_left: GpsGauge::HEADER.top_left + HEADER_ORIGIN, ..GpsGauge::HEADER };
    gps.draw(display, &gps_gauge);
    draw_battery(display, &BatteryGauge::HEADER, sample.battery);

    // Velocity bars
    draw_bar_gauge(display, &BarGauge::rotational_velocity(ROTATIONAL_BAR), sample.rotational_velocity);
    draw_bar_gauge(display, &BarGauge::total_velocity(TOTAL_BAR), sample.total_velocity);

    // Local gravity on its pill
    fill_rect(display, GRAVITY_PILL_AREA.top_left, GRAVITY_PILL_AREA.size, GRAVITY_PILL);
    draw_bar_gauge(display, &BarGauge::local_gravity(GRAVITY_BAR), sample.gravity);

    // Latitude, then altitude with its azimuth ring on top
    let mut latitude_box = display.cropped(&LATITUDE_AREA);
    draw_latitude_gauge(&mut latitude_box, &SegmentedArc::LATITUDE, latitude);
    draw_hemisphere_badge(&mut latitude_box, Point::new(45, 59), 8, latitude);

    let mut altitude_box = display.cropped(&ALTITUDE_AREA);
    draw_altitude_gauge(&mut altitude_box, &SegmentedArc::ALTITUDE, sample.altitude);
    draw_azimuth_ring(&mut altitude_box, &AzimuthRing::PANEL, azimuth);
    draw_number(
        &mut altitude_box,
        Point::new(30, 40),
        sample.altitude,
        NumberFormat::new(0, " m"),
        LABEL_STYLE_WHITE,
        TOP_LEFT,
    );

    // Time dilation
    draw_dilation_status(display, DILATION_STATUS, dilation);
    chart.render(&mut display.cropped(&CHART_AREA));
}
