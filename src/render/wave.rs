//! Per-frame drawing of the wave scene.
//!
//! Draw order is fixed: background, grid, center axis, sine curve, then
//! (only while paused) the measurement overlays. The curve uses a
//! display-only visual frequency `omega = 800 / (wavelength * 1e9)` so
//! every spectral band stays visible at a usable screen frequency; the
//! true physical frequency is display-panel data, not canvas data.
//!
//! All world-space geometry is computed in f64 and mapped through the
//! view transform to screen points, so stroke widths and font sizes stay
//! constant on screen at any zoom.

use std::f64::consts::{FRAC_PI_2, TAU};

use anyhow::{ensure, Result};
use eframe::egui::{vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Shape, Stroke};

use super::view::ViewTransform;
use crate::physics::format;

const BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
// Slate gray at 10% / 30% opacity, premultiplied.
const GRID_COLOR: Color32 = Color32::from_rgba_premultiplied(15, 16, 18, 26);
const AXIS_COLOR: Color32 = Color32::from_rgba_premultiplied(44, 49, 55, 77);

/// Number of horizontal grid rows spanning the canvas height.
const GRID_ROWS: u32 = 10;
/// Hard cap on the extended horizontal draw range, world pixels.
const PADDING_CAP: f64 = 200_000.0;
/// Hard cap on the curve sampling stride, world pixels.
const SAMPLE_STEP_CAP: i64 = 500;
/// Vertical margin kept between the wave peak and the canvas edge.
const AMPLITUDE_MARGIN: f64 = 20.0;
/// Arrowhead size for overlay markers, screen pixels.
const ARROW_PX: f32 = 6.0;

/// Everything the renderer needs about the wave for one frame.
#[derive(Debug, Clone, Copy)]
pub struct WaveSnapshot {
    pub wavelength_m: f64,
    pub amplitude_pct: f64,
    pub phase_deg: f64,
    pub color: Color32,
}

/// Draw one frame of the scene into `rect`.
///
/// `clock` is the animation clock in radians; `show_overlays` is true
/// only on paused frames. Overlay drawing is best-effort: a failure is
/// logged and the already-drawn grid/axis/curve stand.
pub fn draw_scene(
    painter: &Painter,
    rect: Rect,
    view: &ViewTransform,
    wave: &WaveSnapshot,
    clock: f64,
    show_overlays: bool,
) {
    let width = rect.width() as f64;
    let height = rect.height() as f64;
    let to_screen = |x: f64, y: f64| -> Pos2 {
        rect.min + view.world_to_screen(Pos2::new(x as f32, y as f32)).to_vec2()
    };

    painter.rect_filled(rect, Rounding::same(4.0), BACKGROUND);

    let padding = extended_padding(width, view.scale);
    let start_x = -padding;
    let end_x = width + padding;

    draw_grid(painter, view, width, height, start_x, end_x, &to_screen);

    // Center axis.
    painter.line_segment(
        [to_screen(0.0, height / 2.0), to_screen(width, height / 2.0)],
        Stroke::new(2.0, AXIS_COLOR),
    );

    // Invalid wavelength: grid and axis only, no curve, no overlays.
    if wave.wavelength_m <= 0.0 {
        return;
    }

    let omega = visual_omega(wave.wavelength_m);
    let amp_px = wave.amplitude_pct / 100.0 * (height / 2.0 - AMPLITUDE_MARGIN);
    let phase_rad = wave.phase_deg.to_radians();
    let center_y = height / 2.0;

    draw_curve(
        painter, view, wave.color, start_x, end_x, center_y, amp_px, omega, phase_rad, clock,
        &to_screen,
    );

    if show_overlays {
        if let Err(err) = draw_overlays(
            painter, view, wave, width, height, center_y, amp_px, omega, phase_rad, clock,
            &to_screen,
        ) {
            log::warn!("skipping measurement overlays: {err:#}");
        }
    }
}

fn draw_grid(
    painter: &Painter,
    view: &ViewTransform,
    width: f64,
    height: f64,
    start_x: f64,
    end_x: f64,
    to_screen: &impl Fn(f64, f64) -> Pos2,
) {
    let stroke = Stroke::new(1.0, GRID_COLOR);

    // Horizontal rows, evenly spaced over the canvas height.
    for i in 0..=GRID_ROWS {
        let y = height / GRID_ROWS as f64 * i as f64;
        painter.line_segment([to_screen(start_x, y), to_screen(end_x, y)], stroke);
    }

    // Vertical columns at a world spacing inversely proportional to the
    // scale, keeping on-screen density roughly constant.
    let spacing = (width / 20.0) / view.scale.max(0.0001) as f64;
    let first = (start_x / spacing).floor() as i64 - 1;
    let last = (end_x / spacing).ceil() as i64 + 1;
    for i in first..=last {
        let x = i as f64 * spacing;
        painter.line_segment([to_screen(x, 0.0), to_screen(x, height)], stroke);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_curve(
    painter: &Painter,
    view: &ViewTransform,
    color: Color32,
    start_x: f64,
    end_x: f64,
    center_y: f64,
    amp_px: f64,
    omega: f64,
    phase_rad: f64,
    clock: f64,
    to_screen: &impl Fn(f64, f64) -> Pos2,
) {
    let step = sample_step(view.scale);
    let mut points = Vec::with_capacity(((end_x - start_x) / step as f64) as usize + 1);
    let mut x = start_x.floor() as i64;
    let end = end_x.ceil() as i64;
    while x < end {
        let y = curve_y(center_y, amp_px, omega, phase_rad, clock, x as f64);
        points.push(to_screen(x as f64, y));
        x += step;
    }

    // Soft glow under the main stroke, standing in for a shadow blur.
    painter.add(Shape::line(
        points.clone(),
        Stroke::new(9.0, color.gamma_multiply(0.2)),
    ));
    painter.add(Shape::line(points, Stroke::new(3.0, color)));
}

#[allow(clippy::too_many_arguments)]
fn draw_overlays(
    painter: &Painter,
    view: &ViewTransform,
    wave: &WaveSnapshot,
    width: f64,
    height: f64,
    center_y: f64,
    amp_px: f64,
    omega: f64,
    phase_rad: f64,
    clock: f64,
    to_screen: &impl Fn(f64, f64) -> Pos2,
) -> Result<()> {
    let color = wave.color;
    let period = period_px(omega);
    ensure!(
        period.is_finite() && period > 0.0,
        "wave period {period} is not drawable"
    );

    let base_phase = phase_rad + clock;
    let world_center_x = view.screen_to_world(Pos2::new(width as f32 / 2.0, 0.0)).x as f64;
    let peak_x = nearest_peak_x(omega, base_phase, world_center_x);
    ensure!(peak_x.is_finite(), "peak position is not finite");

    let y_at = |x: f64| curve_y(center_y, amp_px, omega, phase_rad, clock, x);
    let marker_y = height - 18.0;

    // Double-headed arrow spanning exactly one spatial period.
    let left = to_screen(peak_x, marker_y);
    let right = to_screen(peak_x + period, marker_y);
    painter.line_segment([left, right], Stroke::new(2.0, color));
    painter.add(Shape::convex_polygon(
        vec![
            left,
            left + vec2(ARROW_PX, -ARROW_PX),
            left + vec2(ARROW_PX, ARROW_PX),
        ],
        color,
        Stroke::NONE,
    ));
    painter.add(Shape::convex_polygon(
        vec![
            right,
            right + vec2(-ARROW_PX, -ARROW_PX),
            right + vec2(-ARROW_PX, ARROW_PX),
        ],
        color,
        Stroke::NONE,
    ));
    painter.text(
        Pos2::new((left.x + right.x) / 2.0, left.y - 8.0),
        Align2::CENTER_BOTTOM,
        format::wavelength(wave.wavelength_m),
        FontId::proportional(12.0),
        color,
    );

    // Dotted guides from the marker endpoints up to the curve.
    let guide = Stroke::new(1.0, color);
    let left_on_curve = to_screen(peak_x, y_at(peak_x));
    let right_on_curve = to_screen(peak_x + period, y_at(peak_x + period));
    painter.extend(Shape::dashed_line(&[left_on_curve, left], guide, 4.0, 4.0));
    painter.extend(Shape::dashed_line(&[right_on_curve, right], guide, 4.0, 4.0));

    // Vertical amplitude arrow from the axis to the nearest peak.
    let axis_point = to_screen(peak_x, center_y);
    let peak_point = to_screen(peak_x, y_at(peak_x));
    painter.line_segment([axis_point, peak_point], Stroke::new(2.0, color));
    let tip_dir = if peak_point.y < axis_point.y { 1.0 } else { -1.0 };
    painter.add(Shape::convex_polygon(
        vec![
            peak_point,
            peak_point + vec2(-ARROW_PX, tip_dir * ARROW_PX),
            peak_point + vec2(ARROW_PX, tip_dir * ARROW_PX),
        ],
        color,
        Stroke::NONE,
    ));
    let label_anchor = to_screen(peak_x, (center_y + y_at(peak_x)) / 2.0);
    painter.text(
        label_anchor + vec2(8.0, 0.0),
        Align2::LEFT_CENTER,
        format!("A ({:.0}%)", wave.amplitude_pct),
        FontId::proportional(12.0),
        color,
    );

    Ok(())
}

/// Display-only angular frequency; decoupled from the physical frequency
/// so every band renders at a usable screen wavelength.
pub(crate) fn visual_omega(wavelength_m: f64) -> f64 {
    800.0 / (wavelength_m * 1e9)
}

/// One spatial period of the drawn curve, in world pixels.
pub(crate) fn period_px(omega: f64) -> f64 {
    TAU * 100.0 / omega.max(1e-9)
}

/// World x of the curve peak nearest `world_center_x`: the integer k
/// solving `omega * (x/100) + base_phase = pi/2 + 2*pi*k` closest to the
/// given center.
pub(crate) fn nearest_peak_x(omega: f64, base_phase: f64, world_center_x: f64) -> f64 {
    let k = ((omega * world_center_x / 100.0 - (FRAC_PI_2 - base_phase)) / TAU).round();
    (FRAC_PI_2 + TAU * k - base_phase) * 100.0 / omega.max(1e-9)
}

fn curve_y(center_y: f64, amp_px: f64, omega: f64, phase_rad: f64, clock: f64, x: f64) -> f64 {
    center_y + amp_px * (omega * (x / 100.0) + phase_rad + clock).sin()
}

/// Horizontal overdraw beyond the visible canvas so zooming out still
/// shows content. Grows as the scale shrinks, capped to keep per-frame
/// work finite.
pub(crate) fn extended_padding(width: f64, scale: f32) -> f64 {
    let zoom = scale.max(0.0001) as f64;
    let inv = (1.0 / zoom).max(1.0);
    let base = width.max(200.0);
    (base.max(width / zoom * 1.5) * inv * 3.0).floor().min(PADDING_CAP)
}

/// Curve sampling stride in world pixels: 1 at default scale or zoomed
/// in, coarser as the user zooms out, capped.
pub(crate) fn sample_step(scale: f32) -> i64 {
    let inv = (1.0 / scale.max(0.0001) as f64).max(1.0);
    let step = ((inv - 0.5).max(1.0) / 2.0).floor() as i64;
    step.clamp(1, SAMPLE_STEP_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_sits_on_sine_maximum() {
        let omega = visual_omega(5.0e-7);
        let base_phase = 0.7;
        let peak_x = nearest_peak_x(omega, base_phase, 380.0);
        let arg = omega * peak_x / 100.0 + base_phase;
        // Argument is pi/2 modulo 2*pi.
        let residue = (arg - FRAC_PI_2).rem_euclid(TAU);
        assert!(residue < 1e-9 || (TAU - residue) < 1e-9, "residue {residue}");
    }

    #[test]
    fn test_peak_is_nearest_to_center() {
        let omega = visual_omega(5.0e-7);
        let center = 1234.5;
        let peak_x = nearest_peak_x(omega, 0.0, center);
        assert!((peak_x - center).abs() <= period_px(omega) / 2.0 + 1e-9);
    }

    #[test]
    fn test_period_matches_omega() {
        let omega = visual_omega(5.0e-7);
        let p = period_px(omega);
        // Advancing one period leaves the sine argument unchanged mod 2*pi.
        let delta = omega * p / 100.0;
        assert!((delta - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_sample_step_bounds() {
        assert_eq!(sample_step(1.0), 1);
        assert_eq!(sample_step(5.0), 1);
        // Zoomed far out the stride grows but stays capped.
        assert!(sample_step(0.05) > 1);
        assert!(sample_step(0.0001) <= SAMPLE_STEP_CAP);
    }

    #[test]
    fn test_padding_grows_and_caps() {
        let at_default = extended_padding(800.0, 1.0);
        let zoomed_out = extended_padding(800.0, 0.1);
        assert!(zoomed_out > at_default);
        assert!(extended_padding(800.0, 0.001) <= PADDING_CAP);
    }

    #[test]
    fn test_curve_y_amplitude_envelope() {
        let omega = visual_omega(5.0e-7);
        for i in 0..1000 {
            let y = curve_y(160.0, 140.0, omega, 0.0, 0.3, i as f64);
            assert!((20.0..=300.0).contains(&y));
        }
    }
}
