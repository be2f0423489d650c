//! Wave canvas: gesture handling and the per-frame draw call.
//!
//! Wheel and pinch zoom anchor at the pointer, drag pans. Paused frames
//! go through the same `draw_scene` call as animated ones, so an
//! input-driven redraw while paused can never diverge visually from the
//! regular animation cadence.

use eframe::egui::{self, Sense};

use crate::render::scheduler::AnimationScheduler;
use crate::render::view::ViewTransform;
use crate::render::wave::{self, WaveSnapshot};

/// Zoom factor applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 1.08;

pub fn show(
    ui: &mut egui::Ui,
    view: &mut ViewTransform,
    scheduler: &mut AnimationScheduler,
    snapshot: &WaveSnapshot,
) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let rect = response.rect;

    if response.hovered() {
        if let Some(hover) = response.hover_pos() {
            // View transform coordinates are relative to the canvas corner.
            let anchor = (hover - rect.min).to_pos2();

            let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_y != 0.0 {
                let factor = if scroll_y > 0.0 {
                    WHEEL_ZOOM_STEP
                } else {
                    1.0 / WHEEL_ZOOM_STEP
                };
                view.zoom_at(anchor, factor);
            }

            // Pinch: egui folds successive pinch-distance ratios into
            // zoom_delta, reported at the touch midpoint.
            let pinch = ui.input(|i| i.zoom_delta());
            if pinch != 1.0 {
                view.zoom_at(anchor, pinch);
            }
        }
    }

    if response.dragged() {
        view.pan_by(response.drag_delta());
    }

    // Run the scheduled frame; overlays appear only on paused frames.
    let clock = scheduler.run_frame();
    wave::draw_scene(&painter, rect, view, snapshot, clock, !scheduler.is_playing());

    if scheduler.has_pending_frame() {
        ui.ctx().request_repaint();
    }
}
