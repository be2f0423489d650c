//! Pan/zoom transform for the wave canvas.
//!
//! Coordinates are in logical (CSS-pixel) canvas space, relative to the
//! canvas top-left corner; device pixel ratio is handled by the backend.
//! `world = (screen - pan) / scale`, panning is unbounded, scale is
//! clamped on every mutation.

use eframe::egui::{Pos2, Vec2};

pub const SCALE_MIN: f32 = 0.01;
pub const SCALE_MAX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.pan) / self.scale).to_pos2()
    }

    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        (world.to_vec2() * self.scale + self.pan).to_pos2()
    }

    /// Zoom by `factor`, keeping the world point under `anchor` (screen
    /// coordinates) stationary.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32) {
        let world = self.screen_to_world(anchor);
        self.scale = (self.scale * factor).clamp(SCALE_MIN, SCALE_MAX);
        self.pan = anchor.to_vec2() - world.to_vec2() * self.scale;
    }

    /// Unbounded pan; the canvas is infinite.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }
}
