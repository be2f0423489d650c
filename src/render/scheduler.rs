//! Animation scheduling as an explicit state machine.
//!
//! Continuous rendering is a cooperative single-shot-reschedule loop: one
//! frame request may be outstanding at a time (`Scheduled`), and each
//! executed frame re-arms the next one only while playing. The host frame
//! facility is egui's `request_repaint`; the app asks
//! [`AnimationScheduler::has_pending_frame`] after running a frame and
//! requests a repaint iff it returns true.

/// Per-frame advance of the animation clock, in radians.
pub const CLOCK_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramePhase {
    /// No frame request outstanding.
    Stopped,
    /// Exactly one frame request outstanding.
    Scheduled,
}

#[derive(Debug)]
pub struct AnimationScheduler {
    playing: bool,
    phase: FramePhase,
    clock: f64,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        // The wave animates from launch.
        Self {
            playing: true,
            phase: FramePhase::Scheduled,
            clock: 0.0,
        }
    }
}

impl AnimationScheduler {
    /// Start (or keep) playing. Idempotent: a second call while a frame
    /// is already scheduled does not create another one.
    pub fn play(&mut self) {
        self.playing = true;
        self.phase = FramePhase::Scheduled;
    }

    /// Stop playing and cancel any pending frame. Returns true when the
    /// caller owes one synchronous redraw so measurement overlays appear
    /// on the frozen frame; a repeated pause is a no-op returning false.
    pub fn pause(&mut self) -> bool {
        let owed = self.playing || self.phase == FramePhase::Scheduled;
        self.playing = false;
        self.phase = FramePhase::Stopped;
        owed
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Execute the current frame: advances the clock and re-arms the next
    /// frame while playing, otherwise freezes the clock and transitions to
    /// `Stopped`. Returns the clock value to draw with.
    pub fn run_frame(&mut self) -> f64 {
        if self.playing {
            self.clock += CLOCK_STEP;
            self.phase = FramePhase::Scheduled;
        } else {
            self.phase = FramePhase::Stopped;
        }
        self.clock
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_pending_frame(&self) -> bool {
        self.phase == FramePhase::Scheduled
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_is_idempotent() {
        let mut sched = AnimationScheduler::default();
        sched.play();
        sched.play();
        // Still exactly one pending frame.
        assert!(sched.has_pending_frame());
        let before = sched.clock();
        sched.run_frame();
        assert!((sched.clock() - before - CLOCK_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_pause_twice_is_noop() {
        let mut sched = AnimationScheduler::default();
        assert!(sched.pause());
        assert!(!sched.pause());
        assert!(!sched.has_pending_frame());
    }

    #[test]
    fn test_clock_frozen_while_paused() {
        let mut sched = AnimationScheduler::default();
        sched.run_frame();
        sched.pause();
        let frozen = sched.clock();
        // Out-of-band redraws while paused keep the clock unchanged and
        // do not re-arm the loop.
        sched.run_frame();
        sched.run_frame();
        assert_eq!(sched.clock(), frozen);
        assert!(!sched.has_pending_frame());
    }

    #[test]
    fn test_resume_rearms() {
        let mut sched = AnimationScheduler::default();
        sched.pause();
        sched.play();
        assert!(sched.has_pending_frame());
        let c0 = sched.clock();
        sched.run_frame();
        assert!(sched.clock() > c0);
        assert!(sched.has_pending_frame());
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut sched = AnimationScheduler::default();
        sched.toggle();
        assert!(!sched.is_playing());
        sched.toggle();
        assert!(sched.is_playing());
    }
}
