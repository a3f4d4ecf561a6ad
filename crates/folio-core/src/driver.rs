//! Frame loop control for the trail.
//!
//! The host owns the scheduling (in the browser, `requestAnimationFrame`) and
//! calls [`TrailLoop::run_frame`] once per callback; the returned
//! [`LoopControl`] says whether to request another one.

use std::time::Duration;

use instant::Instant;

use crate::constants::STATS_LOG_EVERY_FRAMES;
use crate::surface::Surface;
use crate::trail::TrailAnimator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Halt,
}

/// Source of per-frame time deltas.
pub trait FrameClock {
    /// Time since the previous call.
    fn delta(&mut self) -> Duration;
}

/// Wall clock backed by `instant` (performance.now() on wasm).
pub struct InstantClock {
    last: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for InstantClock {
    fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt
    }
}

/// Clock that advances by the same step every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub step: Duration,
}

impl FixedClock {
    /// A 60 Hz display.
    pub fn sixty_hz() -> Self {
        Self {
            step: Duration::from_secs_f64(1.0 / 60.0),
        }
    }
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> Duration {
        self.step
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub elapsed: Duration,
}

impl FrameStats {
    pub fn record(&mut self, dt: Duration) {
        self.frames += 1;
        self.elapsed += dt;
    }

    /// Mean frame rate since the loop started, 0 before any time passed.
    pub fn mean_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

pub struct TrailLoop {
    animator: TrailAnimator,
    state: LoopState,
    stats: FrameStats,
}

impl TrailLoop {
    pub fn new(animator: TrailAnimator) -> Self {
        Self {
            animator,
            state: LoopState::Idle,
            stats: FrameStats::default(),
        }
    }

    pub fn animator(&self) -> &TrailAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut TrailAnimator {
        &mut self.animator
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Returns true when the loop was not already running, i.e. the host
    /// has to schedule the first frame.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        log::info!("[trail] loop {:?} -> Running", self.state);
        self.state = LoopState::Running;
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log::info!("[trail] loop stopped after {} frames", self.stats.frames);
            self.state = LoopState::Stopped;
        }
    }

    /// Render one frame if running.
    pub fn run_frame<S, C>(&mut self, surface: &mut S, clock: &mut C) -> LoopControl
    where
        S: Surface + ?Sized,
        C: FrameClock + ?Sized,
    {
        if !self.is_running() {
            return LoopControl::Halt;
        }
        self.stats.record(clock.delta());
        self.animator.render_frame(surface);
        if self.stats.frames % STATS_LOG_EVERY_FRAMES == 0 {
            log::debug!(
                "[trail] frames={} fps={:.1} particles={}",
                self.stats.frames,
                self.stats.mean_fps(),
                self.animator.len()
            );
        }
        LoopControl::Continue
    }
}
