use std::time::Instant;

use glam::{Mat4, Vec3};

use crate::device::FrameSource;
use crate::render::{render_with, FrameOutcome};
use crate::scene::Rotation;
use crate::time::Ticker;

use super::SurfaceConfig;

/// Rotation state plus the ticker that advances it.
///
/// Knows nothing about wgpu: frames come from any [`FrameSource`] and the
/// `draw` callback receives the model matrix only once a drawable exists, so a
/// skipped frame stages nothing on the GPU.
#[derive(Debug, Clone)]
pub(crate) struct CubeAnimation {
    rotation: Rotation,
    axis: Vec3,
    ticker: Ticker,
}

impl CubeAnimation {
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            rotation: Rotation::new(config.rotation_step),
            axis: config.rotation_axis,
            ticker: Ticker::new(config.tick_interval),
        }
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn start(&mut self, now: Instant) {
        self.ticker.start(now);
        log::debug!("ticker started ({:?} interval)", self.ticker.interval());
    }

    pub fn stop(&mut self) {
        if self.ticker.is_running() {
            self.ticker.cancel();
            log::debug!("ticker cancelled");
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// Runs a tick if one is due at `now`.
    pub fn poll<S, F>(&mut self, now: Instant, source: &mut S, draw: F) -> Option<FrameOutcome>
    where
        S: FrameSource + ?Sized,
        F: FnOnce(&mut S::Frame, Mat4),
    {
        self.ticker.poll(now).then(|| self.tick(source, draw))
    }

    /// Advances the rotation by one step, then renders.
    pub fn tick<S, F>(&mut self, source: &mut S, draw: F) -> FrameOutcome
    where
        S: FrameSource + ?Sized,
        F: FnOnce(&mut S::Frame, Mat4),
    {
        self.rotation.advance();
        self.render(source, draw)
    }

    /// Renders at the current rotation. A fatal outcome stops the ticker.
    pub fn render<S, F>(&mut self, source: &mut S, draw: F) -> FrameOutcome
    where
        S: FrameSource + ?Sized,
        F: FnOnce(&mut S::Frame, Mat4),
    {
        let (rotation, axis) = (self.rotation, self.axis);
        let outcome = render_with(source, |frame| draw(frame, rotation.model_matrix(axis)));

        if outcome == FrameOutcome::Fatal {
            self.stop();
        }
        outcome
    }
}
