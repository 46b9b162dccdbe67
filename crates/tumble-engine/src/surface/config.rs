use std::time::Duration;

use glam::Vec3;

use crate::scene::{DEFAULT_AXIS, DEFAULT_STEP};

/// Behavior of a [`RenderSurface`](super::RenderSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Period of the animation ticker.
    pub tick_interval: Duration,

    /// Radians added to the rotation on every tick.
    pub rotation_step: f32,

    /// Rotation axis; normalized when the matrix is built.
    pub rotation_axis: Vec3,

    /// Color the frame is cleared to before the cube is drawn.
    pub clear_color: wgpu::Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs_f64(1.0 / 60.0),
            rotation_step: DEFAULT_STEP,
            rotation_axis: DEFAULT_AXIS,
            clear_color: wgpu::Color::BLACK,
        }
    }
}
