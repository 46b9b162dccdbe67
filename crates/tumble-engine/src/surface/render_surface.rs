use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::device::{Gpu, GpuInit};
use crate::render::{CubePipeline, DepthTarget, FrameOutcome};
use crate::scene::Rotation;

use super::animation::CubeAnimation;
use super::SurfaceConfig;

/// GPU-backed view that draws the spinning cube.
///
/// Owns the device, swapchain, pipeline, depth target and the animation
/// (rotation state + ticker). Dropping the surface cancels the ticker and releases every
/// GPU resource.
///
/// `'w` is the window-borrow lifetime carried by `Gpu<'w>`.
pub struct RenderSurface<'w> {
    gpu: Gpu<'w>,
    queue: wgpu::Queue,
    pipeline: CubePipeline,
    depth: DepthTarget,
    animation: CubeAnimation,
    config: SurfaceConfig,
}

impl<'w> RenderSurface<'w> {
    /// Acquires a device for `window`, builds the cube pipeline and starts the ticker.
    pub async fn new(window: &'w Window, gpu_init: GpuInit, config: SurfaceConfig) -> Result<Self> {
        let gpu = Gpu::new(window, gpu_init)
            .await
            .context("failed to acquire a graphics device")?;

        let pipeline = CubePipeline::new(gpu.device(), gpu.surface_format())
            .await
            .context("failed to build the cube pipeline")?;

        let depth = DepthTarget::new(gpu.device(), gpu.size());

        let mut animation = CubeAnimation::new(&config);
        animation.start(Instant::now());

        Ok(Self {
            queue: gpu.queue().clone(),
            gpu,
            pipeline,
            depth,
            animation,
            config,
        })
    }

    pub fn rotation(&self) -> &Rotation {
        self.animation.rotation()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Next instant the ticker wants to run, or `None` once it is cancelled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animation.next_deadline()
    }

    /// Runs a tick if one is due at `now`.
    pub fn poll_ticker(&mut self, now: Instant) -> Option<FrameOutcome> {
        let Self {
            gpu,
            queue,
            pipeline,
            depth,
            animation,
            config,
        } = self;
        animation.poll(now, gpu, |frame, model| {
            pipeline.write_model(queue, model);
            pipeline.encode(frame, depth, config.clear_color);
        })
    }

    /// Advances the rotation by one step and renders a frame.
    pub fn tick(&mut self) -> FrameOutcome {
        let Self {
            gpu,
            queue,
            pipeline,
            depth,
            animation,
            config,
        } = self;
        animation.tick(gpu, |frame, model| {
            pipeline.write_model(queue, model);
            pipeline.encode(frame, depth, config.clear_color);
        })
    }

    /// Renders the cube at the current rotation.
    ///
    /// Returns [`FrameOutcome::Skipped`] without staging or submitting anything
    /// when the swapchain has no drawable to hand out.
    pub fn render_frame(&mut self) -> FrameOutcome {
        let Self {
            gpu,
            queue,
            pipeline,
            depth,
            animation,
            config,
        } = self;
        animation.render(gpu, |frame, model| {
            pipeline.write_model(queue, model);
            pipeline.encode(frame, depth, config.clear_color);
        })
    }

    /// Reconfigures the swapchain and depth target after a window resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
        self.depth.resize(self.gpu.device(), new_size);
        log::debug!("surface resized to {}x{}", new_size.width, new_size.height);
    }
}

impl Drop for RenderSurface<'_> {
    fn drop(&mut self) {
        self.animation.stop();
        log::debug!("render surface released at rotation {:.2}", self.rotation().angle());
    }
}
