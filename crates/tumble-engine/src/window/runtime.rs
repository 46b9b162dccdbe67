use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::host::SurfaceHost;
use crate::render::FrameOutcome;
use crate::surface::{RenderSurface, SurfaceConfig};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tumble".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, mounts the surface produced by `host` and runs until
    /// the window is closed.
    ///
    /// Mount failures (no device, pipeline errors) and fatal surface errors end
    /// the loop and are returned.
    pub fn run<H>(config: RuntimeConfig, surface_config: SurfaceConfig, host: H) -> Result<()>
    where
        H: SurfaceHost + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, surface_config, host);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct Mounted {
    window: Window,

    #[borrows(window)]
    #[covariant]
    surface: RenderSurface<'this>,
}

struct AppState<H>
where
    H: SurfaceHost + 'static,
{
    config: RuntimeConfig,
    surface_config: SurfaceConfig,
    host: H,

    mounted: Option<Mounted>,
    failure: Option<anyhow::Error>,
}

impl<H> AppState<H>
where
    H: SurfaceHost + 'static,
{
    fn new(config: RuntimeConfig, surface_config: SurfaceConfig, host: H) -> Self {
        Self {
            config,
            surface_config,
            host,
            mounted: None,
            failure: None,
        }
    }

    fn mount(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        // Split borrows so the builder closure does not capture `self`.
        let (host, surface_config) = (&mut self.host, &self.surface_config);

        let mounted = MountedTryBuilder {
            window,
            surface_builder: |w| host.create(w, surface_config),
        }
        .try_build()?;

        mounted.with_window(|w| w.request_redraw());
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Drops the surface (cancelling its ticker) and then the window.
    fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("surface unmounted");
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.unmount();
        event_loop.exit();
    }

    fn handle_outcome(&mut self, event_loop: &ActiveEventLoop, outcome: FrameOutcome) {
        if outcome == FrameOutcome::Fatal {
            self.fail(event_loop, anyhow!("surface can no longer present frames"));
        }
    }
}

impl<H> ApplicationHandler for AppState<H>
where
    H: SurfaceHost + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.mounted.is_some() {
            return;
        }

        if let Err(err) = self.mount(event_loop) {
            self.fail(event_loop, err.context("failed to mount surface"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        if let Some(outcome) = mounted.with_surface_mut(|s| s.poll_ticker(Instant::now())) {
            self.handle_outcome(event_loop, outcome);
        }

        // Sleep until the ticker is due; a cancelled or missing ticker waits for events.
        let deadline = self
            .mounted
            .as_ref()
            .and_then(|m| m.with_surface(|s| s.next_deadline()));

        match deadline {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        if mounted.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.unmount();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                // A resize is the host re-laying out the view.
                let (host, surface_config) = (&mut self.host, &self.surface_config);
                mounted.with_surface_mut(|s| {
                    s.resize(new_size);
                    host.on_config_changed(s, surface_config);
                });
                mounted.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                // A scale change re-lays out the view just like a resize.
                let new_size = mounted.with_window(|w| w.inner_size());
                let (host, surface_config) = (&mut self.host, &self.surface_config);
                mounted.with_surface_mut(|s| {
                    s.resize(new_size);
                    host.on_config_changed(s, surface_config);
                });
                mounted.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                // Redraws requested by the window system do not advance the animation.
                let outcome = mounted.with_mut(|fields| {
                    fields.window.pre_present_notify();
                    fields.surface.render_frame()
                });
                self.handle_outcome(event_loop, outcome);
            }

            _ => {}
        }
    }
}
