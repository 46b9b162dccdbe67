use anyhow::Result;
use winit::window::Window;

use crate::device::GpuInit;
use crate::surface::{RenderSurface, SurfaceConfig};

use super::SurfaceHost;

/// Stateless adapter that mounts one spinning-cube surface per view.
///
/// The surface is built once and never updated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CubeHost {
    gpu_init: GpuInit,
}

impl CubeHost {
    pub fn new(gpu_init: GpuInit) -> Self {
        Self { gpu_init }
    }
}

impl SurfaceHost for CubeHost {
    fn create<'w>(
        &mut self,
        window: &'w Window,
        config: &SurfaceConfig,
    ) -> Result<RenderSurface<'w>> {
        let surface = pollster::block_on(RenderSurface::new(
            window,
            self.gpu_init.clone(),
            config.clone(),
        ))?;
        log::info!("cube surface mounted");
        Ok(surface)
    }

    fn on_config_changed(&mut self, surface: &mut RenderSurface<'_>, config: &SurfaceConfig) {
        if reconcile(surface.config(), config) == ConfigUpdate::Ignored {
            log::debug!("cube surface ignores configuration changes");
        }
    }
}

/// How the cube surface reacts to a host re-layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ConfigUpdate {
    /// The host passed the configuration the surface was built with.
    Unchanged,
    /// The host passed something new; the surface keeps its original setup.
    Ignored,
}

/// The surface's configuration is fixed at mount, so an update never alters it.
fn reconcile(current: &SurfaceConfig, incoming: &SurfaceConfig) -> ConfigUpdate {
    if current == incoming {
        ConfigUpdate::Unchanged
    } else {
        ConfigUpdate::Ignored
    }
}
