//! Host-side contract for mounting a render surface.
//!
//! A host (window runtime, embedding toolkit, test harness) owns the view
//! hierarchy; the adapter only knows how to create a surface for a view and how
//! to react when the host's configuration changes.

mod cube;

pub use cube::CubeHost;

use anyhow::Result;
use winit::window::Window;

use crate::surface::{RenderSurface, SurfaceConfig};

/// Two-phase mount/update protocol between a host and its surface.
pub trait SurfaceHost {
    /// Builds the surface for `window`. Called once per mount.
    fn create<'w>(
        &mut self,
        window: &'w Window,
        config: &SurfaceConfig,
    ) -> Result<RenderSurface<'w>>;

    /// Called whenever the host re-evaluates the view with `config`.
    fn on_config_changed(&mut self, surface: &mut RenderSurface<'_>, config: &SurfaceConfig) {
        let _ = (surface, config);
    }
}
