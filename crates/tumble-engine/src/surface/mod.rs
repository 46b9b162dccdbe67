//! The render surface: everything needed to draw the spinning cube into one window.

mod animation;
mod config;
mod render_surface;

pub use config::SurfaceConfig;
pub use render_surface::RenderSurface;
