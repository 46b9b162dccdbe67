//! Tumble engine crate.
//!
//! This crate owns the GPU runtime pieces of the spinning-cube demo: device and
//! swapchain management, the cube pipeline, the render surface and the window
//! runtime that hosts it.

pub mod device;
pub mod host;
pub mod logging;
pub mod render;
pub mod scene;
pub mod surface;
pub mod time;
pub mod window;
