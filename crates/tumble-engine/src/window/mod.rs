//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, mounts a surface through a
//! `host::SurfaceHost` and wakes up whenever the surface's ticker is due.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
