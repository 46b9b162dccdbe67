//! GPU rendering subsystem.
//!
//! The cube renderer owns its GPU resources (pipeline, buffers, model uniform).
//! Frames are driven through `render_with`, which only depends on the
//! `device::FrameSource` seam.
//!
//! Convention:
//! - geometry is object-space, the model matrix is the only transform
//! - the vertex shader maps the rotated cube straight into clip space

mod depth;
mod frame;
mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use depth::DepthTarget;
pub use frame::{render_with, FrameOutcome};
pub use pipeline::{CubePipeline, FRAGMENT_ENTRY, VERTEX_ENTRY};
