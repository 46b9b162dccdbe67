//! Scene data: the static cube mesh and the rotation that animates it.
//!
//! Everything here is plain CPU data; uploading it is the renderer's job.

mod cube;
mod rotation;

pub use cube::{Vertex, CUBE_INDICES, CUBE_VERTICES};
pub use rotation::{rotation_about, Rotation, DEFAULT_AXIS, DEFAULT_STEP};
