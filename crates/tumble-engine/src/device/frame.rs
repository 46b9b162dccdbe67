/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Outcome of asking a [`FrameSource`] for the next drawable.
#[derive(Debug)]
pub enum Acquire<F> {
    /// A drawable is available and ready to be encoded into.
    Ready(F),
    /// No drawable this time around; the frame is dropped without submission.
    Skip,
    /// The source cannot produce drawables anymore.
    Fatal,
}

/// Something that hands out drawables and takes them back for presentation.
///
/// [`Gpu`](super::Gpu) is the real implementation. The render path only talks to
/// this trait, so frame skipping can be exercised without a GPU.
pub trait FrameSource {
    type Frame;

    /// Acquires the next drawable, if any.
    fn acquire(&mut self) -> Acquire<Self::Frame>;

    /// Submits the recorded commands of `frame` and presents it.
    fn present(&mut self, frame: Self::Frame);
}
