use winit::dpi::PhysicalSize;

/// Depth attachment matching the swapchain size.
pub struct DepthTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let (texture, view) = Self::make(device, size);
        Self { texture, view }
    }

    /// Recreates the texture if `size` differs from the current one.
    pub fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if self.texture.width() == size.width && self.texture.height() == size.height {
            return;
        }
        let (texture, view) = Self::make(device, size);
        self.texture = texture;
        self.view = view;
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    fn make(device: &wgpu::Device, size: PhysicalSize<u32>) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tumble depth"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }
}
