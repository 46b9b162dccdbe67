use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks `preferred` when the surface supports it, otherwise the first supported format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    preferred: wgpu::TextureFormat,
) -> Option<wgpu::TextureFormat> {
    if formats.contains(&preferred) {
        return Some(preferred);
    }
    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    alpha_modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| alpha_modes.contains(m))
        .or_else(|| alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    // wgpu rejects 0x0 configurations; defer until the window is visible again.
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wgpu::{CompositeAlphaMode, TextureFormat};

    // ── choose_surface_format ─────────────────────────────────────────────

    #[test]
    fn format_prefers_requested_when_supported() {
        let formats = [TextureFormat::Rgba8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(
            choose_surface_format(&formats, TextureFormat::Bgra8Unorm),
            Some(TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn format_falls_back_to_first_supported() {
        let formats = [TextureFormat::Rgba8Unorm, TextureFormat::Rgba16Float];
        assert_eq!(
            choose_surface_format(&formats, TextureFormat::Bgra8Unorm),
            Some(TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn format_none_when_surface_reports_nothing() {
        assert_eq!(choose_surface_format(&[], TextureFormat::Bgra8Unorm), None);
    }

    // ── choose_alpha_mode ─────────────────────────────────────────────────

    #[test]
    fn alpha_mode_keeps_supported_request() {
        let modes = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn alpha_mode_unsupported_request_uses_first() {
        let modes = [CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn alpha_mode_auto_when_nothing_reported() {
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }
}
