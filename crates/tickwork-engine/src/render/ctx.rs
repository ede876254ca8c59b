use crate::coords::Vec2;

/// What a renderer needs from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Surface size in logical pixels.
    pub logical_size: Vec2,
    /// Physical pixels per logical pixel.
    pub scale_factor: f32,
}

impl RenderCtx<'_> {
    /// `false` for a minimized or not yet laid out surface.
    #[inline]
    pub fn has_area(&self) -> bool {
        let s = self.logical_size;
        s.is_finite() && s.x > 0.0 && s.y > 0.0
    }
}

/// Encoder and color view a frame is recorded into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
