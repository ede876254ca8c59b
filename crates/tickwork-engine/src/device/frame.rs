/// One acquired swapchain image plus the encoder recording into it.
///
/// Holding the surface texture blocks acquisition of the next frame, so
/// submit promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
