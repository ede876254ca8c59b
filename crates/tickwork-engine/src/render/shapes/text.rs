use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::RenderCtx;
use crate::scene::shapes::TextCmd;
use crate::text::FontSystem;

use super::atlas::{quantize_px, AtlasSlot, GlyphCache};
use super::common::{
    quad_pipeline, viewport_layout_entry, InstanceBuffer, QuadBuffers, ViewportUniform,
};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

/// Renderer for `DrawCmd::Text`.
///
/// Maintains a 2048 × 2048 R8Unorm glyph atlas. Glyphs are rasterized at
/// physical size on first use via fontdue and cached, keyed by
/// `GlyphRasterConfig` (font, glyph index, pixel size). Sizes snap to half
/// pixels; when the atlas still fills up it is repacked on the next frame.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<QuadBuffers>,

    atlas_texture: Option<wgpu::Texture>,
    glyphs: GlyphCache<GlyphRasterConfig>,

    instances: Vec<GlyphInstance>,
    instance_vbo: InstanceBuffer,

    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            quad: None,
            atlas_texture: None,
            glyphs: GlyphCache::new(ATLAS_SIZE, GLYPH_PADDING),
            instances: Vec::new(),
            instance_vbo: InstanceBuffer::default(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin(&mut self) {
        self.instances.clear();
        // Safe here: no instance from the previous frame is drawn again.
        self.glyphs.recycle_if_full();
    }

    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Lays out `cmd`, rasterizing unseen glyphs into the atlas, and queues
    /// one instance per visible glyph. Returns the number of instances added.
    pub(crate) fn push(&mut self, ctx: &RenderCtx<'_>, cmd: &TextCmd, fonts: &FontSystem) -> u32 {
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
            return 0;
        };
        let scale = ctx.scale_factor.max(0.01);
        let px = quantize_px(cmd.size * scale);
        if cmd.text.is_empty() || cmd.color.a <= 0.0 || px <= 0.0 {
            return 0;
        }

        self.ensure_atlas(ctx);

        // Lay out in physical pixels, then map back to logical space so the
        // bitmaps land on whole device pixels.
        self.layout.reset(&LayoutSettings {
            x: (cmd.origin.x * scale).round(),
            y: (cmd.origin.y * scale).round(),
            max_width: cmd.max_width.map(|w| w * scale),
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, px, 0));

        // Snapshot positions so the borrow on `self.layout` ends before the
        // atlas (which needs `&mut self`) is touched.
        let glyphs: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let color = cmd.color.to_array();
        let before = self.instances.len();

        for (key, x, y, w, h) in glyphs {
            let slot = match self.glyphs.get(&key) {
                Some(slot) => slot,
                None => {
                    let (metrics, bitmap) = font.rasterize_config(key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    let Some(slot) = self.upload_glyph(
                        ctx,
                        key,
                        &bitmap,
                        metrics.width as u32,
                        metrics.height as u32,
                    ) else {
                        continue;
                    };
                    slot
                }
            };

            self.instances.push(GlyphInstance {
                dst_min: [x / scale, y / scale],
                dst_max: [(x + w as f32) / scale, (y + h as f32) / scale],
                uv_min: slot.uv_min,
                uv_max: slot.uv_max,
                color,
            });
        }

        (self.instances.len() - before) as u32
    }

    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if self.instances.is_empty() {
            return;
        }
        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx.device, "tickwork text"));
        }
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instance_vbo.upload(ctx, "tickwork text instance vbo", &self.instances);
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.buffer() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, range);
    }

    // ── atlas helpers ──────────────────────────────────────────────────────

    fn upload_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        key: GlyphRasterConfig,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<AtlasSlot> {
        let texture = self.atlas_texture.as_ref()?;
        let slot = self.glyphs.insert(key, w, h)?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x: slot.x, y: slot.y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        Some(slot)
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_some() {
            return;
        }

        self.atlas_texture = Some(ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tickwork text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }));
        self.glyphs.clear();
        // The bind group references the old view.
        self.bind_group = None;
        self.pipeline = None;
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.pipeline.is_some()
            && self.bind_group.is_some()
        {
            return;
        }
        let Some(atlas) = self.atlas_texture.as_ref() else { return };

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tickwork text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tickwork text bgl"),
            entries: &[
                viewport_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = quad_pipeline(ctx, "tickwork text", &shader, &bgl, GlyphInstance::layout());

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tickwork text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tickwork text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tickwork text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
