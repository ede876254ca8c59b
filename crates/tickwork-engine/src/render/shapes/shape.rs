use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::shapes::Border;
use crate::scene::DrawCmd;

use super::common::{
    quad_pipeline, viewport_layout_entry, InstanceBuffer, QuadBuffers, ViewportUniform,
};

/// Signed-distance renderer for every non-text `DrawCmd`.
///
/// One instanced pipeline covers circles, rings, rounded rects, capsule
/// segments and gears; the fragment shader picks the distance function from
/// the instance's kind. Anti-aliasing uses screen-space derivatives, so edges
/// stay one pixel wide at any scale factor.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<QuadBuffers>,

    instances: Vec<ShapeInstance>,
    instance_vbo: InstanceBuffer,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the previous frame's instances.
    pub(crate) fn begin(&mut self) {
        self.instances.clear();
    }

    /// Queues `cmd`. Returns `false` when it produces nothing to draw.
    pub(crate) fn push(&mut self, cmd: &DrawCmd) -> bool {
        match ShapeInstance::from_cmd(cmd) {
            Some(inst) => {
                self.instances.push(inst);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Creates GPU resources on first use and uploads queued instances.
    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if self.instances.is_empty() {
            return;
        }
        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx.device, "tickwork shape"));
        }
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instance_vbo.upload(ctx, "tickwork shape instance vbo", &self.instances);
    }

    /// Draws the queued instances in `range`.
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

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tickwork shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tickwork shape bgl"),
            entries: &[viewport_layout_entry()],
        });

        let pipeline = quad_pipeline(ctx, "tickwork shape", &shader, &bgl, ShapeInstance::layout());

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tickwork shape viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tickwork shape bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

const KIND_CIRCLE: f32 = 0.0;
const KIND_ROUNDED_RECT: f32 = 1.0;
const KIND_SEGMENT: f32 = 2.0;
const KIND_GEAR: f32 = 3.0;

/// Instance data layout (80 bytes):
///
///  offset  0  kind          [f32; 4]   loc 1  (.x = kind)
///  offset 16  g0            [f32; 4]   loc 2
///  offset 32  g1            [f32; 4]   loc 3
///  offset 48  fill          [f32; 4]   loc 4
///  offset 64  border_color  [f32; 4]   loc 5
///
/// Geometry per kind:
///  circle   g0 = (cx, cy, r, border_w)
///  rrect    g0 = (x, y, w, h)          g1 = (radius, border_w, _, _)
///  segment  g0 = (x0, y0, x1, y1)      g1 = (half_width, _, _, _)
///  gear     g0 = (cx, cy, r, rot_rad)  g1 = (teeth, tooth_depth, skeleton, border_w)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct ShapeInstance {
    kind: [f32; 4],
    g0: [f32; 4],
    g1: [f32; 4],
    fill: [f32; 4],
    border_color: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x4, // kind
        2 => Float32x4, // g0
        3 => Float32x4, // g1
        4 => Float32x4, // fill
        5 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Converts a draw command into an instance. Degenerate or invisible
    /// shapes yield `None`, as does text.
    pub(crate) fn from_cmd(cmd: &DrawCmd) -> Option<Self> {
        match cmd {
            DrawCmd::Circle(c) => {
                if c.radius <= 0.0 {
                    return None;
                }
                let (bw, bc) = border_parts(c.border, c.radius);
                visible(c.fill.a, bw, bc)?;
                Some(Self::new(
                    KIND_CIRCLE,
                    [c.center.x, c.center.y, c.radius, bw],
                    [0.0; 4],
                    c.fill.to_array(),
                    bc,
                ))
            }
            DrawCmd::RoundedRect(r) => {
                let rect = r.rect.normalized();
                if rect.is_empty() {
                    return None;
                }
                let max_radius = rect.size.x.min(rect.size.y) / 2.0;
                let (bw, bc) = border_parts(r.border, max_radius);
                visible(r.fill.a, bw, bc)?;
                Some(Self::new(
                    KIND_ROUNDED_RECT,
                    [rect.origin.x, rect.origin.y, rect.size.x, rect.size.y],
                    [r.radius.clamp(0.0, max_radius), bw, 0.0, 0.0],
                    r.fill.to_array(),
                    bc,
                ))
            }
            DrawCmd::Segment(s) => {
                if s.width <= 0.0 || s.color.a <= 0.0 {
                    return None;
                }
                Some(Self::new(
                    KIND_SEGMENT,
                    [s.from.x, s.from.y, s.to.x, s.to.y],
                    [s.width / 2.0, 0.0, 0.0, 0.0],
                    s.color.to_array(),
                    [0.0; 4],
                ))
            }
            DrawCmd::Gear(g) => {
                if g.radius <= 0.0 || g.teeth == 0 {
                    return None;
                }
                let (bw, bc) = border_parts(g.border, g.radius);
                visible(g.fill.a, bw, bc)?;
                Some(Self::new(
                    KIND_GEAR,
                    [g.center.x, g.center.y, g.radius, g.rotation_deg.to_radians()],
                    [
                        g.teeth as f32,
                        g.tooth_depth(),
                        if g.skeleton { 1.0 } else { 0.0 },
                        bw,
                    ],
                    g.fill.to_array(),
                    bc,
                ))
            }
            DrawCmd::Text(_) => None,
        }
    }

    #[inline]
    fn new(kind: f32, g0: [f32; 4], g1: [f32; 4], fill: [f32; 4], border_color: [f32; 4]) -> Self {
        Self { kind: [kind, 0.0, 0.0, 0.0], g0, g1, fill, border_color }
    }
}

/// Border width (clamped to `[0, limit]`) and color.
fn border_parts(border: Option<Border>, limit: f32) -> (f32, [f32; 4]) {
    match border {
        Some(b) if b.width > 0.0 => (b.width.min(limit), b.color.to_array()),
        _ => (0.0, [0.0; 4]),
    }
}

/// `Some(())` when either the fill or the border would put ink on screen.
fn visible(fill_alpha: f32, border_width: f32, border_color: [f32; 4]) -> Option<()> {
    (fill_alpha > 0.0 || (border_width > 0.0 && border_color[3] > 0.0)).then_some(())
}
