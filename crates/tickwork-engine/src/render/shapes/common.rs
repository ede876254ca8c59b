//! Shared GPU types and utilities used by the shape and text renderers.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub scale: f32,
    pub _pad: f32, // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn from_ctx(ctx: &RenderCtx<'_>) -> Self {
        Self {
            viewport: [ctx.logical_size.x.max(1.0), ctx.logical_size.y.max(1.0)],
            scale: ctx.scale_factor.max(0.01),
            _pad: 0.0,
        }
    }
}

/// Minimum binding size for the viewport uniform buffer.
pub(super) const VIEWPORT_UBO_SIZE: Option<std::num::NonZeroU64> =
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64);

pub(super) fn viewport_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: VIEWPORT_UBO_SIZE,
        },
        count: None,
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Unit quad shared by every instanced renderer.
pub(super) struct QuadBuffers {
    pub vbo: wgpu::Buffer,
    pub ibo: wgpu::Buffer,
}

impl QuadBuffers {
    pub(super) fn new(device: &wgpu::Device, label: &str) -> Self {
        Self {
            vbo: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} quad vbo")),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            ibo: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} quad ibo")),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            }),
        }
    }
}

// ── instance buffer ───────────────────────────────────────────────────────

/// Grow-only instance vertex buffer (power-of-two capacity, min 64).
#[derive(Default)]
pub(super) struct InstanceBuffer {
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
}

impl InstanceBuffer {
    pub(super) fn upload<T: Pod>(&mut self, ctx: &RenderCtx<'_>, label: &str, data: &[T]) {
        if data.is_empty() {
            return;
        }
        if data.len() > self.capacity || self.buffer.is_none() {
            let cap = data.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cap;
        }
        if let Some(buf) = self.buffer.as_ref() {
            ctx.queue.write_buffer(buf, 0, bytemuck::cast_slice(data));
        }
    }

    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Instanced premultiplied-alpha quad pipeline with one bind group.
pub(super) fn quad_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader: &wgpu::ShaderModule,
    bgl: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{label} pipeline layout")),
        bind_group_layouts: &[bgl],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} pipeline")),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
