use crate::render::batch::{extend_batches, Batch, BatchKind};
use crate::render::shapes::shape::ShapeRenderer;
use crate::render::shapes::text::TextRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

/// Draws a whole [`DrawList`] in paint order.
///
/// Commands are walked once, back to front. Each one is queued on the shape
/// or text renderer and recorded as a batch; then every batch is replayed
/// inside one render pass that loads the already-cleared target.
#[derive(Default)]
pub struct SceneRenderer {
    shapes: ShapeRenderer,
    text: TextRenderer,
    batches: Vec<Batch>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        if list.is_empty() || !ctx.has_area() {
            return;
        }

        self.shapes.begin();
        self.text.begin();
        self.batches.clear();

        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Text(cmd) => {
                    let start = self.text.len();
                    let added = self.text.push(ctx, cmd, fonts);
                    extend_batches(&mut self.batches, BatchKind::Text, start, start + added);
                }
                cmd => {
                    let start = self.shapes.len();
                    if self.shapes.push(cmd) {
                        extend_batches(&mut self.batches, BatchKind::Shape, start, start + 1);
                    }
                }
            }
        }

        if self.batches.is_empty() {
            return;
        }

        self.shapes.prepare(ctx);
        self.text.prepare(ctx);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tickwork scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in &self.batches {
            match batch.kind {
                BatchKind::Shape => self.shapes.draw(&mut rpass, batch.range.clone()),
                BatchKind::Text => self.text.draw(&mut rpass, batch.range.clone()),
            }
        }
    }
}
