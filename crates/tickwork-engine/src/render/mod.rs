//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! [`SceneRenderer`] walks a draw list once in paint order and interleaves
//! shape and text batches inside a single render pass, so z-order holds
//! across both kinds of content.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod batch;
mod ctx;
mod scene;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::SceneRenderer;
