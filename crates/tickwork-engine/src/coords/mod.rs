//! Geometry shared by the renderers, the UI and the studio views.
//!
//! Canonical CPU space is logical pixels: origin top-left, +X right, +Y down.
//! Renderers convert to NDC in shaders from the logical surface size.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
