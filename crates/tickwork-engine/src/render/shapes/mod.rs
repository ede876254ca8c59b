//! Shape and text renderers used by [`super::SceneRenderer`].

mod atlas;
mod common;

pub mod shape;
pub mod text;

pub use atlas::{quantize_px, AtlasSlot, GlyphAtlas, GlyphCache};
