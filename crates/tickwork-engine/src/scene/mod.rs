//! Renderer-agnostic draw stream.
//!
//! Views record [`DrawCmd`]s into a [`DrawList`] tagged with a [`ZIndex`];
//! the renderer replays them back to front. Ties on z keep recording order.
//! Per-shape payloads and their `push_*` helpers live under [`shapes`].

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use z_index::ZIndex;
