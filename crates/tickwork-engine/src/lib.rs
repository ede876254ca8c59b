//! Tickwork engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the UI and studio layers:
//! a single-window event loop, a z-ordered draw list, an SDF shape renderer
//! and a glyph-atlas text renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
