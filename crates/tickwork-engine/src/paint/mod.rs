//! Paint model shared between UI and renderers.
//!
//! Only solid fills exist; every draw command carries a [`Color`].
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
