//! GPU device + surface management.
//!
//! Creates the wgpu instance, adapter, device and queue for the single
//! studio window, configures its surface and hands out per-frame encoders.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
