//! Tickwork mechanism model.
//!
//! Everything in this crate is headless: the gear-train kinematics, the
//! simulated clock state, the static part catalog and the explorer state that
//! the studio renders from. No GPU or window types appear here.

pub mod explorer;
pub mod hands;
pub mod kinematics;
pub mod point;
pub mod state;
pub mod train;
pub mod wall;

pub use explorer::{Action, ExplorerState};
pub use hands::{HandSpec, HANDS};
pub use kinematics::{TrainAngles, PERIOD_SECS};
pub use point::Point;
pub use state::ClockState;
pub use train::{GearSpec, PartId, Rgb8, TRAIN};
pub use wall::{LocalWallClock, WallClock};
