//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - No rendering or platform dependencies
//! - All mutable state in a single `GameState`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, WallHit, ball_below_floor, ball_paddle_hit, ball_wall_hit};
pub use state::{Ball, BrickGrid, BrickStatus, FrameOutcome, GameEvent, GameState, Paddle};
pub use tick::advance_frame;
