//! Collision tests for axis-aligned geometry
//!
//! Everything here is a plain bounds check; responses (velocity flips) are
//! applied by the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// True if `p` lies strictly inside (edges excluded)
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

/// Which walls the ball is crossing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left or right wall
    pub side: bool,
    /// Ceiling
    pub top: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Check the ball against the left, right and top walls.
///
/// The bottom is not a wall; see [`ball_below_floor`].
pub fn ball_wall_hit(ball: &Ball, width: f32) -> WallHit {
    WallHit {
        side: ball.right() > width || ball.left() < 0.0,
        top: ball.top() < 0.0,
    }
}

/// Ball's bottom edge is below the paddle's top and its center is strictly
/// within the paddle's horizontal span
pub fn ball_paddle_hit(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() > paddle.y && ball.pos.x > paddle.x && ball.pos.x < paddle.right()
}

/// Ball has dropped past the bottom of the canvas
pub fn ball_below_floor(ball: &Ball, height: f32) -> bool {
    ball.bottom() > height
}
