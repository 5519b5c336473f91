//! Brick Breaker - a classic ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (movement, collisions, game state)
//! - `input`: Keyboard state and per-frame steering
//! - `autopilot`: Idle/demo steering
//! - `renderer`: Drawing through an abstract 2D surface
//! - `settings`: Data-driven geometry and tuning

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{KeyState, Steer};
pub use settings::{Settings, SettingsError};
pub use sim::{FrameOutcome, GameState, advance_frame};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Brick grid layout
    pub const BRICK_ROW_COUNT: usize = 7;
    pub const BRICK_COLUMN_COUNT: usize = 9;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal distance moved per frame while a key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    pub const INITIAL_LIVES: u32 = 2;

    /// Drawing style
    pub const DRAW_COLOR: &str = "#0095DD";
    pub const HUD_FONT: &str = "16px Arial";
}
