//! Game state and core simulation types
//!
//! Everything a frame mutates lives in [`GameState`]; there is no other
//! mutable game data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::Settings;

/// Result of a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// Game continues
    #[default]
    Playing,
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

impl FrameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FrameOutcome::Playing)
    }

    /// Message shown to the player when the game ends
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FrameOutcome::Playing => None,
            FrameOutcome::Won => Some("You win!"),
            FrameOutcome::Lost => Some("Game Over"),
        }
    }
}

/// Things that happened during the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit,
    BrickDestroyed { column: usize, row: usize },
    LifeLost { remaining: u32 },
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position and velocity
    pub fn spawn(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(
                settings.canvas_width / 2.0,
                settings.canvas_height - settings.ball_start_lift,
            ),
            vel: Vec2::new(settings.ball_start_dx, settings.ball_start_dy),
            radius: settings.ball_radius,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's paddle, pinned to the bottom of the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance moved per frame
    pub step: f32,
}

impl Paddle {
    /// Paddle centered horizontally
    pub fn centered(settings: &Settings) -> Self {
        Self {
            x: (settings.canvas_width - settings.paddle_width) / 2.0,
            y: settings.canvas_height - settings.paddle_height,
            width: settings.paddle_width,
            height: settings.paddle_height,
            step: settings.paddle_step,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Brick status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// Fixed grid of bricks.
///
/// Geometry is computed once; status lives in a flat array indexed
/// column-major, `column * rows + row`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    brick_size: Vec2,
    /// Top-left corner of each brick
    origins: Vec<Vec2>,
    status: Vec<BrickStatus>,
}

impl BrickGrid {
    pub fn new(settings: &Settings) -> Self {
        let columns = settings.brick_columns;
        let rows = settings.brick_rows;
        let mut origins = Vec::with_capacity(columns * rows);
        for c in 0..columns {
            for r in 0..rows {
                origins.push(Vec2::new(
                    c as f32 * (settings.brick_width + settings.brick_padding)
                        + settings.brick_offset_left,
                    r as f32 * (settings.brick_height + settings.brick_padding)
                        + settings.brick_offset_top,
                ));
            }
        }

        Self {
            columns,
            rows,
            brick_size: Vec2::new(settings.brick_width, settings.brick_height),
            origins,
            status: vec![BrickStatus::Active; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total bricks, destroyed or not
    pub fn len(&self) -> usize {
        self.status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    pub fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    /// (column, row) for a flat index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.rows, index % self.rows)
    }

    /// Status of the brick at (column, row); `None` outside the grid
    pub fn status(&self, column: usize, row: usize) -> Option<BrickStatus> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.status.get(self.index(column, row)).copied()
    }

    pub fn rect(&self, index: usize) -> Rect {
        let origin = self.origins[index];
        Rect::new(origin.x, origin.y, self.brick_size.x, self.brick_size.y)
    }

    pub fn destroy(&mut self, index: usize) {
        self.status[index] = BrickStatus::Destroyed;
    }

    pub fn active_count(&self) -> usize {
        self.status
            .iter()
            .filter(|s| **s == BrickStatus::Active)
            .count()
    }

    /// Flat indices and rectangles of the bricks still standing
    pub fn active(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.status
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == BrickStatus::Active)
            .map(|(i, _)| (i, self.rect(i)))
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Completed simulation steps
    pub frame: u64,
    /// Outcome of the most recent step
    pub outcome: FrameOutcome,
    /// Events from the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            paddle: Paddle::centered(settings),
            ball: Ball::spawn(settings),
            bricks: BrickGrid::new(settings),
            score: 0,
            lives: settings.initial_lives,
            frame: 0,
            outcome: FrameOutcome::Playing,
            events: Vec::new(),
        }
    }

    /// Discard everything and start over with the same settings
    pub fn reset(&mut self) {
        *self = Self::new(&self.settings);
    }

    /// Put ball and paddle back at their starting positions
    pub fn respawn(&mut self) {
        self.ball = Ball::spawn(&self.settings);
        self.paddle = Paddle::centered(&self.settings);
    }

    pub fn total_bricks(&self) -> usize {
        self.bricks.len()
    }
}
