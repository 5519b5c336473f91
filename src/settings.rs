//! Game settings and tuning
//!
//! Geometry and tuning values for a single game. Persisted as JSON in
//! LocalStorage on the web, or read from a file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised when parsing or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("parse error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("brick grid must have at least one row and one column")]
    EmptyGrid,
    #[error("paddle width {paddle} exceeds canvas width {canvas}")]
    PaddleTooWide { paddle: f32, canvas: f32 },
    #[error("brick grid needs {needed}x{needed_h} but canvas is {width}x{height}")]
    GridOverflow {
        needed: f32,
        needed_h: f32,
        width: f32,
        height: f32,
    },
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Distance between the spawn point and the bottom edge
    pub ball_start_lift: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,

    pub initial_lives: u32,

    // === Drawing ===
    /// CSS color used for every shape and the HUD text
    pub color: String,
    /// CSS font for the HUD
    pub font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            brick_rows: BRICK_ROW_COUNT,
            brick_columns: BRICK_COLUMN_COUNT,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_start_lift: BALL_START_LIFT,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,

            initial_lives: INITIAL_LIVES,

            color: DRAW_COLOR.to_string(),
            font: HUD_FONT.to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> usize {
        self.brick_rows * self.brick_columns
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the geometry describes a playable game
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dims = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
        ];
        // `!(v > 0.0)` also rejects NaN
        if let Some(&(name, value)) = dims.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(SettingsError::NonPositive { name, value });
        }

        let spacing = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
            ("ball_start_lift", self.ball_start_lift),
        ];
        let motion = [
            ("ball_start_dx", self.ball_start_dx),
            ("ball_start_dy", self.ball_start_dy),
        ];
        if let Some(&(name, value)) = dims
            .iter()
            .chain(&spacing)
            .chain(&motion)
            .find(|(_, v)| !v.is_finite())
        {
            return Err(SettingsError::NotFinite { name, value });
        }
        if let Some(&(name, value)) = spacing.iter().find(|(_, v)| *v < 0.0) {
            return Err(SettingsError::Negative { name, value });
        }

        if self.brick_count() == 0 {
            return Err(SettingsError::EmptyGrid);
        }

        if self.paddle_width > self.canvas_width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle_width,
                canvas: self.canvas_width,
            });
        }

        let needed = self.brick_offset_left
            + self.brick_columns as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding;
        let needed_h = self.brick_offset_top
            + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding;
        if needed > self.canvas_width || needed_h > self.canvas_height {
            return Err(SettingsError::GridOverflow {
                needed,
                needed_h,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        if self.initial_lives == 0 {
            return Err(SettingsError::NoLives);
        }

        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from an optional JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
