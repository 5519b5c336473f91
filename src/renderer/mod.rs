//! Rendering module
//!
//! Draws a [`GameState`] into anything implementing [`Surface`]. Drawing
//! reads state only and never feeds back into the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::GameState;

/// Left margin of the score text
const SCORE_X: f32 = 8.0;
/// Lives text starts this far from the right edge
const LIVES_INSET: f32 = 65.0;
/// Baseline of both HUD lines
const HUD_Y: f32 = 20.0;

/// Output sink for a frame. Implementations must not fail the game; errors
/// from the backend are theirs to swallow or log.
pub trait Surface {
    /// Erase the whole drawing area
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Redraw the whole frame
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let settings = &state.settings;
    let color = settings.color.as_str();

    surface.clear(settings.canvas_width, settings.canvas_height);

    for (_, rect) in state.bricks.active() {
        surface.fill_rect(rect.x, rect.y, rect.w, rect.h, color);
    }

    let paddle = &state.paddle;
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);

    surface.fill_circle(state.ball.pos, state.ball.radius, color);

    surface.fill_text(
        &format!("Score: {}", state.score),
        SCORE_X,
        HUD_Y,
        &settings.font,
        color,
    );
    surface.fill_text(
        &format!("Lives: {}", state.lives),
        settings.canvas_width - LIVES_INSET,
        HUD_Y,
        &settings.font,
        color,
    );
}
