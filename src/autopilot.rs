//! Idle/demo mode - steers the paddle under the ball

use crate::input::Steer;
use crate::sim::GameState;

/// Steer the paddle center toward the ball.
///
/// Holds still within half a step of the ball so the paddle doesn't jitter
/// back and forth around it.
pub fn steer(state: &GameState) -> Steer {
    let offset = state.ball.pos.x - state.paddle.center();
    let dead_zone = state.paddle.step / 2.0;

    if offset > dead_zone {
        Steer::Right
    } else if offset < -dead_zone {
        Steer::Left
    } else {
        Steer::None
    }
}
