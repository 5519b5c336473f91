//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by exactly one frame.

use super::collision::{ball_below_floor, ball_paddle_hit, ball_wall_hit};
use super::state::{FrameOutcome, GameEvent, GameState};
use crate::input::Steer;

/// Advance the game state by one frame.
///
/// Order matters: the ball moves before any collision check so that every
/// test sees the new position. Once the game is won or lost the state is
/// frozen and the terminal outcome is returned again.
pub fn advance_frame(state: &mut GameState, steer: Steer) -> FrameOutcome {
    if state.outcome.is_terminal() {
        return state.outcome;
    }

    state.events.clear();
    state.frame += 1;

    let width = state.settings.canvas_width;
    let height = state.settings.canvas_height;

    // 1. Paddle, right checked first
    let paddle = &mut state.paddle;
    if steer.wants_right() && paddle.right() < width {
        paddle.x = (paddle.x + paddle.step).min(width - paddle.width);
    } else if steer.wants_left() && paddle.x > 0.0 {
        paddle.x = (paddle.x - paddle.step).max(0.0);
    }

    // 2. Ball
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // 3. Walls (no clamping)
    let wall = ball_wall_hit(ball, width);
    if wall.side {
        ball.vel.x = -ball.vel.x;
    }
    if wall.top {
        ball.vel.y = -ball.vel.y;
    }
    if wall.any() {
        state.events.push(GameEvent::WallBounce);
    }

    // 4. Paddle
    if ball_paddle_hit(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::PaddleHit);
    }

    // 5. Bricks, every hit counts
    let hits: Vec<usize> = state
        .bricks
        .active()
        .filter(|(_, rect)| rect.contains_strict(state.ball.pos))
        .map(|(i, _)| i)
        .collect();
    for idx in hits {
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks.destroy(idx);
        state.score += 1;
        let (column, row) = state.bricks.cell(idx);
        state.events.push(GameEvent::BrickDestroyed { column, row });
    }

    // 6. Win, checked before the floor
    if state.score as usize == state.total_bricks() {
        log::info!("All {} bricks cleared on frame {}", state.score, state.frame);
        state.events.push(GameEvent::Won);
        state.outcome = FrameOutcome::Won;
        return state.outcome;
    }

    // 7. Floor
    if ball_below_floor(&state.ball, height) {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });

        if state.lives == 0 {
            log::info!("Out of lives on frame {} (score {})", state.frame, state.score);
            state.events.push(GameEvent::Lost);
            state.outcome = FrameOutcome::Lost;
            return state.outcome;
        }

        log::debug!("Life lost, {} remaining", state.lives);
        state.respawn();
    }

    FrameOutcome::Playing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;
    use crate::settings::Settings;
    use crate::sim::state::{Ball, BrickStatus, Paddle};
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(&Settings::default())
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 10.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let outcome = advance_frame(&mut state, Steer::None);

        assert_eq!(outcome, FrameOutcome::Playing);
        assert_eq!(state.ball.pos, Vec2::new(404.0, 6.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(788.0, 300.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        advance_frame(&mut state, Steer::None);

        assert_eq!(state.ball.pos, Vec2::new(792.0, 304.0));
        assert_eq!(state.ball.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_open_space_keeps_velocity() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 400.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        advance_frame(&mut state, Steer::None);

        assert_eq!(state.ball.vel, Vec2::new(-4.0, 4.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 578.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        advance_frame(&mut state, Steer::None);

        assert_eq!(state.ball.vel.y, -4.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit]);
    }

    #[test]
    fn test_paddle_moves() {
        let mut state = new_state();
        advance_frame(&mut state, Steer::Right);
        assert_eq!(state.paddle.x, 357.0);
        advance_frame(&mut state, Steer::Left);
        assert_eq!(state.paddle.x, 350.0);
    }

    #[test]
    fn test_both_keys_prefer_right() {
        let mut state = new_state();
        let keys = KeyState {
            left: true,
            right: true,
        };
        advance_frame(&mut state, keys.steer());
        assert_eq!(state.paddle.x, 357.0);
    }

    #[test]
    fn test_both_keys_at_right_wall_move_left() {
        let mut state = new_state();
        state.paddle.x = 700.0;
        let keys = KeyState {
            left: true,
            right: true,
        };
        advance_frame(&mut state, keys.steer());
        assert_eq!(state.paddle.x, 693.0);
    }

    #[test]
    fn test_paddle_stops_at_walls() {
        let mut state = new_state();
        state.paddle.x = 698.0;
        advance_frame(&mut state, Steer::Right);
        assert_eq!(state.paddle.x, 700.0);
        advance_frame(&mut state, Steer::Right);
        assert_eq!(state.paddle.x, 700.0);

        state.paddle.x = 3.0;
        advance_frame(&mut state, Steer::Left);
        assert_eq!(state.paddle.x, 0.0);
        advance_frame(&mut state, Steer::Left);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut state = new_state();
        // Just below brick (0, 0) at (30, 30, 75, 20), moving up
        state.ball.pos = Vec2::new(60.0, 53.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        advance_frame(&mut state, Steer::None);

        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel.y, 4.0);
        assert_eq!(state.bricks.status(0, 0), Some(BrickStatus::Destroyed));
        assert_eq!(
            state.events,
            vec![GameEvent::BrickDestroyed { column: 0, row: 0 }]
        );
    }

    #[test]
    fn test_destroyed_brick_is_not_hit_again() {
        let mut state = new_state();
        let idx = state.bricks.index(0, 0);
        state.bricks.destroy(idx);
        state.ball.pos = Vec2::new(60.0, 53.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        advance_frame(&mut state, Steer::None);

        assert_eq!(state.score, 0);
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut state = new_state();
        let keep = state.bricks.index(0, 0);
        for i in 0..state.total_bricks() {
            if i != keep {
                state.bricks.destroy(i);
            }
        }
        state.score = state.total_bricks() as u32 - 1;
        state.ball.pos = Vec2::new(60.0, 53.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let outcome = advance_frame(&mut state, Steer::None);

        assert_eq!(outcome, FrameOutcome::Won);
        assert_eq!(state.score, 63);
        assert_eq!(state.events.last(), Some(&GameEvent::Won));
    }

    #[test]
    fn test_win_checked_before_floor() {
        let mut state = new_state();
        state.score = state.total_bricks() as u32;
        state.ball.pos = Vec2::new(200.0, 589.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        let outcome = advance_frame(&mut state, Steer::None);

        assert_eq!(outcome, FrameOutcome::Won);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_last_life_loses_without_reset() {
        let mut state = new_state();
        state.lives = 1;
        state.ball.pos = Vec2::new(200.0, 589.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        let outcome = advance_frame(&mut state, Steer::None);

        assert_eq!(outcome, FrameOutcome::Lost);
        assert_eq!(state.lives, 0);
        assert_eq!(state.ball.pos, Vec2::new(204.0, 593.0));
        assert_eq!(
            state.events,
            vec![GameEvent::LifeLost { remaining: 0 }, GameEvent::Lost]
        );
    }

    #[test]
    fn test_life_lost_resets_ball_and_paddle() {
        let mut state = new_state();
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(200.0, 589.0);
        state.ball.vel = Vec2::new(4.0, 4.0);

        let outcome = advance_frame(&mut state, Steer::None);

        assert_eq!(outcome, FrameOutcome::Playing);
        assert_eq!(state.lives, 1);
        assert_eq!(state.ball, Ball::spawn(&state.settings));
        assert_eq!(state.paddle, Paddle::centered(&state.settings));
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut state = new_state();
        state.lives = 1;
        state.ball.pos = Vec2::new(200.0, 589.0);
        state.ball.vel = Vec2::new(4.0, 4.0);
        advance_frame(&mut state, Steer::None);

        let frame = state.frame;
        let pos = state.ball.pos;
        assert_eq!(advance_frame(&mut state, Steer::Right), FrameOutcome::Lost);
        assert_eq!(state.frame, frame);
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.lives, 0);
    }

    fn steer_strategy() -> impl Strategy<Value = Steer> {
        prop_oneof![
            Just(Steer::Left),
            Just(Steer::Right),
            Just(Steer::Both),
            Just(Steer::None)
        ]
    }

    proptest! {
        #[test]
        fn prop_frame_invariants(steers in prop::collection::vec(steer_strategy(), 1..1500)) {
            let mut state = new_state();
            let mut terminal_signals = 0;

            for steer in steers {
                let score = state.score;
                let lives = state.lives;
                let vel = state.ball.vel;
                let was_terminal = state.outcome.is_terminal();

                let outcome = advance_frame(&mut state, steer);

                let max_x = state.settings.canvas_width - state.paddle.width;
                prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= max_x);
                prop_assert!(state.score >= score);
                prop_assert!(state.lives <= lives);
                prop_assert!(state.score as usize <= state.total_bricks());

                let destroyed = state
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                    .count();
                if !was_terminal {
                    prop_assert_eq!(state.score - score, destroyed as u32);
                    if state.events.is_empty() {
                        prop_assert_eq!(state.ball.vel, vel);
                    }
                }

                if outcome.is_terminal() && !was_terminal {
                    terminal_signals += 1;
                }
            }

            prop_assert!(terminal_signals <= 1);
        }
    }
}
