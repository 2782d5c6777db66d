//! Per-frame simulation tick
//!
//! Advances the game by exactly one frame. Rendering happens before this runs,
//! so the scene on screen always shows the state the tick started from.

use super::collision::{
    ball_hits_brick, hits_ceiling, hits_floor, hits_side_wall, paddle_covers,
};
use super::state::{BrickStatus, GameEvent, GamePhase, GameState};
use crate::settings::Settings;

/// Paddle intent for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Raw pointer x in canvas coordinates (from mouse movement)
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one frame, returning what happened
///
/// Does nothing unless the game is `Playing`. A `Won` or `Lost` event is
/// always the last one returned, and the state is left in the matching
/// terminal phase.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Bricks: every overlapping brick is resolved, each flipping dy
    for (column, row, brick) in state.bricks.iter_mut() {
        if ball_hits_brick(&state.ball, brick) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.status = BrickStatus::Destroyed;
            state.score += 1;
            log::debug!("Brick ({}, {}) destroyed, score {}", column, row, state.score);
            events.push(GameEvent::BrickDestroyed { column, row });
        }
    }

    if state.score as usize >= settings.bricks.total() {
        log::info!("All {} bricks cleared", state.score);
        state.phase = GamePhase::Won;
        events.push(GameEvent::Won);
        return events;
    }

    if hits_side_wall(&state.ball, settings.canvas_width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if hits_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if hits_floor(&state.ball, settings.canvas_height) {
        if paddle_covers(&state.paddle, state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
            events.push(GameEvent::PaddleBounce);
        } else {
            state.lives = state.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost {
                remaining: state.lives,
            });

            if state.lives == 0 {
                log::info!("Out of lives, final score {}", state.score);
                state.phase = GamePhase::Lost;
                events.push(GameEvent::Lost);
                return events;
            }

            log::info!("Ball lost, {} lives left", state.lives);
            state.reset_ball_and_paddle(settings);
        }
    }

    move_paddle(state, input, settings);

    state.ball.pos += state.ball.vel;

    events
}

/// Apply paddle intent. An in-bounds pointer sample wins over the keys.
fn move_paddle(state: &mut GameState, input: &TickInput, settings: &Settings) {
    let max_x = settings.paddle_max_x();
    let paddle = &mut state.paddle;

    let pointer = input
        .pointer_x
        .filter(|&x| x > 0.0 && x < settings.canvas_width);

    if let Some(x) = pointer {
        paddle.set_x(x - paddle.width / 2.0, max_x);
    } else if input.right && paddle.x < max_x {
        paddle.set_x(paddle.x + settings.paddle_speed, max_x);
    } else if input.left && paddle.x > 0.0 {
        paddle.set_x(paddle.x - settings.paddle_speed, max_x);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;

    fn playing(settings: &Settings) -> GameState {
        let mut state = GameState::new(settings);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_tick_requires_playing() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        let before = state.ball.pos;

        assert!(tick(&mut state, &TickInput::default(), &settings).is_empty());
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_free_flight() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        // (100, 100) sits inside brick (0, 2); clear the grid so nothing is in the path
        for (_, _, brick) in state.bricks.iter_mut() {
            brick.status = BrickStatus::Destroyed;
        }
        state.ball.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert!(events.is_empty());
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.ball.pos, Vec2::new(102.0, 98.0));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_brick_hit() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        // Brick (1, 0) spans x 115..190, y 30..50
        state.ball.pos = Vec2::new(150.0, 40.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(events, vec![GameEvent::BrickDestroyed { column: 1, row: 0 }]);
        assert_eq!(state.bricks.get(1, 0).unwrap().status, BrickStatus::Destroyed);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.ball.pos, Vec2::new(152.0, 42.0));

        // A destroyed brick is not hit again
        let events = tick(&mut state, &TickInput::default(), &settings);
        assert!(events.is_empty());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_overlapping_bricks_each_flip() {
        let mut settings = Settings::default();
        settings.bricks.padding = -10.0;
        let mut state = playing(&settings);
        // With negative padding rows 0 and 1 overlap at y 40..50
        state.ball.pos = Vec2::new(50.0, 45.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(
            events,
            vec![
                GameEvent::BrickDestroyed { column: 0, row: 0 },
                GameEvent::BrickDestroyed { column: 0, row: 1 },
            ]
        );
        assert_eq!(state.score, 2);
        // Two flips cancel out
        assert_eq!(state.ball.vel.y, -2.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        for (c, r, brick) in state.bricks.iter_mut() {
            if (c, r) != (4, 2) {
                brick.status = BrickStatus::Destroyed;
            }
        }
        state.score = 14;
        // Brick (4, 2) spans x 370..445, y 90..110
        state.ball.pos = Vec2::new(400.0, 100.0);
        let before = state.ball.pos;

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(
            events,
            vec![GameEvent::BrickDestroyed { column: 4, row: 2 }, GameEvent::Won]
        );
        assert_eq!(state.score, 15);
        assert_eq!(state.phase, GamePhase::Won);
        // Halted before integration
        assert_eq!(state.ball.pos, before);

        // Fires exactly once
        assert!(tick(&mut state, &TickInput::default(), &settings).is_empty());
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_side_walls_reflect() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        state.ball.pos = Vec2::new(469.0, 200.0);
        state.ball.vel = Vec2::new(2.0, -2.0);
        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.ball.vel.x, -2.0);
        assert_eq!(state.ball.pos, Vec2::new(467.0, 198.0));

        state.ball.pos = Vec2::new(1.0, 200.0);
        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.ball.vel.x, 2.0);
        assert_eq!(state.ball.pos, Vec2::new(3.0, 198.0));
    }

    #[test]
    fn test_ceiling_reflects() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        // Column gap between bricks, above the grid
        state.ball.pos = Vec2::new(110.0, 11.0);
        state.ball.vel = Vec2::new(2.0, -2.0);
        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.ball.pos, Vec2::new(112.0, 13.0));
    }

    #[test]
    fn test_paddle_bounce() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        state.paddle.x = 100.0;
        state.ball.pos = Vec2::new(130.0, 309.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(events, vec![GameEvent::PaddleBounce]);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.ball.pos, Vec2::new(132.0, 307.0));
    }

    #[test]
    fn test_miss_with_last_life_loses() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        state.lives = 1;
        state.paddle.x = 300.0;
        state.ball.pos = Vec2::new(100.0, 309.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(
            events,
            vec![GameEvent::LifeLost { remaining: 0 }, GameEvent::Lost]
        );
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lost);

        assert!(tick(&mut state, &TickInput::default(), &settings).is_empty());
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_miss_resets_ball_and_paddle() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        state.lives = 2;
        state.paddle.x = 300.0;
        state.ball.pos = Vec2::new(100.0, 309.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);

        let events = tick(&mut state, &TickInput::default(), &settings);

        assert_eq!(events, vec![GameEvent::LifeLost { remaining: 1 }]);
        assert_eq!(state.lives, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.paddle.x, settings.paddle_start());
        assert_eq!(state.ball.vel, settings.serve_velocity());
        // The reset ball is integrated once in the same tick
        assert_eq!(state.ball.pos, settings.ball_start() + settings.serve_velocity());
    }

    #[test]
    fn test_keyboard_paddle() {
        let settings = Settings::default();
        let mut state = playing(&settings);
        let start = state.paddle.x;

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, &settings);
        assert_eq!(state.paddle.x, start + 7.0);

        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &both, &settings);
        assert_eq!(state.paddle.x, start + 14.0, "right wins when both are held");

        state.paddle.x = 401.0;
        tick(&mut state, &right, &settings);
        assert_eq!(state.paddle.x, 405.0);

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        state.paddle.x = 3.0;
        tick(&mut state, &left, &settings);
        assert_eq!(state.paddle.x, 0.0);
        tick(&mut state, &left, &settings);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_pointer_paddle() {
        let settings = Settings::default();
        let mut state = playing(&settings);

        let at = |x: f32| TickInput {
            left: true,
            pointer_x: Some(x),
            ..Default::default()
        };

        tick(&mut state, &at(200.0), &settings);
        assert_eq!(state.paddle.x, 162.5);

        tick(&mut state, &at(10.0), &settings);
        assert_eq!(state.paddle.x, 0.0);

        tick(&mut state, &at(479.0), &settings);
        assert_eq!(state.paddle.x, 405.0);

        // Out-of-canvas samples are ignored and the keys apply
        tick(&mut state, &at(600.0), &settings);
        assert_eq!(state.paddle.x, 398.0);
        tick(&mut state, &at(0.0), &settings);
        assert_eq!(state.paddle.x, 391.0);
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), proptest::option::of(-100.0f32..600.0)).prop_map(
            |(left, right, pointer_x)| TickInput {
                left,
                right,
                pointer_x,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(inputs in proptest::collection::vec(input_strategy(), 1..600)) {
            let settings = Settings::default();
            let mut state = playing(&settings);
            let mut terminal_events = 0;

            for input in &inputs {
                let score = state.score;
                let lives = state.lives;
                let events = tick(&mut state, input, &settings);

                terminal_events += events.iter().filter(|e| e.is_terminal()).count();
                let destroyed = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                    .count() as u32;
                let lost = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
                    .count() as u32;

                prop_assert_eq!(state.score, score + destroyed);
                prop_assert!(state.score as usize <= settings.bricks.total());
                prop_assert_eq!(state.lives, lives - lost);
                prop_assert!(lost <= 1);

                prop_assert!(state.paddle.x >= 0.0);
                prop_assert!(state.paddle.x <= settings.paddle_max_x());
                prop_assert!(state.ball.pos.x >= 0.0);
                prop_assert!(state.ball.pos.x <= settings.canvas_width);
                prop_assert!(state.ball.pos.y >= 0.0);
                prop_assert!(state.ball.pos.y <= settings.canvas_height);
            }

            prop_assert!(terminal_events <= 1);
            prop_assert_eq!(terminal_events == 1, state.phase.is_terminal());
        }
    }
}
