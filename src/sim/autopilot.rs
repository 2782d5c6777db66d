//! Idle/demo mode - the computer plays the game
//!
//! Produces the same `TickInput` a player would, so the simulation cannot
//! tell the difference.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Steer the paddle under the ball's predicted next position
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::default();
    }

    // Lead the target by one step
    let ball_future = state.ball.next_pos();

    TickInput {
        pointer_x: Some(ball_future.x),
        ..Default::default()
    }
}
