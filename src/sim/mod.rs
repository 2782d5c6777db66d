//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (column-major brick grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{paddle_covers, point_in_rect};
pub use state::{Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
