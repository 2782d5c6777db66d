//! Brick Breaker - classic Breakout on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, score/lives)
//! - `renderer`: Draw-command surface and scene drawing
//! - `platform`: Input boundary (keys/pointer to paddle intent)
//! - `game`: Frame driver that owns the state and runs the loop
//! - `settings`: Data-driven game configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::{BrickLayout, Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Initial velocity, in pixels per frame
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Keyboard paddle speed, in pixels per frame
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    pub const STARTING_LIVES: u32 = 3;

    /// HUD
    pub const HUD_COLOR: &str = "#0095DD";
    pub const HUD_FONT: &str = "16px Arial";
    pub const SCORE_POS: (f32, f32) = (8.0, 20.0);
    /// Lives label is anchored this far from the right edge
    pub const LIVES_INSET: f32 = 65.0;
    pub const HUD_BASELINE: f32 = 20.0;
}
