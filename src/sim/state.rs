//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one `GameState` value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::{BrickLayout, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Laid out, waiting for the start trigger
    Ready,
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Won and Lost end the run; the loop halts until a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { column: usize, row: usize },
    PaddleBounce,
    LifeLost { remaining: u32 },
    Won,
    Lost,
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won | GameEvent::Lost)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position and velocity
    pub fn serve(settings: &Settings) -> Self {
        Self {
            pos: settings.ball_start(),
            vel: settings.serve_velocity(),
            radius: settings.ball_radius,
        }
    }

    /// Where the ball would be after integrating once
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle; only x moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered at the bottom edge
    pub fn centered(settings: &Settings) -> Self {
        Self {
            x: settings.paddle_start(),
            y: settings.paddle_y(),
            width: settings.paddle_width,
            height: settings.paddle_height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Place the paddle, clamped to [0, max_x]
    pub fn set_x(&mut self, x: f32, max_x: f32) {
        self.x = x.clamp(0.0, max_x);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A single brick; position is fixed at layout time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// Fixed grid of bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    /// Lay out every brick once
    pub fn new(layout: &BrickLayout) -> Self {
        let size = Vec2::new(layout.width, layout.height);
        let columns = (0..layout.columns)
            .map(|c| {
                (0..layout.rows)
                    .map(|r| Brick {
                        pos: layout.origin(c, r),
                        size,
                        status: BrickStatus::Active,
                    })
                    .collect()
            })
            .collect();
        Self { columns }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.columns.get(column)?.get(row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        self.columns.get_mut(column)?.get_mut(row)
    }

    /// All bricks with their (column, row), column-major then row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(c, col)| col.iter().enumerate().map(move |(r, b)| (c, r, b)))
    }

    /// Mutable variant of [`BrickGrid::iter`], same order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        self.columns
            .iter_mut()
            .enumerate()
            .flat_map(|(c, col)| col.iter_mut().enumerate().map(move |(r, b)| (c, r, b)))
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, _, b)| b.is_active()).count()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Fresh game: full grid, ball served, paddle centered, not yet started
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            lives: settings.starting_lives,
            time_ticks: 0,
            ball: Ball::serve(settings),
            paddle: Paddle::centered(settings),
            bricks: BrickGrid::new(&settings.bricks),
        }
    }

    /// Return ball and paddle to their starting positions after a miss
    pub fn reset_ball_and_paddle(&mut self, settings: &Settings) {
        self.ball = Ball::serve(settings);
        self.paddle = Paddle::centered(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let settings = Settings::default();
        let state = GameState::new(&settings);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.bricks.len(), 15);
        assert_eq!(state.bricks.active_count(), 15);
    }

    #[test]
    fn test_grid_is_column_major() {
        let grid = BrickGrid::new(&BrickLayout::default());
        let order: Vec<_> = grid.iter().map(|(c, r, _)| (c, r)).take(4).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(grid.get(2, 1).unwrap().pos, Vec2::new(200.0, 60.0));
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn test_paddle_set_x_clamps() {
        let settings = Settings::default();
        let mut paddle = Paddle::centered(&settings);
        paddle.set_x(-20.0, settings.paddle_max_x());
        assert_eq!(paddle.x, 0.0);
        paddle.set_x(1000.0, settings.paddle_max_x());
        assert_eq!(paddle.x, 405.0);
        assert_eq!(paddle.right(), 480.0);
    }
}
