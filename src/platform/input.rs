//! Input boundary
//!
//! Event handlers write here between frames; the frame loop reads a snapshot
//! at the start of each tick. Last write wins, nothing is queued.

use crate::sim::TickInput;

/// A horizontal direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value; older browsers report "Left"/"Right"
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Latest input intent
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    pointer_x: Option<f32>,
    /// Idle/demo mode - the autopilot steers
    pub idle_mode: bool,
}

impl InputState {
    /// Returns whether the key was one we track
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match Direction::from_key(key) {
            Some(Direction::Left) => self.left = pressed,
            Some(Direction::Right) => self.right = pressed,
            None => return false,
        }
        true
    }

    /// Record a pointer position, already relative to the canvas left edge
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        self.idle_mode
    }

    /// Current intent for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            pointer_x: self.pointer_x,
        }
    }

    /// Drop the pointer sample once a tick has consumed it
    pub fn clear_one_shot(&mut self) {
        self.pointer_x = None;
    }

    /// Release everything (used on restart)
    pub fn reset(&mut self) {
        let idle_mode = self.idle_mode;
        *self = Self {
            idle_mode,
            ..Default::default()
        };
    }
}
