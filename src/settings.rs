//! Game settings
//!
//! Every geometry and tuning value the simulation reads. Loaded once at
//! startup from an optional JSON document; missing fields keep defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl BrickLayout {
    /// Number of bricks in the grid (the winning score)
    pub fn total(&self) -> usize {
        self.rows * self.columns
    }

    /// Top-left corner of the brick at (column, row)
    pub fn origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }
}

/// Colors and font used for every draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// CSS color string
    pub color: String,
    /// CSS font string for the HUD
    pub font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: HUD_COLOR.to_string(),
            font: HUD_FONT.to_string(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity on serve and after every lost life
    pub ball_start_velocity: (f32, f32),

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Keyboard movement per frame
    pub paddle_speed: f32,

    // === Rules ===
    pub bricks: BrickLayout,
    pub starting_lives: u32,

    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_velocity: (BALL_START_DX, BALL_START_DY),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            bricks: BrickLayout::default(),
            starting_lives: STARTING_LIVES,

            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ball spawn point: horizontally centered, just above the paddle
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height - BALL_START_LIFT)
    }

    /// Serve velocity as a vector
    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_velocity.0, self.ball_start_velocity.1)
    }

    /// Centered paddle x
    pub fn paddle_start(&self) -> f32 {
        (self.canvas_width - self.paddle_width) / 2.0
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        (self.canvas_width - self.paddle_width).max(0.0)
    }

    /// Paddle top edge
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_height
    }

    /// DOM element holding an optional JSON settings document
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "breakout-settings";

    /// Environment variable naming an optional JSON settings file
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "BREAKOUT_SETTINGS";

    /// Parse `json`, falling back to defaults when it is malformed
    fn parse_or_default(json: &str, source: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings in {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::parse_or_default(&json, Self::ELEMENT_ID),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `BREAKOUT_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse_or_default(&json, &path),
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
