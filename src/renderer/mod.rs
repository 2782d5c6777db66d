//! Rendering module
//!
//! The scene is issued as a handful of 2D draw calls against a [`Surface`].
//! On the web that is a Canvas 2D context; headless runs and tests record the
//! calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::consts::{HUD_BASELINE, LIVES_INSET, SCORE_POS};
use crate::settings::Settings;
use crate::sim::GameState;

/// A 2D drawing target of fixed size
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase the whole frame
    fn clear_frame(&mut self);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    /// Filled circle centered at (x, y)
    fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw one full frame: bricks, ball, paddle, then the HUD
pub fn render_scene<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let theme = &settings.theme;

    surface.clear_frame();

    for (_, _, brick) in state.bricks.iter().filter(|(_, _, b)| b.is_active()) {
        surface.draw_rect(brick.pos.x, brick.pos.y, brick.size.x, brick.size.y, &theme.color);
    }

    let ball = &state.ball;
    surface.draw_circle(ball.pos.x, ball.pos.y, ball.radius, &theme.color);

    let paddle = &state.paddle;
    surface.draw_rect(paddle.x, paddle.y, paddle.width, paddle.height, &theme.color);

    surface.draw_text(
        &format!("Score: {}", state.score),
        SCORE_POS.0,
        SCORE_POS.1,
        &theme.font,
        &theme.color,
    );
    surface.draw_text(
        &format!("Lives: {}", state.lives),
        surface.width() - LIVES_INSET,
        HUD_BASELINE,
        &theme.font,
        &theme.color,
    );
}
