//! Collision predicates
//!
//! Everything is axis-aligned and tested against the ball *center*; the
//! radius only matters for the canvas edges. There is no swept test, so a
//! fast ball can step over a brick entirely.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Strict containment: a point on the edge is outside
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}

/// Ball center lies inside an active brick
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    brick.is_active() && point_in_rect(ball.pos, brick.pos, brick.size)
}

/// Next step would leave through the left or right edge
pub fn hits_side_wall(ball: &Ball, canvas_width: f32) -> bool {
    let next_x = ball.next_pos().x;
    next_x > canvas_width - ball.radius || next_x < 0.0
}

/// Next step would pass the top edge
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.next_pos().y < ball.radius
}

/// Next step would pass the bottom edge
pub fn hits_floor(ball: &Ball, canvas_height: f32) -> bool {
    ball.next_pos().y > canvas_height - ball.radius
}

/// Ball x strictly within the paddle's span
pub fn paddle_covers(paddle: &Paddle, x: f32) -> bool {
    x > paddle.x && x < paddle.right()
}
