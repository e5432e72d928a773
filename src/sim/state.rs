//! Game state and core simulation types
//!
//! Named record types for what the display-loop threads forward each frame:
//! ball, paddles, score. Everything is plain data; the transition rules live
//! in `tick`.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geometry::Rect;

/// Which player a point is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// The ball: position in display pixels (top-left corner) and velocity in
/// pixels per frame. Dimensions are fixed (`BALL_WIDTH` x `BALL_HEIGHT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    /// Fresh ball after a point: centered, serving horizontally at
    /// `BALL_SERVE_SPEED_X`, vertical speed drawn from
    /// `[-SERVE_SPEED_Y_MAX, SERVE_SPEED_Y_MAX]` re-sampled until non-zero.
    pub fn serve(rng: &mut impl Rng) -> Self {
        let mut vy = 0;
        while vy == 0 {
            vy = rng.random_range(-SERVE_SPEED_Y_MAX..=SERVE_SPEED_Y_MAX);
        }
        Self {
            pos: IVec2::new(
                (SCREEN_WIDTH - BALL_WIDTH) / 2,
                (SCREEN_HEIGHT - BALL_HEIGHT) / 2,
            ),
            vel: IVec2::new(BALL_SERVE_SPEED_X, vy),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_WIDTH, BALL_HEIGHT)
    }
}

/// A paddle. `x` is fixed per side; `y` is re-derived every frame (left from
/// the analog input, right by mirroring the ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
}

impl Paddle {
    /// Left paddle, flush against the left screen edge.
    pub fn left(y: i32) -> Self {
        Self { pos: IVec2::new(0, y) }
    }

    /// Right paddle, flush against the right screen edge.
    pub fn right(y: i32) -> Self {
        Self {
            pos: IVec2::new(SCREEN_WIDTH - PADDLE_WIDTH, y),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// Running score. Monotone; never reset for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete game state, owned by the frame loop and threaded through each
/// update. No hidden globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let ball = Ball::serve(rng);
        Self {
            ball,
            left_paddle: Paddle::left(0),
            right_paddle: Paddle::right(ball.pos.y),
            score: Score::default(),
        }
    }
}
