//! Per-frame physics update
//!
//! The collision-resolution core. `advance` is a total function from one ball
//! state to the next: paddle contact is checked first (left paddle, then
//! right), then scoring exits past the side edges, then top/bottom wall
//! bounces, then plain linear motion.
//!
//! Paddle contact uses walk-back resolution instead of analytic
//! time-of-impact: the ball is stepped one pixel at a time along its own
//! motion until one more step would touch the paddle, then the velocity
//! component is negated. This is only correct because velocities are small
//! integers (at most 3 px/frame), so the walk is a handful of iterations and
//! cannot visibly tunnel.

use glam::IVec2;
use rand::Rng;

use crate::consts::*;
use crate::remap;
use crate::sim::geometry::Rect;
use crate::sim::state::{Ball, GameState, Paddle, Side};

/// Input sampled for a single frame: the reading plus the calibrated range
/// it is interpreted against.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Normalized potentiometer reading.
    pub pot: f32,
    /// Lowest reading the input actually produces.
    pub pot_min: f32,
    /// Highest reading the input actually produces.
    pub pot_max: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pot: 0.0,
            pot_min: POT_MIN,
            pot_max: POT_MAX,
        }
    }
}

fn ball_bounds(pos: IVec2) -> Rect {
    Rect::new(pos.x, pos.y, BALL_WIDTH, BALL_HEIGHT)
}

/// Advance the ball by one frame against the given paddles (left first).
///
/// Returns the next ball state and, if the ball left the court past a side
/// edge, the side credited with the point. A scoring exit replaces the ball
/// wholesale via [`Ball::serve`]; that is the only use of the RNG.
pub fn advance(ball: Ball, paddles: &[Paddle], rng: &mut impl Rng) -> (Ball, Option<Side>) {
    let Ball { mut pos, mut vel } = ball;

    // A: paddle collisions. At most one paddle interaction per frame; the
    // velocity component is inverted but the position is not advanced further.
    for paddle in paddles {
        let target = paddle.bounds();
        let mut hit = false;

        if vel.y != 0 && ball_bounds(pos).intersects(&target, 0, vel.y) {
            let step = vel.y.signum();
            let mut steps = 0;
            while !ball_bounds(pos).intersects(&target, 0, step) {
                pos.y += step;
                steps += 1;
                assert!(
                    steps <= MAX_WALK_BACK_STEPS,
                    "vertical walk-back did not converge: ball {pos:?} vel {vel:?} paddle {target:?}"
                );
            }
            vel.y = -vel.y;
            hit = true;
        }

        if !hit && vel.x != 0 && ball_bounds(pos).intersects(&target, vel.x, 0) {
            let step = vel.x.signum();
            let mut steps = 0;
            while !ball_bounds(pos).intersects(&target, step, 0) {
                pos.x += step;
                steps += 1;
                assert!(
                    steps <= MAX_WALK_BACK_STEPS,
                    "horizontal walk-back did not converge: ball {pos:?} vel {vel:?} paddle {target:?}"
                );
            }
            vel.x = -vel.x;
            hit = true;
        }

        if hit {
            return (Ball { pos, vel }, None);
        }
    }

    // B: side exits. The point goes to the side the ball reached, and the
    // ball is replaced wholesale.
    if pos.x < 0 {
        return (Ball::serve(rng), Some(Side::Right));
    }
    if pos.x >= SCREEN_WIDTH - BALL_WIDTH {
        return (Ball::serve(rng), Some(Side::Left));
    }

    // C: top/bottom walls clamp and bounce. A position driven past the wall
    // by last frame's advance is corrected here before it moves again.
    if pos.y < 0 {
        return (
            Ball {
                pos: IVec2::new(pos.x, 0),
                vel: IVec2::new(vel.x, -vel.y),
            },
            None,
        );
    }
    if pos.y > SCREEN_HEIGHT - BALL_HEIGHT {
        return (
            Ball {
                pos: IVec2::new(pos.x, SCREEN_HEIGHT - BALL_HEIGHT),
                vel: IVec2::new(vel.x, -vel.y),
            },
            None,
        );
    }

    // D: free flight
    (Ball { pos: pos + vel, vel }, None)
}

/// Re-derive both paddle positions for this frame: the left paddle from the
/// analog reading mapped across its calibrated `[pot_min, pot_max]` range,
/// the right paddle by mirroring the ball's `y` (a deliberately perfect
/// opponent).
pub fn aim_paddles(state: &mut GameState, pot: f32, pot_min: f32, pot_max: f32) {
    let travel = (SCREEN_HEIGHT - PADDLE_HEIGHT) as f32;
    let y = remap(pot, pot_min, pot_max, 0.0, travel).clamp(0.0, travel) as i32;
    state.left_paddle = Paddle::left(y);
    state.right_paddle = Paddle::right(state.ball.pos.y);
}

/// Run the physics for one frame and apply any score change.
pub fn step(state: &mut GameState, rng: &mut impl Rng) -> Option<Side> {
    let paddles = [state.left_paddle, state.right_paddle];
    let (ball, point) = advance(state.ball, &paddles, rng);
    state.ball = ball;
    if let Some(side) = point {
        state.score.award(side);
        log::info!(
            "point to {side:?}, score {}:{}",
            state.score.left,
            state.score.right
        );
    }
    point
}

/// One full simulation update: paddle aiming followed by physics.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) -> Option<Side> {
    aim_paddles(state, input.pot, input.pot_min, input.pot_max);
    step(state, rng)
}
