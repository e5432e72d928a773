//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one update per frame)
//! - Seeded RNG only, passed in explicitly
//! - No rendering or platform dependencies

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::Rect;
pub use state::{Ball, GameState, Paddle, Score, Side};
pub use tick::{TickInput, advance, aim_paddles, step, tick};
