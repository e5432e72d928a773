//! Pico Pong - a two-paddle ball game for a small monochrome display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision resolution, score)
//! - `platform`: Display/input/pacing collaborator traits + framebuffer
//! - `game`: Fixed-cadence frame loop tying sim and platform together
//! - `settings`: Runtime configuration (frame rate, input calibration, seed)

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display dimensions in pixels (SSD1306-class OLED)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Target frame rate (frames per second)
    pub const FRAME_RATE: u32 = 60;

    /// Paddle dimensions, shared by both paddles
    pub const PADDLE_WIDTH: i32 = 5;
    pub const PADDLE_HEIGHT: i32 = 25;

    /// Ball dimensions
    pub const BALL_WIDTH: i32 = 5;
    pub const BALL_HEIGHT: i32 = 5;

    /// Horizontal speed the ball serves with (pixels per frame)
    pub const BALL_SERVE_SPEED_X: i32 = 2;
    /// Vertical serve speed is drawn from [-SERVE_SPEED_Y_MAX, SERVE_SPEED_Y_MAX] \ {0}
    pub const SERVE_SPEED_Y_MAX: i32 = 3;

    /// Calibrated range actually produced by the potentiometer reader
    pub const POT_MIN: f32 = 0.002;
    pub const POT_MAX: f32 = 0.99;

    /// Upper bound on walk-back correction steps. Per-frame displacement is
    /// at most SERVE_SPEED_Y_MAX pixels, so exceeding this is a logic error.
    pub const MAX_WALK_BACK_STEPS: u32 = 8;
}

/// Linear rescale of `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping is applied; `in_max - in_min` must be non-zero (caller
/// contract).
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}
