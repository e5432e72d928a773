//! Pico Pong entry point
//!
//! Headless demo: the frame loop runs against the in-memory framebuffer with
//! an autopilot on the analog input, optionally dumping each frame to the
//! terminal as ASCII. The loop is unconditionally infinite and ends only with
//! the process.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use pico_pong::consts::*;
use pico_pong::platform::{FrameBuffer, InputSource, SleepPacer};
use pico_pong::{Game, Settings, remap};

/// Analog input fed from outside the loop, standing in for the potentiometer.
struct SharedLevel(Rc<Cell<f32>>);

impl InputSource for SharedLevel {
    fn read_normalized(&mut self) -> f32 {
        self.0.get()
    }
}

/// Reading that would center the left paddle on the given ball row. The demo's
/// stand-in for a human turning the knob.
fn track_ball(ball_y: i32, settings: &Settings) -> f32 {
    let travel = (SCREEN_HEIGHT - PADDLE_HEIGHT) as f32;
    let target = (ball_y - (PADDLE_HEIGHT - BALL_HEIGHT) / 2) as f32;
    remap(
        target.clamp(0.0, travel),
        0.0,
        travel,
        settings.pot_min,
        settings.pot_max,
    )
}

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("pico-pong.json"));
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting at {} fps, seed {seed}",
        settings.frame_rate
    );

    let level = Rc::new(Cell::new(0.5));
    let mut game = Game::new(
        seed,
        &settings,
        FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        SharedLevel(level.clone()),
        SleepPacer::new(settings.frame_rate),
    );

    loop {
        game.run_frames(1);
        if settings.ascii_render {
            let score = game.state().score;
            // Home the cursor and redraw in place
            println!(
                "\x1B[H{}  {:>3} : {:<3}",
                game.display().to_ascii(),
                score.left,
                score.right
            );
        }
        level.set(track_ball(game.state().ball.pos.y, &settings));
    }
}
