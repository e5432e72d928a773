//! The frame loop
//!
//! Thin orchestration only: read input, aim paddles, draw, run the physics,
//! present, wait. Single-threaded and cooperative; the only blocking point is
//! the pacer's fixed-duration wait. All mutable state (ball, paddles, score)
//! is owned here and threaded through the pure sim functions.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::platform::{Display, FramePacer, InputSource};
use crate::settings::Settings;
use crate::sim::{self, GameState, Side};

pub struct Game<D, I, P> {
    state: GameState,
    rng: Pcg32,
    display: D,
    input: I,
    pacer: P,
    /// Calibrated range of the analog input, from settings
    pot_min: f32,
    pot_max: f32,
}

impl<D: Display, I: InputSource, P: FramePacer> Game<D, I, P> {
    pub fn new(seed: u64, settings: &Settings, display: D, input: I, pacer: P) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            display,
            input,
            pacer,
            pot_min: settings.pot_min,
            pot_max: settings.pot_max,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run one frame: clear, input, paddles, draw, physics, ball, present.
    /// Returns the scoring side if the ball left the court this frame.
    pub fn frame(&mut self) -> Option<Side> {
        self.display.clear();

        let pot = self.input.read_normalized();
        sim::tick::aim_paddles(&mut self.state, pot, self.pot_min, self.pot_max);

        let left = self.state.left_paddle.pos;
        let right = self.state.right_paddle.pos;
        self.display
            .fill_rect(left.x, left.y, PADDLE_WIDTH, PADDLE_HEIGHT, true);
        self.display
            .fill_rect(right.x, right.y, PADDLE_WIDTH, PADDLE_HEIGHT, true);

        let point = sim::tick::step(&mut self.state, &mut self.rng);

        // The ball is drawn at its post-update position
        let ball = self.state.ball.pos;
        self.display
            .fill_rect(ball.x, ball.y, BALL_WIDTH, BALL_HEIGHT, true);

        self.display.present();
        point
    }

    /// Run a bounded number of frames, pacing between them. For demos/tests.
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.frame();
            self.pacer.wait();
        }
    }

    /// Run forever. Terminates only with the process.
    pub fn run(mut self) -> ! {
        loop {
            self.frame();
            self.pacer.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameBuffer;

    /// Pacer that does not sleep, so tests run at full speed.
    struct NoPacer;
    impl FramePacer for NoPacer {
        fn wait(&mut self) {}
    }

    /// Fixed analog reading.
    struct ConstInput(f32);
    impl InputSource for ConstInput {
        fn read_normalized(&mut self) -> f32 {
            self.0
        }
    }

    fn fb() -> FrameBuffer {
        FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[test]
    fn test_frame_draws_paddles_and_ball() {
        let mut game = Game::new(1, &Settings::default(), fb(), ConstInput(POT_MIN), NoPacer);
        game.frame();

        let fb = game.display();
        // Left paddle at the top-left corner (POT_MIN maps to y = 0)
        assert!(fb.get(0, 0));
        assert!(fb.get(PADDLE_WIDTH - 1, PADDLE_HEIGHT - 1));
        // Right paddle column
        assert!(fb.get(SCREEN_WIDTH - 1, game.state().right_paddle.pos.y));
        // Ball at its post-update position
        let ball = game.state().ball.pos;
        assert!(fb.get(ball.x, ball.y));
        assert_eq!(fb.presented(), 1);
    }

    #[test]
    fn test_frame_clears_previous_contents() {
        let mut game = Game::new(2, &Settings::default(), fb(), ConstInput(0.5), NoPacer);
        for _ in 0..10 {
            game.frame();
        }
        // Two paddles plus the ball, redrawn from scratch; nothing accumulates
        let lit = game.display().lit();
        assert!(lit > 0);
        assert!(
            lit <= (2 * PADDLE_WIDTH * PADDLE_HEIGHT + BALL_WIDTH * BALL_HEIGHT) as usize
        );
    }

    #[test]
    fn test_long_run_keeps_state_well_formed() {
        let mut game = Game::new(3, &Settings::default(), fb(), ConstInput(0.5), NoPacer);
        let mut last_score = game.state().score;
        for _ in 0..2000 {
            game.frame();
            let s = game.state();
            // Ball may overshoot a wall by at most one frame of velocity
            assert!(s.ball.pos.y >= -SERVE_SPEED_Y_MAX);
            assert!(s.ball.pos.y <= SCREEN_HEIGHT - BALL_HEIGHT + SERVE_SPEED_Y_MAX);
            // Score is monotone and moves by at most one per frame
            let d_left = s.score.left - last_score.left;
            let d_right = s.score.right - last_score.right;
            assert!(d_left <= 1 && d_right <= 1);
            assert!(d_left + d_right <= 1);
            last_score = s.score;
        }
        assert_eq!(game.display().presented(), 2000);
    }

    #[test]
    fn test_settings_pot_calibration_is_honored() {
        // A pot calibrated to [0.5, 0.9] parks the paddle at the top when it
        // reads its configured floor, not at the default range's midpoint.
        let settings = Settings {
            pot_min: 0.5,
            pot_max: 0.9,
            ..Settings::default()
        };
        let mut game = Game::new(7, &settings, fb(), ConstInput(0.5), NoPacer);
        game.frame();
        assert_eq!(game.state().left_paddle.pos.y, 0);

        let mut game = Game::new(7, &settings, fb(), ConstInput(0.9), NoPacer);
        game.frame();
        assert_eq!(
            game.state().left_paddle.pos.y,
            SCREEN_HEIGHT - PADDLE_HEIGHT
        );
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Game::new(99, &Settings::default(), fb(), ConstInput(0.4), NoPacer);
        let mut b = Game::new(99, &Settings::default(), fb(), ConstInput(0.4), NoPacer);
        for _ in 0..500 {
            a.frame();
            b.frame();
        }
        assert_eq!(a.state().ball, b.state().ball);
        assert_eq!(a.state().score, b.state().score);
    }
}
