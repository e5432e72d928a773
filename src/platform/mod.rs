//! Platform abstraction layer
//!
//! The simulation treats everything hardware-shaped as an opaque collaborator
//! behind a trait: the monochrome display, the analog paddle input, and the
//! fixed-rate frame pacing. On real hardware these are an SSD1306 OLED over
//! I2C, a potentiometer on an ADC pin, and a busy sleep; the stock
//! implementations here are an in-memory framebuffer and `std::thread::sleep`.

pub mod framebuffer;

use std::thread;
use std::time::Duration;

pub use framebuffer::FrameBuffer;

/// Monochrome display sink. Calls arrive in a fixed order each frame:
/// `clear`, paddle/ball `fill_rect`s, `present`.
pub trait Display {
    /// Blank the whole surface.
    fn clear(&mut self);
    /// Fill a rectangle; `on` lights the pixels. Out-of-bounds parts are
    /// clipped, not an error.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool);
    /// Push the finished frame to the panel.
    fn present(&mut self);
}

/// Analog paddle input.
pub trait InputSource {
    /// Current reading, normalized. A calibrated source stays within
    /// [`crate::consts::POT_MIN`, `crate::consts::POT_MAX`]; readings outside
    /// are tolerated and clamped downstream.
    fn read_normalized(&mut self) -> f32;
}

/// Fixed-rate frame pacing.
pub trait FramePacer {
    /// Block until the next frame is due.
    fn wait(&mut self);
}

/// Pacer that sleeps a fixed `1 / frame_rate` interval, the way a
/// microcontroller loop would. No drift compensation; the sim is
/// frame-counted, not wall-clock-counted.
#[derive(Debug)]
pub struct SleepPacer {
    interval: Duration,
}

impl SleepPacer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
        }
    }
}

impl FramePacer for SleepPacer {
    fn wait(&mut self) {
        thread::sleep(self.interval);
    }
}
