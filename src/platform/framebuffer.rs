//! In-memory 1-bit framebuffer
//!
//! Stands in for the SSD1306 panel: same clear/fill-rect/present surface, but
//! the pixels land in a bit-per-pixel buffer that tests can inspect and the
//! demo binary can dump as ASCII.

use crate::platform::Display;

/// Row-major, bit-packed monochrome framebuffer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    /// One bit per pixel, rows padded to whole bytes.
    bits: Vec<u8>,
    /// Frames presented so far.
    presented: u64,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "framebuffer must be non-empty");
        let stride = ((width + 7) / 8) as usize;
        Self {
            width,
            height,
            bits: vec![0; stride * height as usize],
            presented: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn stride(&self) -> usize {
        ((self.width + 7) / 8) as usize
    }

    /// Pixel state; out-of-bounds reads are dark.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.stride() + (x / 8) as usize;
        self.bits[idx] & (1 << (x % 8)) != 0
    }

    fn set(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let stride = self.stride();
        let idx = y as usize * stride + (x / 8) as usize;
        if on {
            self.bits[idx] |= 1 << (x % 8);
        } else {
            self.bits[idx] &= !(1 << (x % 8));
        }
    }

    /// Count of lit pixels, for tests.
    pub fn lit(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render the buffer as one string per row, `#` for lit, `.` for dark.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl Display for FrameBuffer {
    fn clear(&mut self) {
        self.bits.fill(0);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py, on);
            }
        }
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_sets_exactly_covered_pixels() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.fill_rect(2, 1, 3, 2, true);
        assert_eq!(fb.lit(), 6);
        assert!(fb.get(2, 1));
        assert!(fb.get(4, 2));
        assert!(!fb.get(5, 2));
        assert!(!fb.get(2, 3));
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.fill_rect(-2, -2, 5, 5, true);
        // Only the 3x3 corner that lands on the panel is lit
        assert_eq!(fb.lit(), 9);
        fb.fill_rect(14, 6, 10, 10, true);
        assert_eq!(fb.lit(), 9 + 4);
    }

    #[test]
    fn test_clear_resets_all_pixels() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.fill_rect(0, 0, 16, 8, true);
        assert_eq!(fb.lit(), 16 * 8);
        fb.clear();
        assert_eq!(fb.lit(), 0);
    }

    #[test]
    fn test_fill_rect_can_unset() {
        let mut fb = FrameBuffer::new(16, 8);
        fb.fill_rect(0, 0, 8, 8, true);
        fb.fill_rect(2, 2, 2, 2, false);
        assert_eq!(fb.lit(), 64 - 4);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = FrameBuffer::new(8, 8);
        assert_eq!(fb.presented(), 0);
        fb.present();
        fb.present();
        assert_eq!(fb.presented(), 2);
    }

    #[test]
    fn test_out_of_bounds_reads_are_dark() {
        let fb = FrameBuffer::new(8, 8);
        assert!(!fb.get(-1, 0));
        assert!(!fb.get(0, 100));
    }

    #[test]
    fn test_non_byte_aligned_width_pads_rows() {
        // 10-wide rows occupy two bytes each; pixels past x=7 land in the
        // second byte and rows stay independent.
        let mut fb = FrameBuffer::new(10, 3);
        fb.fill_rect(8, 1, 2, 1, true);
        assert_eq!(fb.lit(), 2);
        assert!(fb.get(8, 1));
        assert!(fb.get(9, 1));
        assert!(!fb.get(8, 0));
        assert!(!fb.get(8, 2));
    }

    #[test]
    fn test_ascii_dump_shape() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.fill_rect(0, 0, 1, 1, true);
        assert_eq!(fb.to_ascii(), "#...\n....\n");
    }
}
