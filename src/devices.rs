use crate::{
    config::SpriteEdge,
    definitions::{display, keyboard},
};

/// Represents the internal keyboard.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; keyboard::SIZE],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    pub(crate) fn reset(&mut self) {
        self.keys = [false; keyboard::SIZE];
    }

    /// Will set the value of the given key, keys outside of `0-F` are ignored.
    pub fn set_key(&mut self, key: usize, pressed: bool) {
        if let Some(entry) = self.keys.get_mut(key) {
            *entry = pressed;
        } else {
            log::warn!("ignoring the unknown key {:#X}", key);
        }
    }

    /// Will replace the state of all the keys at once.
    pub fn set_keys(&mut self, keys: [bool; keyboard::SIZE]) {
        self.keys = keys;
    }

    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// The lowest key currently held down.
    pub fn first_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|pressed| *pressed)
    }

    pub fn keys(&self) -> &[bool] {
        &self.keys
    }
}

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`, every pixel is stored as a single byte that is either `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [u8; display::RESOLUTION],
    redraw: bool,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            pixels: [0; display::RESOLUTION],
            redraw: false,
        }
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer::default()
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [0; display::RESOLUTION];
        self.redraw = true;
    }

    /// Will xor the sprite rows onto the buffer with the top left corner at `(x, y)`.
    ///
    /// Each row is 8 pixels wide, most significant bit first. Returns `true` if any
    /// pixel was turned from set to unset.
    pub fn draw(&mut self, x: usize, y: usize, rows: &[u8], edge: SpriteEdge) -> bool {
        const BYTE: usize = 8;

        let x = x % display::WIDTH;
        let y = y % display::HEIGHT;
        let mut collision = false;

        for (i, row) in rows.iter().enumerate() {
            let py = y + i;
            if edge == SpriteEdge::Clip && py >= display::HEIGHT {
                break;
            }
            let py = py % display::HEIGHT;

            for j in 0..BYTE {
                let mask: u8 = 0x80 >> j;
                if *row & mask == 0 {
                    continue;
                }

                let px = x + j;
                if edge == SpriteEdge::Clip && px >= display::WIDTH {
                    break;
                }
                let px = px % display::WIDTH;

                let pixel = &mut self.pixels[py * display::WIDTH + px];
                if *pixel == 1 {
                    collision = true;
                }
                *pixel ^= 1;
            }
        }

        self.redraw = true;
        collision
    }

    /// The raw pixel buffer, row after row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// A single row of the display, `y` wraps like in [`pixel`](Self::pixel).
    pub fn row(&self, y: usize) -> &[u8] {
        let y = y % display::HEIGHT;
        &self.pixels[y * display::WIDTH..(y + 1) * display::WIDTH]
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[(y % display::HEIGHT) * display::WIDTH + (x % display::WIDTH)]
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw
    }

    /// Will be called by the host after it consumed a frame.
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [u8; 2] = [0b1100_0000, 0b1100_0000];

    #[test]
    fn test_keypad() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.first_pressed(), None);

        keypad.set_key(0xB, true);
        keypad.set_key(0x3, true);
        assert!(keypad.is_pressed(0xB));
        assert_eq!(keypad.first_pressed(), Some(0x3));

        keypad.set_key(0x3, false);
        assert_eq!(keypad.first_pressed(), Some(0xB));

        // out of range keys are ignored
        keypad.set_key(0x10, true);
        assert!(!keypad.is_pressed(0x10));

        keypad.reset();
        assert_eq!(&[false; keyboard::SIZE], keypad.keys());
    }

    #[test]
    fn test_draw_and_collision() {
        let mut fb = FrameBuffer::new();

        assert!(!fb.draw(3, 4, &SQUARE, SpriteEdge::Wrap));
        assert!(fb.redraw_requested());
        assert_eq!(fb.pixel(3, 4), 1);
        assert_eq!(fb.pixel(4, 5), 1);
        assert_eq!(fb.pixel(5, 4), 0);

        fb.clear_redraw();
        assert!(fb.draw(3, 4, &SQUARE, SpriteEdge::Wrap));
        assert!(fb.redraw_requested());
        assert!(fb.pixels().iter().all(|p| *p == 0));
    }

    #[test]
    fn test_draw_wraps_around() {
        let mut fb = FrameBuffer::new();
        fb.draw(display::WIDTH - 1, display::HEIGHT - 1, &SQUARE, SpriteEdge::Wrap);

        assert_eq!(fb.pixel(display::WIDTH - 1, display::HEIGHT - 1), 1);
        assert_eq!(fb.pixel(0, display::HEIGHT - 1), 1);
        assert_eq!(fb.pixel(display::WIDTH - 1, 0), 1);
        assert_eq!(fb.pixel(0, 0), 1);
        assert_eq!(fb.pixels().iter().filter(|p| **p == 1).count(), 4);
    }

    #[test]
    fn test_draw_clips() {
        let mut fb = FrameBuffer::new();
        fb.draw(display::WIDTH - 1, display::HEIGHT - 1, &SQUARE, SpriteEdge::Clip);

        assert_eq!(fb.pixel(display::WIDTH - 1, display::HEIGHT - 1), 1);
        assert_eq!(fb.pixels().iter().filter(|p| **p == 1).count(), 1);
    }

    #[test]
    fn test_start_coordinates_wrap() {
        let mut fb = FrameBuffer::new();
        fb.draw(display::WIDTH + 2, display::HEIGHT + 1, &[0x80], SpriteEdge::Clip);
        assert_eq!(fb.row(1)[2], 1);
    }

    #[test]
    fn test_row_wraps() {
        let mut fb = FrameBuffer::new();
        fb.draw(5, 2, &[0x80], SpriteEdge::Wrap);

        assert_eq!(fb.row(2), fb.row(2 + display::HEIGHT));
        assert_eq!(1, fb.row(2 + 3 * display::HEIGHT)[5]);
        assert_eq!(display::WIDTH, fb.row(usize::MAX).len());
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.draw(0, 0, &SQUARE, SpriteEdge::Wrap);
        fb.clear_redraw();

        fb.clear();
        assert!(fb.redraw_requested());
        assert!(fb.pixels().iter().all(|p| *p == 0));
    }
}
