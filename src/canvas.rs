//! Drawable surface and the pixel buffer implementing it.

use line_drawing::Bresenham;
use rgb::RGB8;

/// Drawable rectangle region the game renders on.
///
/// Every operation is assumed to always succeed, anything outside of the surface is clipped.
pub trait Surface {
    /// Set the active color for all drawing operations.
    fn set_color(&mut self, color: RGB8);

    /// Fill the whole surface with the active color.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle in pixels with the active color.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Set a single pixel to the active color.
    #[inline]
    fn draw_point(&mut self, x: i32, y: i32) {
        self.fill_rect(x, y, 1, 1);
    }

    /// Draw the one pixel wide outline of an axis-aligned rectangle with the active color.
    ///
    /// Nothing is drawn when the width or height isn't positive.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }

        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);

        // Horizontal edges
        self.fill_rect(x, y, width, 1);
        self.fill_rect(x, bottom, width, 1);

        // Vertical edges
        self.fill_rect(x, y, 1, height);
        self.fill_rect(right, y, 1, height);
    }

    /// Draw a line with the active color, both end points included.
    ///
    /// Uses Bresenham's line algorithm.
    fn draw_line(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32) {
        for (x, y) in Bresenham::new((start_x, start_y), (end_x, end_y)) {
            self.draw_point(x, y);
        }
    }

    /// Show the composed frame.
    fn present(&mut self);
}

/// Pack a color into a pixel, bytes in memory are in `RGBA` order.
#[inline]
#[must_use]
pub const fn pack(color: RGB8) -> u32 {
    u32::from_le_bytes([color.r, color.g, color.b, 0xFF])
}

/// Unpack a pixel created with [`pack`].
#[inline]
#[must_use]
pub const fn unpack(pixel: u32) -> RGB8 {
    let [r, g, b, _a] = pixel.to_le_bytes();

    RGB8 { r, g, b }
}

/// Simple pixel buffer that can be passed around to rendering calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: usize,
    /// Height in pixels.
    height: usize,
    /// Pixels row by row.
    buffer: Vec<u32>,
    /// Packed active color.
    color: u32,
    /// Amount of frames shown with [`Surface::present`].
    frames_presented: u64,
}

impl Canvas {
    /// Create a black canvas.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let color = pack(RGB8::new(0, 0, 0));
        let buffer = vec![color; width * height];
        let frames_presented = 0;

        Self {
            width,
            height,
            buffer,
            color,
            frames_presented,
        }
    }

    /// Color of a single pixel.
    ///
    /// # Returns
    ///
    /// - `None` when the coordinate is outside of the canvas.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.buffer.get(x + y * self.width).copied().map(unpack)
    }

    /// Get the raw buffer of pixels.
    #[inline]
    #[must_use]
    pub fn raw_buffer(&self) -> &[u32] {
        &self.buffer
    }

    /// Amount of times [`Surface::present`] has been called.
    #[inline]
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Clamp a span to `0..limit`.
    fn clamp_span(start: i32, length: i32, limit: usize) -> (usize, usize) {
        let end = i64::from(start) + i64::from(length.max(0));
        let limit = limit as i64;

        let start = i64::from(start).clamp(0, limit) as usize;
        let end = end.clamp(0, limit) as usize;

        (start, end)
    }
}

impl Surface for Canvas {
    #[inline]
    fn set_color(&mut self, color: RGB8) {
        self.color = pack(color);
    }

    #[inline]
    fn clear(&mut self) {
        self.buffer.fill(self.color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        // Clamp to the buffer
        let (start_x, end_x) = Self::clamp_span(x, width, self.width);
        let (start_y, end_y) = Self::clamp_span(y, height, self.height);
        if start_x == end_x {
            return;
        }

        // Fill the spans row by row
        for y in start_y..end_y {
            let y_index = y * self.width;
            self.buffer[(y_index + start_x)..(y_index + end_x)].fill(self.color);
        }
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        // Ignore everything outside of the buffer
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }

        self.buffer[x + y * self.width] = self.color;
    }

    #[inline]
    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
