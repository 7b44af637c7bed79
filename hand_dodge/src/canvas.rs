//! Software framebuffer that rasterizes a [`DrawCommand`] list over a frame.
//!
//! Pixels are packed `0x00RRGGBB` as minifb expects; the alpha byte of
//! incoming colors is ignored.  Every primitive clips to the buffer.

use dodge_core::scene::DrawCommand;
use dodge_core::Rect;

use crate::frame::Frame;

/// Glyph cell: 3 columns, 5 rows, plus one column of spacing.
const GLYPH_W:   i32 = 3;
const GLYPH_H:   i32 = 5;
const ADVANCE:   i32 = GLYPH_W + 1;

pub struct Canvas {
    width:  usize,
    height: usize,
    buf:    Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, buf: vec![0; width * height] }
    }

    pub fn width(&self)  -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn buffer(&self) -> &[u32] { &self.buf }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buf[y * self.width + x])
    }

    /// Paint `frame` as the background, then every command in order.
    pub fn paint(&mut self, frame: &Frame, scene: &[DrawCommand]) {
        self.blit(frame);
        for cmd in scene {
            match cmd {
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
                DrawCommand::Text { text, x, baseline, scale, color } => {
                    self.draw_text(text, *x, *baseline, *scale, *color)
                }
            }
        }
    }

    /// Copy an RGB frame into the buffer.  Areas the frame does not cover
    /// are cleared to black.
    pub fn blit(&mut self, frame: &Frame) {
        self.buf.fill(0);
        let w = (frame.width() as usize).min(self.width);
        let h = (frame.height() as usize).min(self.height);
        for y in 0..h {
            let row = &mut self.buf[y * self.width..y * self.width + w];
            for (x, px) in row.iter_mut().enumerate() {
                let [r, g, b] = frame.get_pixel(x as u32, y as u32).0;
                *px = (r as u32) << 16 | (g as u32) << 8 | b as u32;
            }
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let color = color & 0x00FF_FFFF;
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.right().max(0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 { return; }

        for row in y0..y1 {
            self.buf[row * self.width + x0..row * self.width + x1].fill(color);
        }
    }

    /// Render `text` with its glyph bottoms on `baseline`; each font cell is
    /// `scale × scale` pixels.
    pub fn draw_text(&mut self, text: &str, x: i32, baseline: i32, scale: u32, color: u32) {
        let s = scale.max(1) as i32;
        let top = baseline - GLYPH_H * s;
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width as i32 { break; }
            for (row, &bits) in char_glyph(ch).iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                        let cell = Rect::new(cx + col * s, top + row as i32 * s, s, s);
                        self.fill_rect(cell, color);
                    }
                }
            }
            cx += ADVANCE * s;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn blit_packs_rgb() {
        let mut c = Canvas::new(2, 2);
        let f = Frame::from_pixel(2, 2, Rgb([0x12, 0x34, 0x56]));
        c.blit(&f);
        assert_eq!(c.pixel(1, 1), Some(0x123456));
    }

    #[test]
    fn blit_clears_uncovered_area() {
        let mut c = Canvas::new(4, 2);
        c.fill_rect(Rect::new(0, 0, 4, 2), 0xFFFFFFFF);
        c.blit(&Frame::from_pixel(2, 2, Rgb([1, 1, 1])));
        assert_eq!(c.pixel(3, 0), Some(0));
        assert_eq!(c.pixel(0, 0), Some(0x010101));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(Rect::new(-5, 8, 8, 20), 0xFFFF0000);
        assert_eq!(c.pixel(0, 9), Some(0xFF0000));
        assert_eq!(c.pixel(2, 9), Some(0xFF0000));
        assert_eq!(c.pixel(3, 9), Some(0));
        assert_eq!(c.pixel(0, 7), Some(0));
    }

    #[test]
    fn fully_offscreen_rect_is_ignored() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(Rect::new(20, 20, 5, 5), 0xFFFFFFFF);
        c.fill_rect(Rect::new(0, 700, 5, 5), 0xFFFFFFFF);
        assert!(c.buffer().iter().all(|&p| p == 0));
    }

    #[test]
    fn text_sits_on_baseline() {
        let mut c = Canvas::new(40, 40);
        // '1' has its full bottom row lit.
        c.draw_text("1", 0, 20, 2, 0xFFFFFFFF);
        assert_eq!(c.pixel(0, 19), Some(0xFFFFFF));
        assert_eq!(c.pixel(0, 20), Some(0));
        // top row of '1' is only the middle column, at y = 20 - 10
        assert_eq!(c.pixel(2, 10), Some(0xFFFFFF));
        assert_eq!(c.pixel(0, 10), Some(0));
    }

    #[test]
    fn paint_applies_commands_in_order() {
        let mut c = Canvas::new(8, 8);
        let scene = vec![
            DrawCommand::FillRect { rect: Rect::new(0, 0, 8, 8), color: 0xFF00FF00 },
            DrawCommand::FillRect { rect: Rect::new(0, 0, 4, 4), color: 0xFF0000FF },
        ];
        c.paint(&Frame::new(8, 8), &scene);
        assert_eq!(c.pixel(1, 1), Some(0x0000FF));
        assert_eq!(c.pixel(6, 6), Some(0x00FF00));
    }
}
