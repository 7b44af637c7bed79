//! Windowed display using `minifb`.
//!
//! The loop driver talks to the display only through the [`Screen`] trait so
//! it can run against a scripted screen in tests.  [`Visualizer`] is the
//! real window: it paints the mirrored frame plus the scene into a
//! [`Canvas`], presents it, reads the `q`/`r` keys, and in simulation mode
//! forwards the mouse pointer as a fingertip.

use std::sync::mpsc::Sender;
use std::time::Duration;

use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use dodge_core::scene::DrawCommand;
use dodge_core::Fingertip;

use crate::canvas::Canvas;
use crate::error::AppError;
use crate::frame::Frame;
use crate::tracker::PointerSample;

pub const WINDOW_TITLE: &str = "Hand Dodge";

// ════════════════════════════════════════════════════════════════════════════
// Screen trait
// ════════════════════════════════════════════════════════════════════════════

pub trait Screen {
    /// False once the user closed the window.
    fn is_open(&self) -> bool;

    /// Show `frame` with `scene` drawn over it.
    fn present(&mut self, frame: &Frame, scene: &[DrawCommand]) -> Result<(), AppError>;

    /// Key pressed since the last poll, as an 8-bit code.
    fn poll_key(&mut self) -> Option<u8>;
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:     Window,
    canvas:     Canvas,
    pointer_tx: Option<Sender<PointerSample>>,
}

impl Visualizer {
    pub fn new(width: usize, height: usize, fps: u32) -> Result<Self, AppError> {
        let mut window = Window::new(
            WINDOW_TITLE,
            width, height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| AppError::Window(e.to_string()))?;

        window.limit_update_rate(Some(Duration::from_micros(1_000_000 / u64::from(fps.max(1)))));

        Ok(Visualizer {
            window,
            canvas: Canvas::new(width, height),
            pointer_tx: None,
        })
    }

    /// Forward the mouse pointer to a [`PointerLocator`](crate::tracker::PointerLocator)
    /// after every presented frame.
    pub fn attach_pointer(&mut self, tx: Sender<PointerSample>) {
        self.pointer_tx = Some(tx);
    }

    fn forward_pointer(&mut self) {
        let Some(tx) = &self.pointer_tx else { return };
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        let sample = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(mx, my)| Fingertip::new(mx / w, my / h));
        if tx.send(sample).is_err() {
            self.pointer_tx = None;
        }
    }
}

impl Screen for Visualizer {
    fn is_open(&self) -> bool { self.window.is_open() }

    fn present(&mut self, frame: &Frame, scene: &[DrawCommand]) -> Result<(), AppError> {
        self.canvas.paint(frame, scene);
        self.window
            .update_with_buffer(self.canvas.buffer(), self.canvas.width(), self.canvas.height())
            .map_err(|e| AppError::Window(e.to_string()))?;
        self.forward_pointer();
        Ok(())
    }

    fn poll_key(&mut self) -> Option<u8> {
        if self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            Some(b'q')
        } else if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
            Some(b'r')
        } else {
            None
        }
    }
}
