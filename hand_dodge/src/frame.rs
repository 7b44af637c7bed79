//! Frame sources — where the backdrop image for each frame comes from.
//!
//! The loop pulls exactly one frame per iteration.  A failed read is fatal
//! for the session; there is no retry.
//!
//! * [`SyntheticFrames`] — generated backdrop, always available.
//! * [`CameraFrames`] — real webcam via `nokhwa` (feature `camera`).

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::FrameError;

/// One captured image, tightly packed RGB8.
pub type Frame = RgbImage;

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait
// ════════════════════════════════════════════════════════════════════════════

pub trait FrameSource {
    /// Pull the next frame.  An error ends the session.
    fn read_frame(&mut self) -> Result<Frame, FrameError>;

    /// Give the device back.  Called once when the loop exits.
    fn release(&mut self) {}
}

/// Flip left↔right so moving a hand to the right moves the player right.
pub fn mirror(frame: &mut Frame) {
    imageops::flip_horizontal_in_place(frame);
}

/// Scale `frame` to `width × height` unless it already has that size.
pub fn fit(frame: Frame, width: u32, height: u32) -> Frame {
    if frame.dimensions() == (width, height) {
        frame
    } else {
        imageops::resize(&frame, width, height, FilterType::Triangle)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SyntheticFrames — no hardware needed
// ════════════════════════════════════════════════════════════════════════════

/// Dark vertical gradient with a slowly drifting horizontal band, standing
/// in for the camera in simulation mode.
pub struct SyntheticFrames {
    width:  u32,
    height: u32,
    tick:   u32,
}

impl SyntheticFrames {
    pub fn new(width: u32, height: u32) -> Self {
        SyntheticFrames { width, height, tick: 0 }
    }
}

impl FrameSource for SyntheticFrames {
    fn read_frame(&mut self) -> Result<Frame, FrameError> {
        let h = self.height.max(1);
        let band = self.tick.wrapping_mul(2) % h;
        self.tick = self.tick.wrapping_add(1);

        Ok(RgbImage::from_fn(self.width, self.height, |x, y| {
            let shade = (20 + y * 40 / h) as u8;
            let glow  = if y.abs_diff(band) < 6 { 18 } else { 0 };
            // Faint vertical tick marks every 80px help judge motion.
            let grid  = if x % 80 == 0 { 10 } else { 0 };
            Rgb([shade / 2 + grid, shade / 2 + glow, shade + glow + grid])
        }))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CameraFrames — real webcam (feature = "camera")
// ════════════════════════════════════════════════════════════════════════════

/// Webcam capture through `nokhwa`, resized to the game's screen size.
#[cfg(feature = "camera")]
pub struct CameraFrames {
    camera: nokhwa::Camera,
    width:  u32,
    height: u32,
}

#[cfg(feature = "camera")]
impl CameraFrames {
    /// Open device `index` and ask for the closest format to
    /// `width × height`.
    pub fn open(index: u32, width: u32, height: u32) -> Result<Self, FrameError> {
        use nokhwa::pixel_format::RgbFormat;
        use nokhwa::utils::{
            CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
        };

        let open_err = |e: nokhwa::NokhwaError| FrameError::Open { index, reason: e.to_string() };

        let wanted = CameraFormat::new(Resolution::new(width, height), FrameFormat::MJPEG, 30);
        let format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(wanted));
        let mut camera = nokhwa::Camera::new(CameraIndex::Index(index), format).map_err(open_err)?;
        camera.open_stream().map_err(open_err)?;

        let res = camera.resolution();
        tracing::info!(
            index,
            width = res.width(),
            height = res.height(),
            "camera stream opened"
        );
        Ok(CameraFrames { camera, width, height })
    }
}

#[cfg(feature = "camera")]
impl FrameSource for CameraFrames {
    fn read_frame(&mut self) -> Result<Frame, FrameError> {
        use nokhwa::pixel_format::RgbFormat;

        let buffer = self.camera.frame().map_err(|e| FrameError::Read(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| FrameError::Read(e.to_string()))?;
        let (w, h) = (decoded.width(), decoded.height());
        let frame = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| FrameError::Read(format!("short {}x{} camera buffer", w, h)))?;
        Ok(fit(frame, self.width, self.height))
    }

    fn release(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            tracing::warn!(error = %e, "camera did not stop cleanly");
        }
    }
}
