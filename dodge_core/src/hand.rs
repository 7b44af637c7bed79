//! Fingertip samples and the policy for choosing one when several hands are
//! in view.

use std::fmt;
use std::str::FromStr;

/// Normalized index-fingertip position: `(0, 0)` is the top-left of the
/// frame, `(1, 1)` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fingertip {
    pub x: f32,
    pub y: f32,
}

impl Fingertip {
    /// Build a sample, clamping both axes into `[0, 1]`.
    pub fn new(x: f32, y: f32) -> Self {
        Fingertip { x: x.clamp(0.0, 1.0), y: y.clamp(0.0, 1.0) }
    }

    /// Pixel column on a `width`-wide screen (truncating).
    pub fn screen_x(&self, width: i32) -> i32 {
        (self.x * width as f32) as i32
    }

    /// Pixel row on a `height`-tall screen (truncating).
    pub fn screen_y(&self, height: i32) -> i32 {
        (self.y * height as f32) as i32
    }
}

/// Which hand steers the player when more than one is detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandPolicy {
    /// The first hand the locator reports.
    #[default]
    First,
    /// The last hand reported; every earlier hand is overridden.
    Last,
}

impl HandPolicy {
    pub fn select(self, hands: &[Fingertip]) -> Option<Fingertip> {
        match self {
            HandPolicy::First => hands.first().copied(),
            HandPolicy::Last  => hands.last().copied(),
        }
    }
}

impl FromStr for HandPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(HandPolicy::First),
            "last"  => Ok(HandPolicy::Last),
            other   => Err(format!("unknown hand policy \"{}\" (expected first or last)", other)),
        }
    }
}

impl fmt::Display for HandPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandPolicy::First => "first",
            HandPolicy::Last  => "last",
        })
    }
}
