//! Hand locators — turn a frame into zero or more fingertip samples.
//!
//! The game only consumes the normalized index-fingertip position.  How it
//! is found is up to the backend:
//!
//! * [`PointerLocator`] — simulation mode: the mouse pointer inside the game
//!   window stands in for the fingertip.  The window forwards pointer
//!   positions over an `mpsc` channel so the locator stays decoupled from
//!   the window event loop.
//! * [`LeapLocator`] — LeapMotion hardware via LeapC (feature `leap`).
//!
//! Neither backend looks for hands in the camera image; the frame is passed
//! through so a vision-based locator can slot in behind the same trait.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use dodge_core::Fingertip;

use crate::frame::Frame;

/// Anything that can find fingertips in a frame.
pub trait HandLocator {
    /// Every hand in view, in the backend's own order.  Empty means no
    /// hand this frame, which is not an error.
    fn locate(&mut self, frame: &Frame) -> Vec<Fingertip>;
}

// ════════════════════════════════════════════════════════════════════════════
// PointerLocator — mouse pointer as fingertip (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Pointer sample from the window: `None` once the pointer leaves it.
pub type PointerSample = Option<Fingertip>;

pub struct PointerLocator {
    rx:     Receiver<PointerSample>,
    latest: PointerSample,
}

/// Create the sender the window writes to and the locator that reads it.
pub fn pointer_channel() -> (Sender<PointerSample>, PointerLocator) {
    let (tx, rx) = mpsc::channel();
    (tx, PointerLocator { rx, latest: None })
}

impl HandLocator for PointerLocator {
    fn locate(&mut self, _frame: &Frame) -> Vec<Fingertip> {
        loop {
            match self.rx.try_recv() {
                Ok(sample) => self.latest = sample,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.latest = None;
                    break;
                }
            }
        }
        self.latest.into_iter().collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tracking backlog
// ════════════════════════════════════════════════════════════════════════════

/// One message from a tracking service, reduced to what the game needs.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerMessage {
    /// A tracking frame and the fingertips it saw (possibly none).
    Tracking(Vec<Fingertip>),
    /// Device, policy, or log traffic.
    Other,
}

/// Upper bound on messages consumed in one frame.
pub const MAX_DRAIN: usize = 64;

/// Consume up to [`MAX_DRAIN`] queued messages and return the hands from the
/// newest tracking frame.  With no tracking frame in the backlog, `last`
/// (the previous answer) is reported again.
pub fn drain_tracking<I>(messages: I, last: &mut Vec<Fingertip>) -> Vec<Fingertip>
where
    I: IntoIterator<Item = TrackerMessage>,
{
    let mut drained = 0usize;
    for msg in messages.into_iter().take(MAX_DRAIN) {
        drained += 1;
        if let TrackerMessage::Tracking(tips) = msg {
            *last = tips;
        }
    }
    if drained > 1 {
        tracing::trace!(drained, "tracking backlog consumed");
    }
    last.clone()
}

// ════════════════════════════════════════════════════════════════════════════
// LeapLocator — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Fingertip tracking backed by a LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
/// The controller tracks hands on its own; the camera frame is not looked at.
///
/// Every frame the locator empties LeapC's queue without blocking and keeps
/// the newest tracking frame, so the player never lags behind a backlog.
/// The distal tip of each hand's index finger is mapped from the
/// controller's millimetre space onto the normalized frame: x spans
/// `LEAP_X_MM`, height above the device spans `LEAP_Y_MM` (up is the top of
/// the screen).
#[cfg(feature = "leap")]
pub struct LeapLocator {
    connection: leaprs::Connection,
    latest:     Vec<Fingertip>,
}

#[cfg(feature = "leap")]
const LEAP_X_MM: (f32, f32) = (-200.0, 200.0);
#[cfg(feature = "leap")]
const LEAP_Y_MM: (f32, f32) = (80.0, 400.0);

#[cfg(feature = "leap")]
impl LeapLocator {
    pub fn connect() -> Result<Self, String> {
        use leaprs::*;

        let mut connection = Connection::create(ConnectionConfig::default())
            .map_err(|e| format!("failed to create LeapC connection: {:?}", e))?;
        connection
            .open()
            .map_err(|e| format!("failed to open LeapMotion device: {:?}", e))?;
        tracing::info!("LeapMotion connection opened");
        Ok(LeapLocator { connection, latest: Vec::new() })
    }
}

#[cfg(feature = "leap")]
fn leap_message(msg: &leaprs::ConnectionMessage) -> TrackerMessage {
    use leaprs::*;

    match msg.event() {
        Event::Tracking(frame) => {
            let hands: Vec<_> = frame.hands().collect();
            TrackerMessage::Tracking(hands.iter().filter_map(|hand| index_tip(hand)).collect())
        }
        _ => TrackerMessage::Other,
    }
}

#[cfg(feature = "leap")]
fn index_tip(hand: &leaprs::Hand) -> Option<Fingertip> {
    let fingers: Vec<_> = hand.digits().collect();
    let tip = fingers.get(1)?.distal().next_joint();
    let nx = (tip.x - LEAP_X_MM.0) / (LEAP_X_MM.1 - LEAP_X_MM.0);
    let ny = 1.0 - (tip.y - LEAP_Y_MM.0) / (LEAP_Y_MM.1 - LEAP_Y_MM.0);
    Some(Fingertip::new(nx, ny))
}

#[cfg(feature = "leap")]
impl HandLocator for LeapLocator {
    fn locate(&mut self, _frame: &Frame) -> Vec<Fingertip> {
        // poll(0) errors with a timeout once the queue is empty.
        let connection = &mut self.connection;
        let backlog = std::iter::from_fn(|| connection.poll(0).ok().map(|m| leap_message(&m)));
        drain_tracking(backlog, &mut self.latest)
    }
}
