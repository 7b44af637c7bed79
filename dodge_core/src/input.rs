//! Keyboard commands.

/// A key the game reacts to.  Everything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `q` — leave the game from any state.
    Quit,
    /// `r` — start over; only honoured on the game-over screen.
    Restart,
}

impl Command {
    /// Decode an 8-bit key code.
    pub fn from_key(code: u8) -> Option<Self> {
        match code {
            b'q' => Some(Command::Quit),
            b'r' => Some(Command::Restart),
            _ => None,
        }
    }
}
