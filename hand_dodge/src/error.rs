use dodge_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("could not open camera {index}: {reason}")]
    Open { index: u32, reason: String },
    #[error("could not read a frame: {0}")]
    Read(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid game constants")]
    Config(#[from] ConfigError),
    #[error("frame source failed")]
    Frame(#[from] FrameError),
    #[error("display window error: {0}")]
    Window(String),
    #[error("hand tracker unavailable: {0}")]
    Tracker(String),
}
