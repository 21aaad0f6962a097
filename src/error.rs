//! Error type shared by the library and the `play` binary.

use thiserror::Error;

/// Everything that can go wrong around the ticket widget.
///
/// The widget logic itself is infallible; these errors come from the edges:
/// the terminal, the audio device and hand-built tickets.
#[derive(Debug, Error)]
pub enum LotteryError {
    /// Terminal, event or log file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A ticket was built from a digit outside `0..=9`.
    #[error("digit {digit} is outside the ticket range 0..=9")]
    DigitOutOfRange { digit: u8 },

    /// The audio device or a playback session could not be opened.
    #[error("audio unavailable: {0}")]
    Audio(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LotteryError>;
