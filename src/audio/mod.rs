//! # Audio Feedback
//!
//! Procedurally synthesized cues for the ticket. [`tones`] describes the two
//! fixed sequences, [`synth`] renders them to samples, and an
//! [`AudioFeedback`] backend plays them. Every call is fire-and-forget: the
//! caller never waits for a sound to finish and never hears about failures.

pub mod synth;
pub mod tones;

#[cfg(feature = "audio")]
pub mod device;

#[cfg(feature = "audio")]
pub use device::DeviceAudio;

/// Sample rate cues are rendered at.
pub const SAMPLE_RATE: u32 = 44_100;

/// Something that can play the ticket's two cues.
pub trait AudioFeedback {
    /// Short blip for a regeneration.
    fn play_click(&mut self);
    /// Four-note fanfare for the winning edge.
    fn play_victory(&mut self);
}

impl<A: AudioFeedback + ?Sized> AudioFeedback for Box<A> {
    fn play_click(&mut self) {
        (**self).play_click();
    }

    fn play_victory(&mut self) {
        (**self).play_victory();
    }
}

/// Backend that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioFeedback for SilentAudio {
    fn play_click(&mut self) {}
    fn play_victory(&mut self) {}
}

/// Picks the backend for this session.
///
/// Falls back to [`SilentAudio`] when `muted`, when the crate was built
/// without the `audio` feature, or when no output device can be opened.
pub fn open_backend(muted: bool) -> Box<dyn AudioFeedback> {
    if muted {
        tracing::debug!("audio muted");
        return Box::new(SilentAudio);
    }
    open_device()
}

#[cfg(feature = "audio")]
fn open_device() -> Box<dyn AudioFeedback> {
    match DeviceAudio::open() {
        Ok(device) => Box::new(device),
        Err(err) => {
            tracing::warn!(%err, "no audio output, continuing silently");
            Box::new(SilentAudio)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_device() -> Box<dyn AudioFeedback> {
    tracing::debug!("built without the audio feature");
    Box::new(SilentAudio)
}
