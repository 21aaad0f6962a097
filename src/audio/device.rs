//! Output through the system's default audio device.

use super::synth::ToneSequence;
use super::tones::{click_tone, victory_tone};
use super::{AudioFeedback, SAMPLE_RATE};
use crate::error::{LotteryError, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Plays cues on the default output device.
///
/// The device stream is opened once and must outlive every sound; each cue
/// gets its own freshly created sink, which is detached so it keeps playing
/// after this call returns. That sink is the playback session of one call;
/// nothing is shared between cues except the device stream.
pub struct DeviceAudio {
    // Dropping the stream silences everything still playing.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl DeviceAudio {
    /// Opens the default output device.
    ///
    /// # Errors
    /// Returns [`LotteryError::Audio`] if no device is available.
    pub fn open() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| LotteryError::Audio(e.to_string()))?;
        tracing::debug!("audio output opened");
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn play(&self, sequence: &ToneSequence) -> Result<()> {
        let sink = Sink::try_new(&self.handle).map_err(|e| LotteryError::Audio(e.to_string()))?;
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, sequence.render(SAMPLE_RATE)));
        sink.detach();
        Ok(())
    }

    fn play_or_warn(&self, cue: &str, sequence: &ToneSequence) {
        if let Err(err) = self.play(sequence) {
            tracing::warn!(cue, %err, "dropping sound");
        }
    }
}

impl AudioFeedback for DeviceAudio {
    fn play_click(&mut self) {
        self.play_or_warn("click", &click_tone());
    }

    fn play_victory(&mut self) {
        self.play_or_warn("victory", &victory_tone());
    }
}
