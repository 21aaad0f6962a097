//! The two cues the ticket plays: a short click and the victory melody.

use super::synth::{GainEnvelope, ToneSequence, Voice, Waveform};

/// Notes of the victory fanfare as (frequency Hz, duration s): C5 E5 G5 C6.
pub const VICTORY_MELODY: [(f64, f64); 4] = [
    (523.25, 0.15),
    (659.25, 0.15),
    (783.99, 0.15),
    (1046.5, 0.25),
];

const VICTORY_PEAK: f32 = 0.35;
const VICTORY_ATTACK: f64 = 0.01;
const VICTORY_RELEASE_TAIL: f64 = 0.05;

const CLICK_FREQUENCY: f64 = 220.0;
const CLICK_PEAK: f32 = 0.25;
const CLICK_ATTACK: f64 = 0.005;
const CLICK_DECAY_END: f64 = 0.1;
const CLICK_STOP: f64 = 0.12;

/// Floor the exponential decays settle on.
const DECAY_FLOOR: f32 = 0.001;

/// Single triangle blip played on every regeneration.
pub fn click_tone() -> ToneSequence {
    let envelope = GainEnvelope::default()
        .set_value_at(0.0, 0.0)
        .linear_ramp_to(CLICK_PEAK, CLICK_ATTACK)
        .exponential_ramp_to(DECAY_FLOOR, CLICK_DECAY_END);

    let mut sequence = ToneSequence::new();
    sequence.push(Voice {
        waveform: Waveform::Triangle,
        frequency: CLICK_FREQUENCY,
        envelope,
        start: 0.0,
        stop: CLICK_STOP,
    });
    sequence
}

/// Ascending four-note melody, each note starting as the previous one ends.
pub fn victory_tone() -> ToneSequence {
    let mut sequence = ToneSequence::new();
    let mut start = 0.0;
    for &(frequency, duration) in VICTORY_MELODY.iter() {
        let end = start + duration;
        let envelope = GainEnvelope::default()
            .set_value_at(0.0, start)
            .linear_ramp_to(VICTORY_PEAK, start + VICTORY_ATTACK)
            .exponential_ramp_to(DECAY_FLOOR, end);
        sequence.push(Voice {
            waveform: Waveform::Sine,
            frequency,
            envelope,
            start,
            stop: end + VICTORY_RELEASE_TAIL,
        });
        start = end;
    }
    sequence
}
