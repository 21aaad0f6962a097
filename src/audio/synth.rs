//! # Tone Synthesis
//!
//! A tiny offline synthesizer modelled on the oscillator + gain-parameter
//! primitives of browser-style audio APIs. Voices are scheduled on a timeline
//! measured in seconds from the moment a sequence starts, and a whole
//! [`ToneSequence`] is rendered to mono `f32` samples in one pass.

use std::f64::consts::PI;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    /// Sample of a unit-amplitude wave at `phase` (in cycles, any value).
    ///
    /// Both shapes start at zero and rise, so a voice always begins silent.
    pub fn sample(self, phase: f64) -> f64 {
        let p = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (2.0 * PI * p).sin(),
            Waveform::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
        }
    }
}

/// One scheduled change of a gain parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Automation {
    /// Jump to `value` at time `at`.
    SetValue { value: f32, at: f64 },
    /// Ramp linearly from the previous event to `value`, arriving at `at`.
    LinearRamp { value: f32, at: f64 },
    /// Ramp exponentially from the previous event to `value`, arriving at `at`.
    ExponentialRamp { value: f32, at: f64 },
}

impl Automation {
    pub fn at(&self) -> f64 {
        match *self {
            Automation::SetValue { at, .. }
            | Automation::LinearRamp { at, .. }
            | Automation::ExponentialRamp { at, .. } => at,
        }
    }

    pub fn value(&self) -> f32 {
        match *self {
            Automation::SetValue { value, .. }
            | Automation::LinearRamp { value, .. }
            | Automation::ExponentialRamp { value, .. } => value,
        }
    }
}

/// Gain parameter with a timeline of automation events.
///
/// Events are kept sorted by time; events sharing a timestamp keep the order
/// they were scheduled in.
#[derive(Debug, Clone, PartialEq)]
pub struct GainEnvelope {
    default_value: f32,
    events: Vec<Automation>,
}

impl Default for GainEnvelope {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl GainEnvelope {
    pub fn new(default_value: f32) -> Self {
        Self {
            default_value,
            events: Vec::new(),
        }
    }

    pub fn set_value_at(mut self, value: f32, at: f64) -> Self {
        self.schedule(Automation::SetValue { value, at });
        self
    }

    pub fn linear_ramp_to(mut self, value: f32, at: f64) -> Self {
        self.schedule(Automation::LinearRamp { value, at });
        self
    }

    pub fn exponential_ramp_to(mut self, value: f32, at: f64) -> Self {
        self.schedule(Automation::ExponentialRamp { value, at });
        self
    }

    pub fn events(&self) -> &[Automation] {
        &self.events
    }

    fn schedule(&mut self, event: Automation) {
        let index = self.events.partition_point(|e| e.at() <= event.at());
        self.events.insert(index, event);
    }

    /// Gain at time `t` seconds.
    pub fn value_at(&self, t: f64) -> f32 {
        let next_index = self.events.partition_point(|e| e.at() <= t);
        let (start_time, start_value) = match next_index.checked_sub(1) {
            Some(i) => (self.events[i].at(), self.events[i].value()),
            None => (0.0, self.default_value),
        };

        let Some(next) = self.events.get(next_index) else {
            return start_value;
        };

        let span = next.at() - start_time;
        let progress = if span > 0.0 {
            ((t - start_time) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };

        match *next {
            Automation::SetValue { .. } => start_value,
            Automation::LinearRamp { value, .. } => {
                start_value + (value - start_value) * progress as f32
            }
            Automation::ExponentialRamp { value, .. } => {
                // Undefined for a zero or sign-flipping start: hold until the ramp lands.
                if start_value == 0.0 || start_value.signum() != value.signum() {
                    start_value
                } else {
                    let ratio = f64::from(value) / f64::from(start_value);
                    (f64::from(start_value) * ratio.powf(progress)) as f32
                }
            }
        }
    }
}

/// A single oscillator routed through its own gain envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    pub frequency: f64,
    pub envelope: GainEnvelope,
    /// Seconds from sequence start until the oscillator starts.
    pub start: f64,
    /// Seconds from sequence start until the oscillator stops.
    pub stop: f64,
}

impl Voice {
    /// Output of this voice at time `t`, zero outside `[start, stop)`.
    pub fn sample_at(&self, t: f64) -> f32 {
        if t < self.start || t >= self.stop {
            return 0.0;
        }
        let phase = (t - self.start) * self.frequency;
        self.waveform.sample(phase) as f32 * self.envelope.value_at(t)
    }
}

/// A set of voices that play together from a common start instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToneSequence {
    voices: Vec<Voice>,
}

impl ToneSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, voice: Voice) {
        self.voices.push(voice);
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Seconds until the last voice stops.
    pub fn duration(&self) -> f64 {
        self.voices.iter().map(|v| v.stop).fold(0.0, f64::max)
    }

    /// Mixes every voice into mono samples.
    ///
    /// # Arguments
    /// * `sample_rate` - Output rate in Hz
    ///
    /// # Returns
    /// `ceil(duration * sample_rate)` samples, each clamped to `[-1, 1]`
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let rate = f64::from(sample_rate);
        let len = (self.duration() * rate).ceil() as usize;
        (0..len)
            .map(|i| {
                let t = i as f64 / rate;
                let mixed: f32 = self.voices.iter().map(|v| v.sample_at(t)).sum();
                mixed.clamp(-1.0, 1.0)
            })
            .collect()
    }
}
