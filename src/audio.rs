//! Procedurally generated sound effects - no external files needed!
//!
//! Each effect is a short synthesized sweep rendered offline and handed to a
//! detached sink, so playback never blocks the frame loop. A missing audio
//! device disables the whole subsystem instead of failing the game.

use fundsp::prelude64::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::sim::GameEvent;

const SAMPLE_RATE: f64 = 44_100.0;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumps off a platform
    Jump,
    /// Player lands after being airborne
    Land,
    /// Spring platform launch
    Spring,
    /// Score crossed a 1 000 bucket
    ScoreTick,
    /// Score crossed a 10 000 milestone
    Milestone,
    /// Run ended
    GameOver,
    /// New leaderboard entry
    HighScore,
}

/// Map a simulation event to its sound, if it has one
pub fn event_effect(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Jump => Some(SoundEffect::Jump),
        GameEvent::Land => Some(SoundEffect::Land),
        GameEvent::Spring => Some(SoundEffect::Spring),
        GameEvent::Score => Some(SoundEffect::ScoreTick),
        GameEvent::Milestone => Some(SoundEffect::Milestone),
        GameEvent::GameOver => Some(SoundEffect::GameOver),
    }
}

/// Device stream plus the handle sinks are built from. The stream must stay
/// alive for the handle to produce sound.
struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<AudioOutput>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(AudioOutput {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("Failed to open audio output ({e}) - audio disabled");
                None
            }
        };
        Self {
            output,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for one tick's worth of simulation events
    pub fn dispatch(&self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = event_effect(event) {
                self.play(effect);
            }
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(output) = &self.output else { return };

        let Ok(sink) = Sink::try_new(&output.handle) else {
            return;
        };
        for segment in render_effect(effect, vol) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE as u32, segment));
        }
        sink.detach();
    }
}

/// Render an effect as one or more segments played back to back
fn render_effect(effect: SoundEffect, vol: f32) -> Vec<Vec<f32>> {
    match effect {
        SoundEffect::Jump => vec![sine_sweep(500.0, 820.0, 0.09, vol * 0.3)],
        SoundEffect::Land => vec![sine_sweep(150.0, 60.0, 0.08, vol * 0.5)],
        SoundEffect::Spring => vec![square_sweep(250.0, 1100.0, 0.18, vol * 0.25)],
        SoundEffect::ScoreTick => vec![sine_sweep(880.0, 880.0, 0.06, vol * 0.2)],
        SoundEffect::Milestone => [523.25, 659.25, 783.99, 1046.5]
            .iter()
            .map(|&f| sine_sweep(f, f, 0.1, vol * 0.25))
            .collect(),
        SoundEffect::GameOver => vec![saw_sweep(400.0, 80.0, 0.5, vol * 0.2)],
        SoundEffect::HighScore => [500.0, 600.0, 700.0, 800.0, 1000.0]
            .iter()
            .map(|&f| sine_sweep(f, f, 0.08, vol * 0.25))
            .collect(),
    }
}

fn render(unit: &mut dyn AudioUnit, seconds: f64) -> Vec<f32> {
    Wave::render(SAMPLE_RATE, seconds, unit).channel(0).clone()
}

/// Sine oscillator with a linear frequency sweep and fade-out envelope
fn sine_sweep(f0: f64, f1: f64, seconds: f64, amp: f32) -> Vec<f32> {
    let freq = lfo(move |t: f64| f0 + (f1 - f0) * (t / seconds).min(1.0));
    let gain = lfo(move |t: f64| amp as f64 * (1.0 - (t / seconds).min(1.0)));
    let mut unit = (freq >> sine()) * gain;
    render(&mut unit, seconds)
}

fn square_sweep(f0: f64, f1: f64, seconds: f64, amp: f32) -> Vec<f32> {
    let freq = lfo(move |t: f64| f0 + (f1 - f0) * (t / seconds).min(1.0));
    let gain = lfo(move |t: f64| amp as f64 * (1.0 - (t / seconds).min(1.0)));
    let mut unit = (freq >> square()) * gain;
    render(&mut unit, seconds)
}

fn saw_sweep(f0: f64, f1: f64, seconds: f64, amp: f32) -> Vec<f32> {
    let freq = lfo(move |t: f64| f0 + (f1 - f0) * (t / seconds).min(1.0));
    let gain = lfo(move |t: f64| amp as f64 * (1.0 - (t / seconds).min(1.0)));
    let mut unit = (freq >> saw()) * gain;
    render(&mut unit, seconds)
}
