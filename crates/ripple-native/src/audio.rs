// ---------------- Native audio (cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use ripple_core::{ToneError, ToneHandle, ToneSink, ToneSpec};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Fade applied when a tone is cancelled before its natural stop.
const CANCEL_FADE_SEC: f32 = 0.005;
const FALLBACK_SAMPLE_RATE: f32 = 48_000.0;

struct Fade {
    from_gain: f32,
    remaining: u32,
}

struct Voice {
    spec: ToneSpec,
    phase: f32,     // radians
    phase_inc: f32, // radians per sample
    samples_emitted: u32,
    fade: Option<Fade>,
    cancelled: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

/// Sums every sounding voice into one mono stream.
pub(crate) struct Mixer {
    sample_rate: f32,
    voices: Vec<Voice>,
}

impl Mixer {
    pub(crate) fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, spec: &ToneSpec) -> NativeTone {
        let tone = NativeTone {
            cancelled: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(AtomicBool::new(false)),
        };
        self.voices.push(Voice {
            spec: *spec,
            phase: 0.0,
            phase_inc: std::f32::consts::TAU * spec.frequency_hz / self.sample_rate,
            samples_emitted: 0,
            fade: None,
            cancelled: Arc::clone(&tone.cancelled),
            finished: Arc::clone(&tone.finished),
        });
        tone
    }

    pub(crate) fn next_sample(&mut self) -> f32 {
        let fade_samples = ((CANCEL_FADE_SEC * self.sample_rate) as u32).max(1);
        let mut sum = 0.0f32;
        let mut i = 0usize;
        while i < self.voices.len() {
            let voice = &mut self.voices[i];
            let t = voice.samples_emitted as f32 / self.sample_rate;
            let mut gain = voice.spec.gain_at(t);
            if voice.fade.is_none() && voice.cancelled.load(Ordering::Relaxed) {
                voice.fade = Some(Fade {
                    from_gain: gain,
                    remaining: fade_samples,
                });
            }
            let done = match voice.fade.as_mut() {
                Some(fade) => {
                    gain = fade.from_gain * fade.remaining as f32 / fade_samples as f32;
                    fade.remaining = fade.remaining.saturating_sub(1);
                    fade.remaining == 0
                }
                None => t >= voice.spec.stop_after_sec,
            };

            sum += voice.spec.waveform.sample(voice.phase) * gain;
            voice.phase = (voice.phase + voice.phase_inc) % std::f32::consts::TAU;
            voice.samples_emitted += 1;

            if done {
                voice.finished.store(true, Ordering::Relaxed);
                self.voices.swap_remove(i);
                continue;
            }
            i += 1;
        }
        // Overlapping tones can exceed full scale; soft-clip instead of wrapping.
        sum.tanh()
    }
}

fn lock(mixer: &Mutex<Mixer>) -> MutexGuard<'_, Mixer> {
    mixer.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to one voice in the mixer.
#[derive(Clone, Debug)]
pub struct NativeTone {
    cancelled: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

impl ToneHandle for NativeTone {
    fn is_active(&self) -> bool {
        !self.finished.load(Ordering::Relaxed)
    }

    fn cancel(self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Default output device driven by a [`Mixer`]. Without a device every
/// `start` reports [`ToneError::Unavailable`] and the ripples stay silent.
pub struct NativeTones {
    mixer: Arc<Mutex<Mixer>>,
    stream: Option<cpal::Stream>,
}

impl NativeTones {
    pub fn new() -> Self {
        match open_output() {
            Ok((stream, mixer)) => Self {
                mixer,
                stream: Some(stream),
            },
            Err(e) => {
                log::warn!("[audio] no output stream, running silent: {:#}", e);
                Self {
                    mixer: Arc::new(Mutex::new(Mixer::new(FALLBACK_SAMPLE_RATE))),
                    stream: None,
                }
            }
        }
    }
}

impl ToneSink for NativeTones {
    type Handle = NativeTone;

    fn start(&mut self, tone: &ToneSpec) -> Result<NativeTone, ToneError> {
        if self.stream.is_none() {
            return Err(ToneError::Unavailable);
        }
        Ok(lock(&self.mixer).push(tone))
    }
}

fn open_output() -> anyhow::Result<(cpal::Stream, Arc<Mutex<Mixer>>)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no default output device"))?;
    let supported = device.default_output_config()?;
    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let mixer = Arc::new(Mutex::new(Mixer::new(config.sample_rate.0 as f32)));

    let stream = match sample_format {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&mixer))?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&mixer))?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&mixer))?,
        other => anyhow::bail!("unsupported sample format {:?}", other),
    };
    stream.play()?;
    log::info!(
        "[audio] {} Hz, {} channel(s), {:?}",
        config.sample_rate.0,
        config.channels,
        sample_format
    );
    Ok((stream, mixer))
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mixer: Arc<Mutex<Mixer>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = (config.channels as usize).max(1);
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut mixer = lock(&mixer);
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(mixer.next_sample());
                for out in frame.iter_mut() {
                    *out = value;
                }
            }
        },
        |err| log::error!("[audio] stream error: {}", err),
        None,
    )
}
