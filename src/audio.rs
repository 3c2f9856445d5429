use ripple_core::{ToneError, ToneHandle, ToneSink, ToneSpec, Waveform};
use web_sys as web;

/// Small scheduling lead so the first ramp point is never in the past.
const START_LEAD_SEC: f64 = 0.005;

fn js_err(what: &str, e: wasm_bindgen::JsValue) -> ToneError {
    ToneError::Backend(format!("{}: {:?}", what, e))
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> Result<web::GainNode, ToneError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| js_err("GainNode", e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// WebAudio tone source. Holds `None` when the AudioContext could not be
/// created, in which case every ripple stays silent.
pub struct WebTones {
    audio_ctx: Option<web::AudioContext>,
    master_gain: Option<web::GainNode>,
}

impl WebTones {
    pub fn new() -> Self {
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                None
            }
        };
        let master_gain = audio_ctx.as_ref().and_then(|ctx| {
            let g = create_gain(ctx, 1.0).ok()?;
            _ = g.connect_with_audio_node(&ctx.destination());
            Some(g)
        });
        Self {
            audio_ctx,
            master_gain,
        }
    }

    /// Browsers keep new contexts suspended until a user gesture.
    pub fn resume(&self) {
        if let Some(ctx) = &self.audio_ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
                log::info!("[audio] resumed");
            }
        }
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

impl ToneSink for WebTones {
    type Handle = WebTone;

    fn start(&mut self, tone: &ToneSpec) -> Result<WebTone, ToneError> {
        let (Some(audio_ctx), Some(master)) = (&self.audio_ctx, &self.master_gain) else {
            return Err(ToneError::Unavailable);
        };
        let src = web::OscillatorNode::new(audio_ctx).map_err(|e| js_err("OscillatorNode", e))?;
        src.set_type(oscillator_type(tone.waveform));
        src.frequency().set_value(tone.frequency_hz);

        let gain = create_gain(audio_ctx, 0.0)?;
        let t0 = audio_ctx.current_time() + START_LEAD_SEC;
        let ends_at = t0 + tone.stop_after_sec as f64;
        _ = gain.gain().set_value_at_time(0.0, t0);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(tone.peak_amplitude, t0 + tone.attack_sec as f64);
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(master);
        src.start_with_when(t0).map_err(|e| js_err("start", e))?;
        src.stop_with_when(ends_at).map_err(|e| js_err("stop", e))?;

        Ok(WebTone {
            audio_ctx: audio_ctx.clone(),
            src,
            gain,
            ends_at,
        })
    }
}

pub struct WebTone {
    audio_ctx: web::AudioContext,
    src: web::OscillatorNode,
    gain: web::GainNode,
    ends_at: f64,
}

impl ToneHandle for WebTone {
    fn is_active(&self) -> bool {
        self.audio_ctx.current_time() < self.ends_at
    }

    fn cancel(self) {
        if !self.is_active() {
            return;
        }
        let now = self.audio_ctx.current_time();
        _ = self.gain.gain().cancel_scheduled_values(now);
        _ = self.gain.gain().set_value_at_time(0.0, now);
        _ = self.src.stop_with_when(now);
        _ = self.src.disconnect();
    }
}
