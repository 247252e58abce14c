//! Audio collaborator: looping music, a score cue and feedback chirps
//!
//! Every call is fire-and-forget. Playback failures (autoplay policy, missing
//! assets) are logged and never reach game logic.

pub const MUSIC_SRC: &str = "OhLaLa.m4a";
pub const MUSIC_VOLUME: f64 = 0.6;
pub const SCORE_CUE_SRC: &str = "score.wav";
pub const SCORE_CUE_VOLUME: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: f64,
    pub waveform: Waveform,
    pub gain: f32,
}

impl Tone {
    pub const ASCEND: Tone = Tone {
        frequency: 880.0,
        duration: 0.04,
        waveform: Waveform::Triangle,
        gain: 0.03,
    };

    pub const DESCEND: Tone = Tone {
        frequency: 520.0,
        duration: 0.04,
        waveform: Waveform::Triangle,
        gain: 0.03,
    };

    /// Chirp for a newly held direction
    pub fn for_intent(dir: i8) -> Option<Tone> {
        match dir.signum() {
            -1 => Some(Tone::ASCEND),
            1 => Some(Tone::DESCEND),
            _ => None,
        }
    }
}

pub trait AudioSink {
    /// Create the tone synthesizer if it does not exist yet
    fn ensure_context(&mut self);
    /// No-op until `ensure_context` has succeeded
    fn play_tone(&mut self, tone: Tone);
    fn restart_music(&mut self);
    fn pause_music(&mut self);
    fn play_score_cue(&mut self);
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AudioContext, HtmlAudioElement, OscillatorType};

    pub struct WebAudio {
        context: Option<AudioContext>,
        music: Option<HtmlAudioElement>,
        score_cue: Option<HtmlAudioElement>,
    }

    impl WebAudio {
        pub fn new() -> Self {
            let music = load_clip(MUSIC_SRC, MUSIC_VOLUME, true);
            let score_cue = load_clip(SCORE_CUE_SRC, SCORE_CUE_VOLUME, false);
            Self {
                context: None,
                music,
                score_cue,
            }
        }

        fn synth(&self, tone: Tone) -> Result<(), JsValue> {
            let Some(ctx) = &self.context else {
                return Ok(());
            };
            let osc = ctx.create_oscillator()?;
            let gain = ctx.create_gain()?;
            osc.set_type(match tone.waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Triangle => OscillatorType::Triangle,
            });
            osc.frequency().set_value(tone.frequency);
            gain.gain().set_value(tone.gain);
            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;
            osc.start()?;
            osc.stop_with_when(ctx.current_time() + tone.duration)?;
            Ok(())
        }
    }

    fn load_clip(src: &str, volume: f64, looping: bool) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(src) {
            Ok(clip) => {
                clip.set_loop(looping);
                clip.set_volume(volume);
                Some(clip)
            }
            Err(e) => {
                tracing::warn!(?e, src, "failed to create audio element");
                None
            }
        }
    }

    /// Rewind and play; a rejected play promise is only logged
    fn replay(clip: &HtmlAudioElement) {
        clip.set_current_time(0.0);
        match clip.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!(?e, "playback rejected");
                }
            }),
            Err(e) => tracing::warn!(?e, "playback failed"),
        }
    }

    impl AudioSink for WebAudio {
        fn ensure_context(&mut self) {
            if self.context.is_some() {
                return;
            }
            match AudioContext::new() {
                Ok(ctx) => self.context = Some(ctx),
                Err(e) => tracing::warn!(?e, "audio context unavailable"),
            }
        }

        fn play_tone(&mut self, tone: Tone) {
            if let Err(e) = self.synth(tone) {
                tracing::warn!(?e, "tone failed");
            }
        }

        fn restart_music(&mut self) {
            if let Some(music) = &self.music {
                replay(music);
            }
        }

        fn pause_music(&mut self) {
            if let Some(music) = &self.music {
                if let Err(e) = music.pause() {
                    tracing::warn!(?e, "failed to pause music");
                }
            }
        }

        fn play_score_cue(&mut self) {
            if let Some(cue) = &self.score_cue {
                replay(cue);
            }
        }
    }
}
