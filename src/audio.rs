//! Feedback Audio
//!
//! Plays the sound attached to a cue. Long clips are stopped after their
//! cutoff.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::models::Cue;

impl Cue {
    pub fn sound_url(&self) -> &'static str {
        match self {
            Cue::Applause => "https://actions.google.com/sounds/v1/crowds/applause_small.ogg",
            Cue::Celebration | Cue::Success => "https://impfox.webcindario.com/Audio-de-sr.mp3",
            Cue::Chime => "https://impfox.webcindario.com/orbe.mp3",
            Cue::Alert => "https://actions.google.com/sounds/v1/animals/pig_grunt.ogg",
        }
    }

    pub fn volume(&self) -> f64 {
        match self {
            Cue::Applause => 0.6,
            _ => 1.0,
        }
    }

    pub fn cutoff_ms(&self) -> Option<u32> {
        match self {
            Cue::Celebration | Cue::Success => Some(10_000),
            _ => None,
        }
    }
}

pub fn play_cue(cue: Cue) {
    let audio = match HtmlAudioElement::new_with_src(cue.sound_url()) {
        Ok(audio) => audio,
        Err(e) => {
            web_sys::console::warn_1(&format!("[AUDIO] cannot create element: {:?}", e).into());
            return;
        }
    };
    audio.set_volume(cue.volume());

    match audio.play() {
        Ok(promise) => spawn_local(async move {
            // Autoplay policies may reject playback; nothing else to do
            if let Err(e) = JsFuture::from(promise).await {
                web_sys::console::warn_1(&format!("[AUDIO] playback rejected: {:?}", e).into());
            }
        }),
        Err(e) => {
            web_sys::console::warn_1(&format!("[AUDIO] playback failed: {:?}", e).into());
            return;
        }
    }

    if let Some(ms) = cue.cutoff_ms() {
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            let _ = audio.pause();
            audio.set_current_time(0.0);
        });
    }
}
