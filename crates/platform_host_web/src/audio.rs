//! Browser audio-cue adapter backed by `HTMLAudioElement`.

use platform_host::{HostFuture, SoundCue, SoundCueService};

const SOUND_BASE_URL: &str =
    "https://raw.githubusercontent.com/kylepaulsen/Windows-7-Sounds/master";

/// Playback volume for UI cues; kept low so overlapping cues stay subtle.
pub const CUE_VOLUME: f64 = 0.4;

/// Returns the asset URL used for `cue`.
pub fn sound_asset_url(cue: SoundCue) -> String {
    let file = match cue {
        SoundCue::Click => "Windows%20Navigation%20Start.wav",
        SoundCue::Open => "Windows%20Hardware%20Insert.wav",
        SoundCue::Close => "Windows%20Hardware%20Remove.wav",
        SoundCue::Minimize => "Windows%20Minimize.wav",
        SoundCue::Startup => "Windows%20Logon%20Sound.wav",
        SoundCue::Error => "Windows%20Ding.wav",
        SoundCue::Exclamation => "Windows%20Exclamation.wav",
    };
    format!("{SOUND_BASE_URL}/{file}")
}

#[derive(Debug, Clone, Copy, Default)]
/// Plays each cue on a fresh audio element so rapid cues can overlap.
pub struct WebSoundCueService;

impl SoundCueService for WebSoundCueService {
    fn play(&self, cue: SoundCue) -> HostFuture<'static, Result<(), String>> {
        let url = sound_asset_url(cue);
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let audio = web_sys::HtmlAudioElement::new_with_src(&url)
                    .map_err(|err| format!("audio element for `{url}` failed: {err:?}"))?;
                audio.set_volume(CUE_VOLUME);
                let promise = audio
                    .play()
                    .map_err(|err| format!("audio play for `{url}` failed: {err:?}"))?;
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("audio play for `{url}` rejected: {err:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_cue_maps_to_a_wav_asset() {
        for cue in SoundCue::ALL {
            let url = sound_asset_url(cue);
            assert!(url.starts_with(SOUND_BASE_URL));
            assert!(url.ends_with(".wav"), "{url}");
        }
        assert_eq!(
            sound_asset_url(SoundCue::Minimize),
            format!("{SOUND_BASE_URL}/Windows%20Minimize.wav")
        );
    }
}
