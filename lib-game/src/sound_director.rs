use macroquad::audio::{Sound, play_sound_once};
use macroquad::prelude::*;

use crate::{AssetLoader, AudioCfg, Outcome};

/// A sound that can be played. When audio is turned off every
/// voice is silent, so the callers never have to check.
pub enum Voice {
    Silent,
    Loaded(Sound),
}

impl Voice {
    pub fn play(&self) {
        match self {
            Voice::Silent => (),
            Voice::Loaded(sound) => play_sound_once(sound),
        }
    }
}

pub struct SoundDirector {
    hit: Voice,
    miss: Voice,
}

impl SoundDirector {
    pub async fn new(cfg: &AudioCfg, assets: &AssetLoader) -> anyhow::Result<Self> {
        if !cfg.enabled {
            warn!("Sound disabled");
            return Ok(Self::silent());
        }

        Ok(Self {
            hit: Voice::Loaded(assets.load_sound(&cfg.hit).await?),
            miss: Voice::Loaded(assets.load_sound(&cfg.miss).await?),
        })
    }

    pub fn silent() -> Self {
        Self {
            hit: Voice::Silent,
            miss: Voice::Silent,
        }
    }

    pub fn direct(&self, outcome: Outcome) {
        match outcome {
            Outcome::Hit => self.hit.play(),
            Outcome::Miss => self.miss.play(),
        }
    }
}
