use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{HitRegion, MotionCfg};

/// The two games sharing this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    Chimp,
    Shark,
}

impl GameVariant {
    pub fn name(self) -> &'static str {
        match self {
            GameVariant::Chimp => "chimp",
            GameVariant::Shark => "shark",
        }
    }

    pub fn cfg_path(self) -> String {
        format!("config/{}.ron", self.name())
    }
}

pub type Rgb = (u8, u8, u8);

/// Which pixels of a loaded image become transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colorkey {
    None,
    /// Whatever color the top-left pixel has.
    TopLeft,
    Rgb(Rgb),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameCfg {
    pub window: WindowCfg,
    pub scene: SceneCfg,
    pub audio: AudioCfg,
    pub pursuer: PursuerCfg,
    pub target: TargetCfg,
    pub tickrate: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub assets_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowCfg {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCfg {
    pub text: String,
    pub size: u16,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCfg {
    pub size: u16,
    pub color: Rgb,
    pub background: Rgb,
    pub center: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCfg {
    pub background: Rgb,
    pub title: TextCfg,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub miss_splash: Option<String>,
    #[serde(default)]
    pub start_screen: Option<Vec<String>>,
    #[serde(default)]
    pub score: Option<ScoreCfg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioCfg {
    pub enabled: bool,
    pub hit: String,
    pub miss: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PursuerCfg {
    pub image: String,
    pub colorkey: Colorkey,
    pub thrust: (i32, i32),
    pub hit_region: HitRegion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetCfg {
    pub image: String,
    pub colorkey: Colorkey,
    pub spawn: (i32, i32),
    pub spin_step: i32,
    pub motion: MotionCfg,
}

impl GameCfg {
    pub fn for_variant(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Chimp => Self::chimp(),
            GameVariant::Shark => Self::shark(),
        }
    }

    /// Parses a full config from RON. Every section must be present.
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        let cfg: GameCfg = ron::from_str(src).context("Malformed config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_ron(&self) -> anyhow::Result<String> {
        let out = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        Ok(out)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            anyhow::bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        if self.tickrate == 0 {
            anyhow::bail!("tickrate must be positive");
        }
        if self.target.spin_step <= 0 {
            anyhow::bail!("spin_step must be positive, got {}", self.target.spin_step);
        }
        if let MotionCfg::Swim {
            max_velocity,
            redirect_period,
            ..
        } = self.target.motion
        {
            if max_velocity < 0.0 {
                anyhow::bail!("max_velocity must not be negative, got {max_velocity}");
            }
            if redirect_period == 0 {
                anyhow::bail!("redirect_period must be positive");
            }
        }

        Ok(())
    }

    fn chimp() -> Self {
        Self {
            window: WindowCfg {
                title: "Chimps".to_owned(),
                width: 468,
                height: 60,
            },
            scene: SceneCfg {
                background: (0, 0, 0),
                title: TextCfg {
                    text: "Slap the Chimp".to_owned(),
                    size: 24,
                    color: (250, 250, 250),
                },
                backdrop: None,
                miss_splash: None,
                start_screen: None,
                score: None,
            },
            audio: AudioCfg {
                enabled: true,
                hit: "punched.wav".to_owned(),
                miss: "gasp.wav".to_owned(),
            },
            pursuer: PursuerCfg {
                image: "fist.png".to_owned(),
                colorkey: Colorkey::TopLeft,
                thrust: (5, 10),
                hit_region: HitRegion::Inflate { dx: -5, dy: 5 },
            },
            target: TargetCfg {
                image: "chimp.png".to_owned(),
                colorkey: Colorkey::TopLeft,
                spawn: (10, 10),
                spin_step: 12,
                motion: MotionCfg::Walk { speed: 9 },
            },
            tickrate: 60,
            seed: None,
            assets_dir: "assets".to_owned(),
        }
    }

    fn shark() -> Self {
        Self {
            window: WindowCfg {
                title: "Spear the Shark".to_owned(),
                width: 468,
                height: 468,
            },
            scene: SceneCfg {
                background: (250, 250, 250),
                title: TextCfg {
                    text: "Spear the Shark".to_owned(),
                    size: 36,
                    color: (10, 10, 10),
                },
                backdrop: Some("waves_small.png".to_owned()),
                miss_splash: Some("missed.png".to_owned()),
                start_screen: Some(vec![
                    "Press The Space Bar To".to_owned(),
                    "Start The Game".to_owned(),
                ]),
                score: Some(ScoreCfg {
                    size: 24,
                    color: (255, 255, 255),
                    background: (0, 0, 255),
                    center: (468 / 2, 468 - 36),
                }),
            },
            audio: AudioCfg {
                enabled: true,
                hit: "oow.wav".to_owned(),
                miss: "whack.wav".to_owned(),
            },
            pursuer: PursuerCfg {
                image: "spear.png".to_owned(),
                colorkey: Colorkey::TopLeft,
                thrust: (5, 10),
                hit_region: HitRegion::Tip { w: 10, h: 10 },
            },
            target: TargetCfg {
                image: "shark.png".to_owned(),
                colorkey: Colorkey::TopLeft,
                spawn: (10, 10),
                spin_step: 12,
                motion: MotionCfg::Swim {
                    accel: 5.0,
                    max_velocity: 5.0,
                    sample_interval: 0.1,
                    redirect_period: 5,
                },
            },
            tickrate: 60,
            seed: None,
            assets_dir: "assets".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        for variant in [GameVariant::Chimp, GameVariant::Shark] {
            GameCfg::for_variant(variant).validate().unwrap();
        }
    }

    #[test]
    fn ron_roundtrip_keeps_overrides() {
        let mut cfg = GameCfg::for_variant(GameVariant::Shark);
        cfg.seed = Some(42);
        cfg.audio.enabled = false;

        let src = cfg.to_ron().unwrap();
        assert_eq!(GameCfg::from_ron(&src).unwrap(), cfg);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(GameCfg::from_ron("(window: ())").is_err());

        let mut cfg = GameCfg::for_variant(GameVariant::Chimp);
        cfg.tickrate = 0;
        assert!(GameCfg::from_ron(&cfg.to_ron().unwrap()).is_err());
    }
}
