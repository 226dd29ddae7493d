use log::{debug, info};
use macroquad::math::{IVec2, ivec2};

use crate::{GameCfg, IRect, Motion, Pursuer, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    DebugToggle,
    Other,
}

/// Everything the session reacts to, in the order it happened
/// during the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerDown,
    PointerUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the player to press space.
    Start,
    Active,
    Done,
}

/// One game session: the two sprites plus the bookkeeping
/// around them. Has no idea how anything gets drawn or played.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    pursuer: Pursuer,
    target: Target,
    score: Option<u32>,
    last_outcome: Option<Outcome>,
    last_miss: Option<IVec2>,
    track_misses: bool,
}

impl Session {
    pub fn new(pursuer: Pursuer, target: Target) -> Self {
        Self {
            state: SessionState::Active,
            pursuer,
            target,
            score: None,
            last_outcome: None,
            last_miss: None,
            track_misses: false,
        }
    }

    /// Builds the session described by `cfg`. The sprite sizes come
    /// from the loaded images, the rest from the config.
    pub fn from_cfg(cfg: &GameCfg, pursuer_size: IVec2, target_size: IVec2, seed: u64) -> Self {
        let (tx, ty) = cfg.pursuer.thrust;
        let (sx, sy) = cfg.target.spawn;
        let arena = IRect::new(0, 0, cfg.window.width, cfg.window.height);

        let pursuer = Pursuer::new(pursuer_size, ivec2(tx, ty), cfg.pursuer.hit_region);
        let target = Target::new(
            target_size,
            ivec2(sx, sy),
            arena,
            cfg.target.spin_step,
            Motion::new(cfg.target.motion, seed),
        );

        let mut session = Self::new(pursuer, target);
        if cfg.scene.start_screen.is_some() {
            session.state = SessionState::Start;
        }
        if cfg.scene.score.is_some() {
            session.score = Some(0);
        }
        session.track_misses = cfg.scene.miss_splash.is_some();

        session
    }

    pub fn with_score(mut self) -> Self {
        self.score = Some(0);
        self
    }

    pub fn with_miss_tracking(mut self) -> Self {
        self.track_misses = true;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != SessionState::Done
    }

    pub fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Where the splash decal goes, if the last attempt was a miss.
    pub fn miss_splash(&self) -> Option<IVec2> {
        self.last_miss
    }

    /// Reacts to a single input event. Returns the outcome of an
    /// attack, so the caller can play the matching sound.
    pub fn handle(&mut self, event: InputEvent, pointer: IVec2) -> Option<Outcome> {
        match (self.state, event) {
            (SessionState::Done, _) => None,
            (_, InputEvent::Quit) | (_, InputEvent::KeyDown(Key::Escape)) => {
                info!("Quit requested");
                self.state = SessionState::Done;
                None
            }
            (SessionState::Start, InputEvent::KeyDown(Key::Space)) => {
                info!("Starting the game");
                self.state = SessionState::Active;
                None
            }
            (SessionState::Start, _) => None,
            (SessionState::Active, InputEvent::PointerDown) => Some(self.attack(pointer)),
            (SessionState::Active, InputEvent::PointerUp) => {
                self.pursuer.release();
                None
            }
            (SessionState::Active, InputEvent::KeyDown(_)) => None,
        }
    }

    /// Advances both sprites by one tick.
    pub fn update(&mut self, pointer: IVec2) {
        if self.state != SessionState::Active {
            return;
        }

        self.pursuer.update(pointer);
        self.target.update();
    }

    fn attack(&mut self, pointer: IVec2) -> Outcome {
        if !self.pursuer.activate(&self.target) {
            debug!("Miss at {pointer}");
            self.last_outcome = Some(Outcome::Miss);
            if self.track_misses {
                self.last_miss = Some(pointer);
            }
            return Outcome::Miss;
        }

        self.target.hit();
        if let Some(score) = &mut self.score {
            *score += 1;
            debug!("Hit, score is now {score}");
        }
        self.last_outcome = Some(Outcome::Hit);
        self.last_miss = None;

        Outcome::Hit
    }
}
