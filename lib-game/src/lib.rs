mod assets;
mod cfg;
mod clock;
mod geom;
mod input;
mod motion;
mod pose;
mod pursuer;
mod render;
mod session;
mod sound_director;
mod target;

pub use assets::*;
pub use cfg::*;
pub use clock::*;
pub use geom::*;
pub use input::*;
pub use motion::*;
pub use pose::*;
pub use pursuer::*;
pub use render::*;
pub use session::*;
pub use sound_director::*;
pub use target::*;

use anyhow::Context;
use macroquad::prelude::*;
use quad_dbg::Debug;

/// Window settings for the variant. Falls back to the built-in
/// config if the override can't be read, [App::new] reports that
/// properly later.
pub fn window_conf(variant: GameVariant) -> Conf {
    let cfg = GameCfg::load(variant).unwrap_or_else(|_| GameCfg::for_variant(variant));

    Conf {
        window_title: cfg.window.title,
        window_width: cfg.window.width,
        window_height: cfg.window.height,
        window_resizable: false,
        high_dpi: false,
        fullscreen: false,
        ..Default::default()
    }
}

impl GameCfg {
    /// Reads `config/<variant>.ron` if there is one.
    pub fn load(variant: GameVariant) -> anyhow::Result<Self> {
        let path = variant.cfg_path();
        match std::fs::read_to_string(&path) {
            Ok(src) => Self::from_ron(&src).with_context(|| format!("Reading {path}")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::for_variant(variant)),
            Err(e) => Err(e).with_context(|| format!("Reading {path}")),
        }
    }
}

/// The app runs all the boilerplate code to make a game session tick.
/// The following features are provided:
/// * Asset loading
/// * Consistent tickrate timing
/// * Input capture
/// * Sound playing
/// * Drawing of the session and the debug overlay
pub struct App {
    variant: GameVariant,
    session: Session,
    render: Render,
    sound: SoundDirector,
    ticker: Ticker,
    debug: Debug,
    show_debug: bool,
}

impl App {
    pub async fn new(variant: GameVariant) -> anyhow::Result<Self> {
        let cfg = GameCfg::load(variant)?;
        info!("Config for {}: {:?}", variant.name(), cfg.target.motion);

        let assets = AssetLoader::new(cfg.assets_dir.as_str());
        let render = Render::new(&cfg, &assets).await?;
        let sound = SoundDirector::new(&cfg.audio, &assets).await?;

        let seed = cfg
            .seed
            .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
        info!("Seed: {seed}");

        let session = Session::from_cfg(&cfg, render.pursuer_size(), render.target_size(), seed);

        Ok(Self {
            variant,
            session,
            render,
            sound,
            ticker: Ticker::new(cfg.tickrate),
            debug: Debug::new(),
            show_debug: false,
        })
    }

    /// Runs the session until the player quits.
    pub async fn run(mut self) {
        show_mouse(false);
        prevent_quit();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        while self.session.is_running() {
            let input = InputModel::capture();
            self.handle_input(&input);
            if !self.session.is_running() {
                break;
            }

            if self.ticker.advance(get_frame_time()) {
                self.session.update(input.pointer);
            }

            self.render.draw(&self.session);
            if self.show_debug {
                self.debug_info();
            }

            next_frame().await
        }

        info!("{} session over", self.variant.name());
    }

    fn handle_input(&mut self, input: &InputModel) {
        for event in input.events.iter().copied() {
            if event == InputEvent::KeyDown(Key::DebugToggle) {
                self.show_debug = !self.show_debug;
            }

            if let Some(outcome) = self.session.handle(event, input.pointer) {
                self.sound.direct(outcome);
            }
        }
    }

    fn debug_info(&mut self) {
        let pursuer = self.session.pursuer();
        let target = self.session.target();

        self.debug.new_frame();
        self.debug.put_debug_line(&format!("FPS: {}", get_fps()));
        self.debug.put_debug_line(&format!(
            "Pursuer: {:?} extended={}",
            pursuer.rect(),
            pursuer.is_extended()
        ));
        self.debug
            .put_debug_line(&format!("Target: {:?} {:?}", target.rect(), target.state()));
        if let Motion::Swim(swim) = target.motion() {
            self.debug.put_debug_line(&format!(
                "v={} a={} {:?} phase={}",
                swim.velocity(),
                swim.accel(),
                swim.direction(),
                swim.phase()
            ));
        }
        if let Some(score) = self.session.score() {
            self.debug.put_debug_line(&format!("Score: {score}"));
        }
        self.debug.draw_events();
    }
}
