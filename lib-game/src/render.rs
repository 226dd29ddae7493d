use macroquad::prelude::*;

use crate::{
    AssetLoader, Colorkey, GameCfg, IRect, Pose, Rgb, SceneCfg, Session, SessionState, Sprite,
    TextCfg,
};

fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Top edge of start screen line `idx`. The first line hugs the top
/// of the window, every later one is centered `size` pixels below
/// the previous line's center.
fn start_line_top(idx: usize, size: u16, height: f32) -> f32 {
    if idx == 0 {
        return 0.0;
    }

    (idx as f32 * size as f32 - height / 2.0).floor()
}

/// Draws the session. Owns every texture the game needs.
pub struct Render {
    scene: SceneCfg,
    pursuer: Sprite,
    target: Sprite,
    backdrop: Option<Texture2D>,
    miss_splash: Option<Texture2D>,
}

impl Render {
    pub async fn new(cfg: &GameCfg, assets: &AssetLoader) -> anyhow::Result<Self> {
        let pursuer = assets
            .load_sprite(&cfg.pursuer.image, cfg.pursuer.colorkey)
            .await?;
        let target = assets
            .load_sprite(&cfg.target.image, cfg.target.colorkey)
            .await?;

        let mut backdrop = None;
        if let Some(name) = &cfg.scene.backdrop {
            backdrop = Some(assets.load_sprite(name, Colorkey::TopLeft).await?.texture);
        }
        let mut miss_splash = None;
        if let Some(name) = &cfg.scene.miss_splash {
            miss_splash = Some(assets.load_sprite(name, Colorkey::TopLeft).await?.texture);
        }

        Ok(Self {
            scene: cfg.scene.clone(),
            pursuer,
            target,
            backdrop,
            miss_splash,
        })
    }

    pub fn pursuer_size(&self) -> IVec2 {
        self.pursuer.rect.size()
    }

    pub fn target_size(&self) -> IVec2 {
        self.target.rect.size()
    }

    pub fn draw(&self, session: &Session) {
        clear_background(color(self.scene.background));

        if session.state() == SessionState::Start {
            self.draw_start_screen();
            return;
        }

        self.draw_backdrop();
        Self::draw_text_top(&self.scene.title, 0.0);
        if let Some(score) = session.score().filter(|x| *x > 0) {
            self.draw_score(score);
        }

        if let (Some(splash), Some(pos)) = (&self.miss_splash, session.miss_splash()) {
            let size = vec2(splash.width(), splash.height());
            draw_texture(
                splash,
                pos.x as f32 - (size.x / 2.0).floor(),
                pos.y as f32 - (size.y / 2.0).floor(),
                WHITE,
            );
        }

        let target = session.target();
        Self::draw_sprite(&self.target.texture, target.rect(), target.pose());
        let pursuer = session.pursuer();
        Self::draw_sprite(
            &self.pursuer.texture,
            pursuer.rect(),
            Pose::new(self.pursuer_size()),
        );
    }

    fn draw_start_screen(&self) {
        let Some(lines) = &self.scene.start_screen else {
            return;
        };

        let size = self.scene.title.size;
        for (idx, line) in lines.iter().enumerate() {
            let text = TextCfg {
                text: line.clone(),
                ..self.scene.title.clone()
            };
            let dims = measure_text(&text.text, None, size, 1.0);
            Self::draw_text_top(&text, start_line_top(idx, size, dims.height));
        }
    }

    fn draw_backdrop(&self) {
        let Some(backdrop) = &self.backdrop else {
            return;
        };

        draw_texture(
            backdrop,
            ((screen_width() - backdrop.width()) / 2.0).floor(),
            ((screen_height() - backdrop.height()) / 2.0).floor(),
            WHITE,
        );
    }

    /// Horizontally centered text with its top edge at `top`.
    fn draw_text_top(text: &TextCfg, top: f32) {
        let dims = measure_text(&text.text, None, text.size, 1.0);
        draw_text(
            &text.text,
            ((screen_width() - dims.width) / 2.0).floor(),
            top + dims.offset_y,
            text.size as f32,
            color(text.color),
        );
    }

    fn draw_score(&self, score: u32) {
        let Some(cfg) = &self.scene.score else {
            return;
        };

        let message = format!("Score < {score} >");
        let dims = measure_text(&message, None, cfg.size, 1.0);
        let x = cfg.center.0 as f32 - dims.width / 2.0;
        let y = cfg.center.1 as f32 - dims.height / 2.0;

        draw_rectangle(x, y, dims.width, dims.height, color(cfg.background));
        draw_text(
            &message,
            x,
            y + dims.offset_y,
            cfg.size as f32,
            color(cfg.color),
        );
    }

    /// The image is drawn unrotated-size around the rect center and
    /// rotated in place, which is exactly what the rect's bounds
    /// were computed for.
    fn draw_sprite(texture: &Texture2D, rect: IRect, pose: Pose) {
        let size = pose.size.as_vec2();
        let center = rect.to_rect().center();

        draw_texture_ex(
            texture,
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                // Screen space has y pointing down
                rotation: -(pose.angle as f32).to_radians(),
                flip_x: pose.flipped,
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_lines_dont_overlap() {
        // Roughly what a 36px line of the default font measures
        let height = 25.0;

        let first = start_line_top(0, 36, height);
        let second = start_line_top(1, 36, height);
        assert_eq!(first, 0.0);
        assert_eq!(second, 23.0);
        // Below the first line's glyphs, centered one text size down
        assert!(second >= first + height / 2.0);
        assert!((second + height / 2.0 - 36.0).abs() <= 1.0);

        assert_eq!(start_line_top(2, 36, height), 59.0);
    }
}
