use anyhow::Context;
use macroquad::audio::{Sound, load_sound};
use macroquad::prelude::*;

use crate::{Colorkey, IRect};

/// A loaded image together with its bounding rect.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub texture: Texture2D,
    pub rect: IRect,
}

/// Makes every pixel matching the key fully transparent.
pub fn apply_colorkey(image: &mut Image, key: Colorkey) {
    let key = match key {
        Colorkey::None => return,
        Colorkey::Rgb((r, g, b)) => [r, g, b],
        Colorkey::TopLeft => match image.bytes.get(0..3) {
            Some(&[r, g, b]) => [r, g, b],
            _ => return,
        },
    };

    for px in image.bytes.chunks_exact_mut(4) {
        if px[..3] == key {
            px[3] = 0;
        }
    }
}

/// Resolves asset names against the asset directory and loads
/// them. Any failure here is fatal for the game.
pub struct AssetLoader {
    dir: String,
}

impl AssetLoader {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> String {
        if self.dir.is_empty() {
            return name.to_owned();
        }
        format!("{}/{}", self.dir.trim_end_matches('/'), name)
    }

    pub async fn load_sprite(&self, name: &str, key: Colorkey) -> anyhow::Result<Sprite> {
        let path = self.path(name);
        let mut image = load_image(&path)
            .await
            .with_context(|| format!("Cannot load image: {path}"))?;
        apply_colorkey(&mut image, key);

        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        info!("Loaded {path} ({}x{})", image.width, image.height);

        Ok(Sprite {
            texture,
            rect: IRect::new(0, 0, image.width as i32, image.height as i32),
        })
    }

    pub async fn load_sound(&self, name: &str) -> anyhow::Result<Sound> {
        let path = self.path(name);
        let sound = load_sound(&path)
            .await
            .with_context(|| format!("Cannot load sound: {path}"))?;
        info!("Loaded {path}");

        Ok(sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_2x1(left: [u8; 4], right: [u8; 4]) -> Image {
        Image {
            bytes: [left, right].concat(),
            width: 2,
            height: 1,
        }
    }

    #[test]
    fn topleft_key() {
        let mut image = image_2x1([1, 2, 3, 255], [4, 5, 6, 255]);
        apply_colorkey(&mut image, Colorkey::TopLeft);
        assert_eq!(image.bytes, [1, 2, 3, 0, 4, 5, 6, 255]);
    }

    #[test]
    fn explicit_key() {
        let mut image = image_2x1([1, 2, 3, 255], [4, 5, 6, 255]);
        apply_colorkey(&mut image, Colorkey::Rgb((4, 5, 6)));
        assert_eq!(image.bytes, [1, 2, 3, 255, 4, 5, 6, 0]);

        let mut image = image_2x1([1, 2, 3, 255], [4, 5, 6, 255]);
        apply_colorkey(&mut image, Colorkey::None);
        assert_eq!(image.bytes, [1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn asset_paths() {
        assert_eq!(AssetLoader::new("assets").path("fist.png"), "assets/fist.png");
        assert_eq!(AssetLoader::new("assets/").path("fist.png"), "assets/fist.png");
        assert_eq!(AssetLoader::new("").path("fist.png"), "fist.png");
    }
}
