//! Image and font loading
//!
//! Everything is loaded once at startup and resized to its on-screen size,
//! so drawing is a straight copy. A missing or corrupt file is fatal.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rusttype::Font;

use crate::consts::*;
use crate::error::AssetError;
use crate::sim::Appearance;

/// Portrait files, in select-screen order
pub const CHARACTER_FILES: [&str; CHARACTER_COUNT] =
    ["char1.png", "char2.png", "char3.png", "char4.png"];
pub const PITCH_BACKGROUND_FILE: &str = "background_grass.jpg";
pub const MENU_BACKGROUND_FILE: &str = "main_menu_bg.jpg";
pub const BLUE_WINS_FILE: &str = "blue_wins.jpg";
pub const RED_WINS_FILE: &str = "red_wins.jpg";
pub const BALL_FILE: &str = "soccer_ball.png";
pub const FONT_FILE: &str = "font.ttf";

/// An RGBA image ready to blit
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Horizontally flipped copy
    pub fn mirrored(&self) -> Sprite {
        Self::new(imageops::flip_horizontal(&self.image))
    }
}

/// Load `name` from `dir`, scaled to exactly `size`
pub fn load_image(dir: &Path, name: &str, size: (u32, u32)) -> Result<Sprite, AssetError> {
    let path = dir.join(name);
    let bytes = read_asset(&path)?;
    let image = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Image {
            path: path.clone(),
            source,
        })?
        .resize_exact(size.0, size.1, FilterType::Triangle)
        .into_rgba8();
    log::debug!("Loaded {} at {}x{}", path.display(), size.0, size.1);
    Ok(Sprite::new(image))
}

/// Load a TrueType font from `dir`
pub fn load_font(dir: &Path, name: &str) -> Result<Font<'static>, AssetError> {
    let path = dir.join(name);
    let bytes = read_asset(&path)?;
    Font::try_from_vec(bytes).ok_or(AssetError::Font { path })
}

fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Every image and the font the game draws with
pub struct Assets {
    pub menu_background: Sprite,
    pub pitch_background: Sprite,
    pub blue_wins: Sprite,
    pub red_wins: Sprite,
    pub ball: Sprite,
    /// Portraits as drawn on the select screen and for player 1
    pub characters: Vec<Sprite>,
    /// Same portraits flipped, for player 2
    pub characters_mirrored: Vec<Sprite>,
    pub font: Font<'static>,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        log::info!("Loading assets from {}", dir.display());
        let screen = (FRAME_WIDTH, FRAME_HEIGHT);
        let portrait = (PORTRAIT_SIZE as u32, PORTRAIT_SIZE as u32);

        let characters = CHARACTER_FILES
            .iter()
            .map(|name| load_image(dir, name, portrait))
            .collect::<Result<Vec<_>, _>>()?;
        let characters_mirrored = characters.iter().map(Sprite::mirrored).collect();

        Ok(Self {
            menu_background: load_image(dir, MENU_BACKGROUND_FILE, screen)?,
            pitch_background: load_image(dir, PITCH_BACKGROUND_FILE, screen)?,
            blue_wins: load_image(dir, BLUE_WINS_FILE, screen)?,
            red_wins: load_image(dir, RED_WINS_FILE, screen)?,
            ball: load_image(dir, BALL_FILE, (BALL_SIZE as u32, BALL_SIZE as u32))?,
            characters,
            characters_mirrored,
            font: load_font(dir, FONT_FILE)?,
        })
    }

    /// Portrait for a player's appearance
    ///
    /// Out-of-range picks fall back to the first character.
    pub fn portrait(&self, appearance: Appearance) -> &Sprite {
        let roster = if appearance.mirrored {
            &self.characters_mirrored
        } else {
            &self.characters
        };
        roster.get(appearance.character).unwrap_or(&roster[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_mirrored_flips_columns() {
        let mut image = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let sprite = Sprite::new(image);
        let flipped = sprite.mirrored();
        assert_eq!(flipped.pixel(2, 0), [255, 0, 0, 255]);
        assert_eq!(flipped.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(flipped.mirrored(), sprite);
    }

    #[test]
    fn test_load_image_resizes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let source = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        source.save(dir.join("tile.png")).unwrap();

        let sprite = load_image(dir, "tile.png", (8, 8)).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (8, 8));
        assert_eq!(sprite.pixel(4, 4), [10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        let err = load_image(dir, "nope.png", (1, 1)).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("nope.png"));

        std::fs::write(dir.join("junk.png"), b"not an image").unwrap();
        let err = load_image(dir, "junk.png", (1, 1)).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));

        std::fs::write(dir.join("junk.ttf"), b"not a font").unwrap();
        assert!(matches!(load_font(dir, "junk.ttf"), Err(AssetError::Font { .. })));
    }
}
