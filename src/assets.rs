//! Startup asset loading
//!
//! Two-tier policy: the four entity sprites are required and abort startup
//! with a path-naming error when missing; explosion frames, the score font
//! and all audio are optional, logged as warnings and skipped. Play proceeds
//! without them.

use std::path::{Path, PathBuf};

use glam::Vec2;
use image::RgbaImage;
use log::{info, warn};
use thiserror::Error;

use crate::sim::{Mask, Shapes, SpriteShape};

/// Explosion animation frames on disk, `0.png` through `20.png`
pub const EXPLOSION_FRAME_COUNT: usize = 21;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("required sprite missing or unreadable: {path} ({source})")]
    RequiredSprite {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Decoded pixels plus the opaque-pixel mask derived from them
#[derive(Debug, Clone)]
pub struct Sprite {
    pub image: RgbaImage,
    pub mask: Mask,
}

impl Sprite {
    fn from_image(image: RgbaImage) -> Self {
        let mask = Mask::from_alpha(
            image.width() as usize,
            image.height() as usize,
            image.as_raw(),
        );
        Self { image, mask }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn shape(&self) -> SpriteShape {
        SpriteShape {
            size: self.size(),
            mask: self.mask.clone(),
        }
    }
}

/// Everything loaded from disk at startup
#[derive(Debug)]
pub struct Assets {
    pub player: Sprite,
    pub star: Sprite,
    pub meteor: Sprite,
    pub laser: Sprite,
    /// Frames that decoded successfully, in animation order
    pub explosion_frames: Vec<RgbaImage>,
    /// Raw font file bytes, when present
    pub font: Option<Vec<u8>>,
}

impl Assets {
    /// Load all game assets from `dir` (the directory holding `images/`
    /// and `audio/`)
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let images = dir.join("images");
        let player = load_required(&images.join("player.png"))?;
        let star = load_required(&images.join("star.png"))?;
        let meteor = load_required(&images.join("meteor.png"))?;
        let laser = load_required(&images.join("laser.png"))?;

        let mut explosion_frames = Vec::with_capacity(EXPLOSION_FRAME_COUNT);
        for i in 0..EXPLOSION_FRAME_COUNT {
            let path = images.join("explosion").join(format!("{i}.png"));
            match image::open(&path) {
                Ok(img) => explosion_frames.push(img.to_rgba8()),
                Err(err) => {
                    warn!("skipping explosion frame {}: {err}", path.display());
                }
            }
        }
        if explosion_frames.is_empty() {
            warn!("no explosion frames loaded; impacts will show no effect");
        }

        let font_path = images.join("Oxanium-Bold.ttf");
        let font = match std::fs::read(&font_path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!(
                    "score font {} unavailable ({err}); using built-in digits",
                    font_path.display()
                );
                None
            }
        };

        info!(
            "assets loaded: 4 sprites, {} explosion frames, font {}",
            explosion_frames.len(),
            if font.is_some() { "from file" } else { "built-in" },
        );

        Ok(Self {
            player,
            star,
            meteor,
            laser,
            explosion_frames,
            font,
        })
    }

    /// Sprite geometry for the simulation
    pub fn shapes(&self) -> Shapes {
        let explosion_size = self
            .explosion_frames
            .first()
            .map(|f| Vec2::new(f.width() as f32, f.height() as f32))
            .unwrap_or(Vec2::ZERO);
        Shapes {
            player: self.player.shape(),
            star: self.star.shape(),
            meteor: self.meteor.shape(),
            laser: self.laser.shape(),
            explosion_size,
            explosion_frames: self.explosion_frames.len(),
        }
    }
}

fn load_required(path: &Path) -> Result<Sprite, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::RequiredSprite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Sprite::from_image(img.to_rgba8()))
}
