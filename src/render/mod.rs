//! Frame description and composition
//!
//! `build_scene` turns a `World` into a plain list of draw commands; the
//! compositor turns that list into RGBA pixels. The split keeps frame
//! content assertable in tests without touching any pixel buffer.

pub mod compositor;
pub mod glyphs;

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Rect, World};

/// Which image a draw command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Star,
    Meteor,
    Laser,
    Player,
    /// Explosion animation frame by index
    Explosion(usize),
}

/// One sprite blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub kind: SpriteKind,
    /// Center of the (possibly rotated) sprite on screen
    pub center: Vec2,
    /// Clockwise rotation in degrees; zero for everything but meteors
    pub rotation: f32,
}

/// Score readout geometry: digits anchored midbottom, boxed border around
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOverlay {
    pub text: String,
    /// Rect the digits occupy
    pub text_rect: Rect,
    /// Outline drawn around the text
    pub border_rect: Rect,
    pub color: [u8; 4],
}

/// Everything needed to draw one frame, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear: [u8; 4],
    pub items: Vec<DrawItem>,
    pub score: ScoreOverlay,
}

/// Border line width around the score text
pub const SCORE_BORDER_WIDTH: u32 = 5;
/// Score text bottom-center anchor: horizontally centered, 50 px above
/// the bottom edge, then the border shifts 8 px further up
const SCORE_ANCHOR: Vec2 = Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 - 50.0);

/// Describe one frame of the given world
pub fn build_scene(world: &World) -> Scene {
    let mut items = Vec::with_capacity(
        world.stars.len() + world.meteors.len() + world.lasers.len() + world.explosions.len() + 1,
    );

    for star in &world.stars {
        items.push(DrawItem {
            kind: SpriteKind::Star,
            center: star.rect.center,
            rotation: 0.0,
        });
    }
    for meteor in &world.meteors {
        items.push(DrawItem {
            kind: SpriteKind::Meteor,
            center: meteor.pos,
            rotation: meteor.rotation,
        });
    }
    for laser in &world.lasers {
        items.push(DrawItem {
            kind: SpriteKind::Laser,
            center: laser.rect.center,
            rotation: 0.0,
        });
    }
    items.push(DrawItem {
        kind: SpriteKind::Player,
        center: world.player.rect.center,
        rotation: 0.0,
    });
    for explosion in &world.explosions {
        let last = world.shapes.explosion_frames.saturating_sub(1);
        let frame = (explosion.index as usize).min(last);
        items.push(DrawItem {
            kind: SpriteKind::Explosion(frame),
            center: explosion.rect.center,
            rotation: 0.0,
        });
    }

    Scene {
        clear: BACKGROUND_COLOR,
        items,
        score: score_overlay(world.score()),
    }
}

fn score_overlay(score: u64) -> ScoreOverlay {
    let text = score.to_string();
    let size = glyphs::text_size(&text);
    let text_rect = Rect::from_midbottom(SCORE_ANCHOR, size);
    let border_rect = text_rect.inflate(20.0, 10.0).translate(Vec2::new(0.0, -8.0));
    ScoreOverlay {
        text,
        text_rect,
        border_rect,
        color: SCORE_COLOR,
    }
}
