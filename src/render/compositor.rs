//! CPU frame composition
//!
//! The compositor owns one RGBA buffer sized to the window and replays a
//! `Scene` into it: clear, alpha-blended sprite blits, the score digits and
//! their border. Rotated sprites are resampled from the base image at the
//! current angle each frame with the same inverse mapping the collision
//! masks use, so what is drawn is what collides.

use glam::Vec2;
use image::RgbaImage;

use super::glyphs;
use super::{Scene, SpriteKind, SCORE_BORDER_WIDTH};
use crate::assets::Assets;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::Rect;
use crate::sim::rect::rotated_bounds;

/// Window-sized RGBA pixel buffer plus the draw routines that fill it
pub struct Compositor {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Compositor {
    pub fn new() -> Self {
        let (width, height) = (WINDOW_WIDTH as usize, WINDOW_HEIGHT as usize);
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    /// Render `scene` and return the finished frame.
    ///
    /// The score overlay goes down first; entities draw over it, so a
    /// meteor crossing the readout hides the digits.
    pub fn compose(&mut self, scene: &Scene, assets: &Assets) -> &[u8] {
        self.clear(scene.clear);
        self.draw_text(&scene.score.text, scene.score.text_rect.topleft(), scene.score.color);
        self.draw_outline(&scene.score.border_rect, SCORE_BORDER_WIDTH, scene.score.color);
        for item in &scene.items {
            match item.kind {
                SpriteKind::Star => self.blit_centered(&assets.star.image, item.center),
                SpriteKind::Laser => self.blit_centered(&assets.laser.image, item.center),
                SpriteKind::Player => self.blit_centered(&assets.player.image, item.center),
                SpriteKind::Meteor => {
                    if item.rotation == 0.0 {
                        self.blit_centered(&assets.meteor.image, item.center);
                    } else {
                        let rotated = rotate_image(&assets.meteor.image, item.rotation);
                        self.blit_centered(&rotated, item.center);
                    }
                }
                SpriteKind::Explosion(frame) => {
                    if let Some(image) = assets.explosion_frames.get(frame) {
                        self.blit_centered(image, item.center);
                    }
                }
            }
        }
        &self.pixels
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Blit with the image center at `center`, clipped to the frame
    pub fn blit_centered(&mut self, image: &RgbaImage, center: Vec2) {
        let topleft = center - Vec2::new(image.width() as f32, image.height() as f32) / 2.0;
        self.blit(image, topleft.x.round() as i64, topleft.y.round() as i64);
    }

    fn blit(&mut self, image: &RgbaImage, x0: i64, y0: i64) {
        let src = image.as_raw();
        let (iw, ih) = (image.width() as i64, image.height() as i64);
        let sy_start = (-y0).max(0);
        let sy_end = ih.min(self.height as i64 - y0);
        let sx_start = (-x0).max(0);
        let sx_end = iw.min(self.width as i64 - x0);
        for sy in sy_start..sy_end {
            for sx in sx_start..sx_end {
                let s = ((sy * iw + sx) * 4) as usize;
                let alpha = src[s + 3];
                if alpha == 0 {
                    continue;
                }
                let d = (((y0 + sy) as usize * self.width) + (x0 + sx) as usize) * 4;
                if alpha == 255 {
                    self.pixels[d..d + 4].copy_from_slice(&src[s..s + 4]);
                } else {
                    // Standard over blend in integer math
                    let a = alpha as u32;
                    let inv = 255 - a;
                    for c in 0..3 {
                        let blended =
                            (src[s + c] as u32 * a + self.pixels[d + c] as u32 * inv) / 255;
                        self.pixels[d + c] = blended as u8;
                    }
                    self.pixels[d + 3] = 255;
                }
            }
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let d = (y as usize * self.width + x as usize) * 4;
            self.pixels[d..d + 4].copy_from_slice(&color);
        }
    }

    /// Rectangle outline of the given line width, drawn inward
    pub fn draw_outline(&mut self, rect: &Rect, line_width: u32, color: [u8; 4]) {
        let left = rect.left().round() as i64;
        let top = rect.top().round() as i64;
        let right = rect.right().round() as i64;
        let bottom = rect.bottom().round() as i64;
        let w = line_width as i64;
        for y in top..bottom {
            for x in left..right {
                let on_edge =
                    x < left + w || x >= right - w || y < top + w || y >= bottom - w;
                if on_edge {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a digit string with the built-in glyphs, origin at `topleft`
    pub fn draw_text(&mut self, text: &str, topleft: Vec2, color: [u8; 4]) {
        let scale = glyphs::GLYPH_SCALE as i64;
        let mut pen_x = topleft.x.round() as i64;
        let pen_y = topleft.y.round() as i64;
        for c in text.chars() {
            if let Some(rows) = glyphs::digit(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..glyphs::GLYPH_WIDTH {
                        if bits >> (glyphs::GLYPH_WIDTH - 1 - col) & 1 == 0 {
                            continue;
                        }
                        let px = pen_x + (col as i64) * scale;
                        let py = pen_y + (row as i64) * scale;
                        for dy in 0..scale {
                            for dx in 0..scale {
                                self.set_pixel(px + dx, py + dy, color);
                            }
                        }
                    }
                }
            }
            pen_x += glyphs::advance() as i64;
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

/// Resample `image` rotated by `angle_deg` about its center into a buffer
/// sized to the rotated bounding box. Nearest-neighbor, transparent fill.
pub fn rotate_image(image: &RgbaImage, angle_deg: f32) -> RgbaImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let bounds = rotated_bounds(Vec2::new(w, h), angle_deg);
    let new_w = bounds.x.ceil() as u32;
    let new_h = bounds.y.ceil() as u32;
    let a = angle_deg.to_radians();
    let (sin, cos) = (a.sin(), a.cos());
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (ncx, ncy) = (new_w as f32 / 2.0, new_h as f32 / 2.0);

    let mut out = RgbaImage::new(new_w, new_h);
    for y in 0..new_h {
        for x in 0..new_w {
            let rx = x as f32 + 0.5 - ncx;
            let ry = y as f32 + 0.5 - ncy;
            let sx = rx * cos - ry * sin + cx;
            let sy = rx * sin + ry * cos + cy;
            if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
                out.put_pixel(x, y, *image.get_pixel(sx as u32, sy as u32));
            }
        }
    }
    out
}
