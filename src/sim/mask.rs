//! Per-pixel collision masks
//!
//! A mask records which pixels of a sprite are opaque (alpha > 0). The
//! player-versus-meteor check uses mask overlap rather than bounding boxes,
//! so near-misses against a meteor's transparent corners do not kill.

use glam::Vec2;

use super::rect::rotated_bounds;

/// Bitmap of opaque pixels for one sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask from RGBA pixel data; any nonzero alpha is solid
    pub fn from_alpha(width: usize, height: usize, rgba: &[u8]) -> Self {
        debug_assert_eq!(rgba.len(), width * height * 4);
        let bits = rgba.chunks_exact(4).map(|px| px[3] > 0).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    /// Fully solid mask (useful for tests and placeholder sprites)
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    /// True if any solid pixel of `other` overlaps a solid pixel of `self`,
    /// with `other`'s top-left corner offset by `(dx, dy)` pixels from
    /// `self`'s top-left corner.
    pub fn overlaps(&self, other: &Mask, dx: i32, dy: i32) -> bool {
        let (dx, dy) = (dx as i64, dy as i64);
        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (self.width as i64).min(dx + other.width as i64);
        let y_end = (self.height as i64).min(dy + other.height as i64);
        if x_end <= x_start || y_end <= y_start {
            return false;
        }
        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x as usize, y as usize)
                    && other.get((x - dx) as usize, (y - dy) as usize)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Mask of this sprite rotated by `angle_deg` about its center.
    ///
    /// Re-derived from the unrotated mask every time it is needed, the same
    /// way the displayed image is re-derived from the base image, so the
    /// mask always matches what is on screen.
    pub fn rotated(&self, angle_deg: f32) -> Mask {
        if angle_deg == 0.0 {
            return self.clone();
        }
        let bounds = rotated_bounds(
            Vec2::new(self.width as f32, self.height as f32),
            angle_deg,
        );
        let new_w = bounds.x.ceil() as usize;
        let new_h = bounds.y.ceil() as usize;
        let a = angle_deg.to_radians();
        let (sin, cos) = (a.sin(), a.cos());
        let (cx, cy) = (self.width as f32 / 2.0, self.height as f32 / 2.0);
        let (ncx, ncy) = (new_w as f32 / 2.0, new_h as f32 / 2.0);

        let mut bits = vec![false; new_w * new_h];
        for y in 0..new_h {
            for x in 0..new_w {
                // Inverse-map the destination pixel into the source image
                let rx = x as f32 + 0.5 - ncx;
                let ry = y as f32 + 0.5 - ncy;
                let sx = rx * cos - ry * sin + cx;
                let sy = rx * sin + ry * cos + cy;
                if sx >= 0.0 && sy >= 0.0 {
                    let (sx, sy) = (sx as usize, sy as usize);
                    if sx < self.width && sy < self.height {
                        bits[y * new_w + x] = self.get(sx, sy);
                    }
                }
            }
        }
        Mask {
            width: new_w,
            height: new_h,
            bits,
        }
    }
}
