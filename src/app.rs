//! Per-frame orchestration
//!
//! `Game` wires the pieces together: input snapshot in, one simulation
//! tick, events out to the audio layer, then a composed frame for the
//! platform to present.

use log::info;

use crate::assets::Assets;
use crate::audio::Audio;
use crate::render::compositor::Compositor;
use crate::render::build_scene;
use crate::sim::{tick, GameEvent, TickInput, World};

pub struct Game {
    pub world: World,
    assets: Assets,
    audio: Audio,
    compositor: Compositor,
}

impl Game {
    pub fn new(assets: Assets, audio: Audio, seed: u64) -> Self {
        let world = World::new(assets.shapes(), seed);
        Self {
            world,
            assets,
            audio,
            compositor: Compositor::new(),
        }
    }

    /// False once the run is over and the process should exit
    pub fn running(&self) -> bool {
        self.world.running
    }

    /// Advance the simulation by `dt` seconds and route the tick's events.
    /// A long stall simply arrives as a large `dt`; the clock and the spawn
    /// timer track real elapsed time with no catch-up stepping.
    pub fn advance(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.world, input, dt);
        for event in self.world.drain_events() {
            if event == GameEvent::PlayerHit {
                info!("meteor hit; final score {}", self.world.score());
            }
            self.audio.handle_event(event);
        }
    }

    /// Compose the current frame; the returned buffer is window-sized RGBA
    pub fn render_frame(&mut self) -> &[u8] {
        let scene = build_scene(&self.world);
        self.compositor.compose(&scene, &self.assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use crate::sim::Mask;
    use glam::Vec2;
    use image::RgbaImage;

    fn sprite(w: u32, h: u32) -> Sprite {
        let image = RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
        let mask = Mask::from_alpha(w as usize, h as usize, image.as_raw());
        Sprite { image, mask }
    }

    fn game() -> Game {
        let assets = Assets {
            player: sprite(112, 75),
            star: sprite(24, 24),
            meteor: sprite(101, 84),
            laser: sprite(9, 54),
            explosion_frames: vec![RgbaImage::new(32, 32)],
            font: None,
        };
        Game::new(assets, Audio::disabled(), 77)
    }

    #[test]
    fn test_stalled_frame_advances_by_full_elapsed_time() {
        let mut game = game();
        // Park the player away from the spawn corridor
        game.world.player.rect.center = Vec2::new(80.0, 660.0);
        game.advance(&TickInput::default(), 2.0);
        assert!((game.world.clock_ms - 2000.0).abs() < 1e-3);
        // One spawn per 500 ms of elapsed time, stall or not
        assert_eq!(game.world.meteors.len(), 4);
    }

    #[test]
    fn test_advance_renders_a_frame_without_panicking() {
        let mut game = game();
        game.advance(&TickInput::default(), 1.0 / 60.0);
        let frame = game.render_frame();
        assert_eq!(
            frame.len(),
            (crate::consts::WINDOW_WIDTH * crate::consts::WINDOW_HEIGHT * 4) as usize
        );
    }
}
