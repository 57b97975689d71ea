//! World state and entity types
//!
//! The `World` exclusively owns every entity collection. Entities never hold
//! references to each other; collisions are resolved through collection
//! membership only, and a destroyed entity is simply removed from its
//! collection before the next tick touches it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::mask::Mask;
use super::rect::{Rect, rotated_bounds};
use crate::consts::*;

/// Geometry the simulation needs for one sprite kind
#[derive(Debug, Clone)]
pub struct SpriteShape {
    /// Base (unrotated) image size in pixels
    pub size: Vec2,
    /// Opaque-pixel mask of the base image
    pub mask: Mask,
}

impl SpriteShape {
    /// Fully solid shape; tests and placeholder art use this
    pub fn solid(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            mask: Mask::filled(width as usize, height as usize),
        }
    }
}

/// All sprite geometry handed to the simulation at startup.
///
/// Pixels stay with the renderer; the sim only ever sees sizes and masks,
/// which keeps every tick testable without loading a single image.
#[derive(Debug, Clone)]
pub struct Shapes {
    pub player: SpriteShape,
    pub star: SpriteShape,
    pub meteor: SpriteShape,
    pub laser: SpriteShape,
    /// Size of one explosion frame (all frames share it)
    pub explosion_size: Vec2,
    /// Number of loaded explosion frames; zero disables the effect
    pub explosion_frames: usize,
}

impl Shapes {
    /// Placeholder geometry with everything solid; used by tests
    pub fn stub() -> Self {
        Self {
            player: SpriteShape::solid(112.0, 75.0),
            star: SpriteShape::solid(24.0, 24.0),
            meteor: SpriteShape::solid(101.0, 84.0),
            laser: SpriteShape::solid(9.0, 54.0),
            explosion_size: Vec2::new(96.0, 96.0),
            explosion_frames: 21,
        }
    }
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Zero or unit-length movement direction, rebuilt from input each tick
    pub direction: Vec2,
    pub speed: f32,
    /// Fire gate: true when a shot will be accepted
    pub can_shoot: bool,
    /// Clock time of the last accepted shot (ms)
    pub last_shot_ms: f64,
}

impl Player {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, size),
            direction: Vec2::ZERO,
            speed: PLAYER_SPEED,
            can_shoot: true,
            last_shot_ms: 0.0,
        }
    }
}

/// A player-fired laser bolt; moves straight up, dies above the top edge
#[derive(Debug, Clone)]
pub struct Laser {
    pub id: u32,
    pub rect: Rect,
}

/// A falling meteor
#[derive(Debug, Clone)]
pub struct Meteor {
    pub id: u32,
    /// Logical center; the displayed rect is re-derived from this and the
    /// current rotation rather than mutated in place
    pub pos: Vec2,
    /// Fixed at spawn: horizontal jitter in [-0.5, 0.5], vertical component
    /// exactly 1, deliberately not renormalized
    pub direction: Vec2,
    pub speed: f32,
    /// Accumulated rotation in degrees
    pub rotation: f32,
    /// Degrees per second
    pub rotation_rate: f32,
    /// Clock time at spawn (ms)
    pub spawned_ms: f64,
    /// Base image size; rotated bounds are a pure function of this and the
    /// current angle, so repeated rotation accumulates no error
    pub base_size: Vec2,
}

impl Meteor {
    /// Bounding rect of the base image rotated to the current angle,
    /// centered on the logical position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, rotated_bounds(self.base_size, self.rotation))
    }

    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.spawned_ms
    }
}

/// A transient explosion animation; never moves, never collides
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    /// Fractional frame index; the displayed frame is its floor
    pub index: f32,
}

/// A static background star
#[derive(Debug, Clone)]
pub struct Star {
    pub rect: Rect,
}

/// Things that happened during a tick that the outside world may react to
/// (sound playback, logging). Purely informational; gameplay never depends
/// on whether anyone consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player fired a laser
    LaserFired,
    /// A laser destroyed one or more meteors
    MeteorShattered,
    /// A meteor hit the player; the run is over
    PlayerHit,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct World {
    /// Sprite geometry (sizes and masks)
    pub shapes: Shapes,
    /// Milliseconds since the run started
    pub clock_ms: f64,
    /// False once the player dies or a close signal arrives
    pub running: bool,
    pub player: Player,
    pub lasers: Vec<Laser>,
    pub meteors: Vec<Meteor>,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    /// Elapsed time not yet converted into meteor spawns (ms)
    pub spawn_accum_ms: f64,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Create a world with the player centered and the starfield scattered
    pub fn new(shapes: Shapes, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let center = Vec2::new(
                    rng.random_range(0..=WINDOW_WIDTH as i32) as f32,
                    rng.random_range(0..=WINDOW_HEIGHT as i32) as f32,
                );
                Star {
                    rect: Rect::from_center(center, shapes.star.size),
                }
            })
            .collect();
        let player = Player::new(
            Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0),
            shapes.player.size,
        );
        Self {
            shapes,
            clock_ms: 0.0,
            running: true,
            player,
            lasers: Vec::new(),
            meteors: Vec::new(),
            explosions: Vec::new(),
            stars,
            spawn_accum_ms: 0.0,
            events: Vec::new(),
            rng,
            next_id: 1,
        }
    }

    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Elapsed time in deciseconds, which is the displayed score
    pub fn score(&self) -> u64 {
        (self.clock_ms / SCORE_DIVISOR_MS) as u64
    }

    /// Spawn one laser with its bottom-center at the player's top-center
    pub fn spawn_laser(&mut self) {
        let id = self.next_entity_id();
        let rect = Rect::from_midbottom(self.player.rect.midtop(), self.shapes.laser.size);
        self.lasers.push(Laser { id, rect });
        self.events.push(GameEvent::LaserFired);
    }

    /// Spawn one meteor at a random x above the visible top edge, with a
    /// downward-biased direction and randomized speed and rotation rate
    pub fn spawn_meteor(&mut self) {
        let id = self.next_entity_id();
        let pos = Vec2::new(
            self.rng.random_range(0..=WINDOW_WIDTH as i32) as f32,
            self.rng.random_range(METEOR_SPAWN_Y_MIN..=METEOR_SPAWN_Y_MAX) as f32,
        );
        let direction = Vec2::new(self.rng.random_range(-0.5..=0.5), 1.0);
        let speed = self.rng.random_range(METEOR_SPEED_MIN..=METEOR_SPEED_MAX) as f32;
        let rotation_rate =
            self.rng.random_range(METEOR_ROTATION_MIN..=METEOR_ROTATION_MAX) as f32;
        self.meteors.push(Meteor {
            id,
            pos,
            direction,
            speed,
            rotation: 0.0,
            rotation_rate,
            spawned_ms: self.clock_ms,
            base_size: self.shapes.meteor.size,
        });
    }

    /// Spawn an explosion effect centered at `pos`, if any frames loaded
    pub fn spawn_explosion(&mut self, pos: Vec2) {
        if self.shapes.explosion_frames == 0 {
            return;
        }
        self.explosions.push(Explosion {
            rect: Rect::from_center(pos, self.shapes.explosion_size),
            index: 0.0,
        });
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(Shapes::stub(), 7);
        assert!(world.running);
        assert_eq!(world.stars.len(), STAR_COUNT);
        assert_eq!(world.player.rect.center, Vec2::new(640.0, 360.0));
        assert!(world.meteors.is_empty());
        assert!(world.lasers.is_empty());
        for star in &world.stars {
            let c = star.rect.center;
            assert!(c.x >= 0.0 && c.x <= WINDOW_WIDTH as f32);
            assert!(c.y >= 0.0 && c.y <= WINDOW_HEIGHT as f32);
        }
    }

    #[test]
    fn test_star_field_is_seeded() {
        let a = World::new(Shapes::stub(), 42);
        let b = World::new(Shapes::stub(), 42);
        let c = World::new(Shapes::stub(), 43);
        assert_eq!(a.stars[0].rect.center, b.stars[0].rect.center);
        let all_equal = a
            .stars
            .iter()
            .zip(&c.stars)
            .all(|(x, y)| x.rect.center == y.rect.center);
        assert!(!all_equal);
    }

    #[test]
    fn test_laser_spawns_at_player_midtop() {
        let mut world = World::new(Shapes::stub(), 1);
        world.spawn_laser();
        let laser = &world.lasers[0];
        assert_eq!(laser.rect.midbottom(), world.player.rect.midtop());
        assert_eq!(world.drain_events(), vec![GameEvent::LaserFired]);
    }

    #[test]
    fn test_meteor_spawns_above_screen_with_downward_bias() {
        let mut world = World::new(Shapes::stub(), 9);
        for _ in 0..50 {
            world.spawn_meteor();
        }
        for meteor in &world.meteors {
            assert!(meteor.pos.y >= -200.0 && meteor.pos.y <= -100.0);
            assert_eq!(meteor.direction.y, 1.0);
            assert!(meteor.direction.x.abs() <= 0.5);
            assert!((600.0..=700.0).contains(&meteor.speed));
            assert!((40.0..=80.0).contains(&meteor.rotation_rate));
        }
    }

    #[test]
    fn test_meteor_rect_tracks_rotation() {
        let mut world = World::new(Shapes::stub(), 3);
        world.spawn_meteor();
        let meteor = &mut world.meteors[0];
        let upright = meteor.rect();
        meteor.rotation = 45.0;
        let tilted = meteor.rect();
        assert_eq!(upright.center, tilted.center);
        assert!(tilted.size.x > upright.size.x);
        assert!(tilted.size.y > upright.size.y);
    }

    #[test]
    fn test_score_is_deciseconds() {
        let mut world = World::new(Shapes::stub(), 1);
        world.clock_ms = 4370.0;
        assert_eq!(world.score(), 43);
    }

    #[test]
    fn test_explosion_suppressed_without_frames() {
        let mut shapes = Shapes::stub();
        shapes.explosion_frames = 0;
        let mut world = World::new(shapes, 1);
        world.spawn_explosion(Vec2::new(10.0, 10.0));
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut world = World::new(Shapes::stub(), 1);
        world.spawn_laser();
        world.spawn_meteor();
        world.spawn_laser();
        assert_ne!(world.lasers[0].id, world.lasers[1].id);
        assert_ne!(world.lasers[0].id, world.meteors[0].id);
    }
}
