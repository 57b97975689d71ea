//! Per-frame simulation advance
//!
//! `tick` is the only entry point that mutates a `World` during play. It is
//! a pure function of (state, input, dt): given the same three, it produces
//! the same state, which is what makes the scenario tests possible.

use glam::Vec2;

use super::collision;
use super::state::World;
use crate::consts::*;

/// Player intent for one tick, sampled from the keyboard by the platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    /// Close request from the window system
    pub quit: bool,
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    if !world.running {
        return;
    }
    world.clock_ms += dt as f64 * 1000.0;
    if input.quit {
        world.running = false;
        return;
    }

    update_player(world, input, dt);
    update_lasers(world, dt);
    update_meteors(world, dt);
    update_explosions(world);
    spawn_meteors(world, dt);

    collision::resolve(world);
}

fn update_player(world: &mut World, input: &TickInput, dt: f32) {
    let raw = Vec2::new(
        input.right as i32 as f32 - input.left as i32 as f32,
        input.down as i32 as f32 - input.up as i32 as f32,
    );
    // Diagonal movement is no faster than cardinal
    world.player.direction = raw.normalize_or_zero();
    world.player.rect = world
        .player
        .rect
        .translate(world.player.direction * world.player.speed * dt);

    if input.fire && world.player.can_shoot {
        world.spawn_laser();
        world.player.can_shoot = false;
        world.player.last_shot_ms = world.clock_ms;
    }
    if !world.player.can_shoot
        && world.clock_ms - world.player.last_shot_ms >= FIRE_COOLDOWN_MS
    {
        world.player.can_shoot = true;
    }
}

fn update_lasers(world: &mut World, dt: f32) {
    for laser in &mut world.lasers {
        laser.rect = laser.rect.translate(Vec2::new(0.0, -LASER_SPEED * dt));
    }
    // A laser dies once fully above the top edge
    world.lasers.retain(|laser| laser.rect.bottom() >= 0.0);
}

fn update_meteors(world: &mut World, dt: f32) {
    for meteor in &mut world.meteors {
        meteor.pos += meteor.direction * meteor.speed * dt;
        meteor.rotation += meteor.rotation_rate * dt;
    }
    // Age-based removal only; position never kills a meteor
    let now = world.clock_ms;
    world.meteors.retain(|meteor| meteor.age_ms(now) < METEOR_LIFETIME_MS);
}

fn update_explosions(world: &mut World) {
    // Flat per-tick advance, independent of dt
    let frames = world.shapes.explosion_frames as f32;
    for explosion in &mut world.explosions {
        explosion.index += EXPLOSION_FRAME_STEP;
    }
    world.explosions.retain(|explosion| explosion.index < frames);
}

fn spawn_meteors(world: &mut World, dt: f32) {
    world.spawn_accum_ms += dt as f64 * 1000.0;
    while world.spawn_accum_ms >= METEOR_SPAWN_INTERVAL_MS {
        world.spawn_accum_ms -= METEOR_SPAWN_INTERVAL_MS;
        world.spawn_meteor();
    }
}
