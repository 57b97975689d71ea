//! Collision resolution
//!
//! Two checks run each tick, in this order:
//!
//! 1. Player vs meteors, per opaque pixel. Any contact ends the run; every
//!    meteor touching the player is removed so the death frame shows no
//!    sprite embedded in the ship.
//! 2. Lasers vs meteors, by bounding rect. A laser dies on its first hit
//!    but takes every meteor its rect overlaps with it, leaving one
//!    explosion at the laser's tip.

use glam::Vec2;

use super::mask::Mask;
use super::rect::Rect;
use super::state::{GameEvent, Meteor, World};

/// Per-pixel test between the player and one meteor.
///
/// The meteor's mask is re-derived from its base mask at the current angle,
/// so the solid pixels tested are exactly the pixels drawn.
fn player_hits_meteor(player_rect: &Rect, player_mask: &Mask, meteor: &Meteor, meteor_mask: &Mask) -> bool {
    let meteor_rect = meteor.rect();
    // Cheap reject before the pixel scan
    if !player_rect.intersects(&meteor_rect) {
        return false;
    }
    let offset = meteor_rect.topleft() - player_rect.topleft();
    player_mask.overlaps(
        meteor_mask,
        offset.x.round() as i32,
        offset.y.round() as i32,
    )
}

/// Resolve all collisions for this tick, mutating `world` in place
pub fn resolve(world: &mut World) {
    // Player vs meteors: lethal on any opaque-pixel contact
    let player_rect = world.player.rect;
    let player_mask = world.shapes.player.mask.clone();
    let meteor_base_mask = world.shapes.meteor.mask.clone();
    let before = world.meteors.len();
    world.meteors.retain(|meteor| {
        let mask = meteor_base_mask.rotated(meteor.rotation);
        !player_hits_meteor(&player_rect, &player_mask, meteor, &mask)
    });
    if world.meteors.len() < before {
        world.running = false;
        world.events.push(GameEvent::PlayerHit);
    }

    // Lasers vs meteors: rect overlap, no cap on meteors per laser
    let mut explosions_at: Vec<Vec2> = Vec::new();
    let mut lasers = std::mem::take(&mut world.lasers);
    lasers.retain(|laser| {
        let mut hit = false;
        world.meteors.retain(|meteor| {
            if laser.rect.intersects(&meteor.rect()) {
                hit = true;
                false
            } else {
                true
            }
        });
        if hit {
            explosions_at.push(laser.rect.midtop());
        }
        !hit
    });
    world.lasers = lasers;
    for pos in explosions_at {
        world.spawn_explosion(pos);
        world.events.push(GameEvent::MeteorShattered);
    }
}
