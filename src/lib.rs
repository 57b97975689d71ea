//! Meteor Rush - a 2D arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions)
//! - `assets`: Startup asset loading with a fatal/optional two-tier policy
//! - `render`: Scene construction and CPU frame composition
//! - `platform`: Window, keyboard and GPU frame presentation
//! - `audio`: Fire-and-forget sound effects and music
//! - `app`: The per-frame orchestrator driving all of the above

pub mod app;
pub mod assets;
pub mod audio;
pub mod platform;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Display surface size in pixels
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;

    /// Target frame rate; the loop sleeps to cap at this, `dt` simply grows
    /// when the platform cannot sustain it (no fixed-step catch-up)
    pub const TARGET_FPS: u32 = 60;

    /// Player movement speed (pixels per second)
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Minimum interval between laser shots (milliseconds)
    pub const FIRE_COOLDOWN_MS: f64 = 400.0;

    /// Laser upward speed (pixels per second)
    pub const LASER_SPEED: f32 = 700.0;

    /// Meteors self-destruct at this age regardless of position (milliseconds)
    pub const METEOR_LIFETIME_MS: f64 = 7000.0;
    /// One meteor spawns per this much elapsed wall time (milliseconds)
    pub const METEOR_SPAWN_INTERVAL_MS: f64 = 500.0;
    /// Meteor speed range (pixels per second)
    pub const METEOR_SPEED_MIN: i32 = 600;
    pub const METEOR_SPEED_MAX: i32 = 700;
    /// Meteor rotation rate range (degrees per second)
    pub const METEOR_ROTATION_MIN: i32 = 40;
    pub const METEOR_ROTATION_MAX: i32 = 80;
    /// Meteors spawn above the visible top edge, in this y range
    pub const METEOR_SPAWN_Y_MIN: i32 = -200;
    pub const METEOR_SPAWN_Y_MAX: i32 = -100;

    /// Explosion frame index advance per tick (flat, deliberately not
    /// dt-scaled - matches the observed behavior of the effect)
    pub const EXPLOSION_FRAME_STEP: f32 = 0.2;

    /// Background stars created once at startup
    pub const STAR_COUNT: usize = 20;

    /// Background clear color (#3a2e3f)
    pub const BACKGROUND_COLOR: [u8; 4] = [0x3a, 0x2e, 0x3f, 0xff];
    /// Score text and border color
    pub const SCORE_COLOR: [u8; 4] = [240, 240, 240, 255];

    /// Score is elapsed time in deciseconds
    pub const SCORE_DIVISOR_MS: f64 = 100.0;
}
