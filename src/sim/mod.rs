//! Deterministic game simulation
//!
//! Everything in here is pure state and math: no windowing, no pixels, no
//! sound, no clocks. The platform samples input, picks a `dt`, and calls
//! [`tick::tick`]; identical inputs always produce identical worlds, so the
//! whole game can be driven from tests.

pub mod collision;
pub mod mask;
pub mod rect;
pub mod state;
pub mod tick;

pub use mask::Mask;
pub use rect::Rect;
pub use state::{GameEvent, Shapes, SpriteShape, World};
pub use tick::{TickInput, tick};
