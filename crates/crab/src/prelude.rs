//! Convenience re-exports — `use crab::prelude::*` for the common items.

pub use crate::animation::FrameCycle;
pub use crate::asset::{ImageData, SpriteAssets};
pub use crate::config::GameConfig;
pub use crate::error::CrabError;
pub use crate::input::{Action, BoundInput, Input, InputSource, KeyBindings, KeyCode};
pub use crate::math::{IVec2, PixelRect, Vec2};
pub use crate::session::{Session, SessionStatus, run_due_ticks};
pub use crate::state::{GameState, Playfield, SpriteSize, TickOutcome};
pub use crate::time::{FixedTimestep, Time};
#[cfg(feature = "render2d")]
pub use crate::game::Game;
#[cfg(feature = "render2d")]
pub use crate::render::{Color, DrawList, Renderer};
