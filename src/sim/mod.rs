//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - No randomness
//! - Stable iteration order (left player before right)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{FrameReport, KICK_FALLBACK_DIRECTION, kick_impulse, overlapping, resolve_frame};
pub use entity::{Appearance, Ball, Controls, Entity, Player, SpriteKey};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Pitch, Score, Selection, Side};
pub use tick::{Key, KeySet, PointerState, TickInput, tick};
