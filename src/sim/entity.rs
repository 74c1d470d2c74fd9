//! Player and ball entities
//!
//! The entity set is closed (two players, one ball), so the shared
//! update/bounds/sprite capability is a trait resolved statically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Side;
use super::tick::{Key, KeySet};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{goal_band, play_field, screen_center};

/// Which portrait a player picked, and whether it is drawn mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    /// Index into the character roster
    pub character: usize,
    /// Horizontally flipped (player 2 faces left)
    pub mirrored: bool,
}

/// What the renderer should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    Character(Appearance),
    Ball,
}

/// Shared capability of everything on the pitch
pub trait Entity {
    /// Per-frame input consumed by `update`
    type Input;
    /// What `update` reports back to the resolver
    type Outcome;

    /// Advance one frame
    fn update(&mut self, input: &Self::Input) -> Self::Outcome;

    /// Collision and drawing rectangle
    fn bounds(&self) -> Rect;

    fn sprite(&self) -> SpriteKey;
}

/// Directional key binding for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
}

impl Controls {
    pub const WASD: Controls = Controls {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
    };

    pub const ARROWS: Controls = Controls {
        up: Key::Up,
        down: Key::Down,
        left: Key::Left,
        right: Key::Right,
    };

    /// Fixed binding per side: WASD on the left, arrow keys on the right
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self::WASD,
            Side::Right => Self::ARROWS,
        }
    }
}

/// A player-controlled striker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    /// Sprite center
    pub pos: Vec2,
    /// Center before the most recent update
    pub prev_pos: Vec2,
    pub controls: Controls,
    pub appearance: Appearance,
    speed: f32,
}

impl Player {
    pub fn new(side: Side, appearance: Appearance, tuning: &Tuning) -> Self {
        let start = side.start_position();
        Self {
            side,
            pos: start,
            prev_pos: start,
            controls: Controls::for_side(side),
            appearance,
            speed: tuning.player_speed,
        }
    }

    /// Raw displacement over the last frame
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Put the player back on its start spot with no carried velocity
    pub fn reset(&mut self) {
        self.pos = self.side.start_position();
        self.prev_pos = self.pos;
    }
}

impl Entity for Player {
    type Input = KeySet;
    type Outcome = ();

    fn update(&mut self, keys: &KeySet) {
        self.prev_pos = self.pos;

        // Axes are summed, not normalized: diagonals are faster
        let mut step = Vec2::ZERO;
        if keys.is_held(self.controls.up) {
            step.y -= self.speed;
        }
        if keys.is_held(self.controls.down) {
            step.y += self.speed;
        }
        if keys.is_held(self.controls.left) {
            step.x -= self.speed;
        }
        if keys.is_held(self.controls.right) {
            step.x += self.speed;
        }
        self.pos += step;

        self.pos = self.bounds().clamped_into(&play_field()).center();
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    fn sprite(&self) -> SpriteKey {
        SpriteKey::Character(self.appearance)
    }
}

/// The soccer ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    friction: f32,
    bounce: f32,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: screen_center(),
            vel: Vec2::ZERO,
            friction: tuning.ball_friction,
            bounce: tuning.bounce_factor,
        }
    }

    /// Instantaneous velocity change
    pub fn apply_force(&mut self, force: Vec2) {
        self.vel += force;
    }

    /// Back to the center spot, at rest
    pub fn reset(&mut self) {
        self.pos = screen_center();
        self.vel = Vec2::ZERO;
    }

    /// Side credited with a goal if the ball sits in a goal mouth
    ///
    /// Only the goal band is checked; outside it the side lines have no
    /// collider and the ball may leave the field.
    pub fn goal_scorer(&self) -> Option<Side> {
        let (band_top, band_bottom) = goal_band();
        if !(band_top..=band_bottom).contains(&self.pos.y) {
            return None;
        }
        let half = BALL_SIZE / 2.0;
        if self.pos.x - half <= 0.0 {
            Some(Side::Right)
        } else if self.pos.x + half >= SCREEN_WIDTH {
            Some(Side::Left)
        } else {
            None
        }
    }
}

impl Entity for Ball {
    type Input = ();
    /// Scoring side, if the ball entered a goal this frame
    type Outcome = Option<Side>;

    fn update(&mut self, _: &()) -> Option<Side> {
        self.pos += self.vel;
        self.vel *= self.friction;

        // Reflect only; the ball may sit past the line for a frame
        let rect = self.bounds();
        if rect.top() <= 0.0 || rect.bottom() >= SCREEN_HEIGHT {
            self.vel.y = -self.vel.y * self.bounce;
        }

        self.goal_scorer()
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(BALL_SIZE))
    }

    fn sprite(&self) -> SpriteKey {
        SpriteKey::Ball
    }
}
