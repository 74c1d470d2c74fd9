//! Fixed-rate simulation tick
//!
//! Advances the state machine by exactly one frame. Physics is not scaled by
//! elapsed time: a slow frame simply slows the game down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_frame;
use super::entity::Entity;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::ui;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
}

impl Key {
    pub const ALL: [Key; 9] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u16);

impl KeySet {
    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// Mouse state sampled for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Position in logical screen pixels; `None` when outside the window
    pub pos: Option<Vec2>,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub keys: KeySet,
    pub pointer: PointerState,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::SelectCharacters => tick_select(state, input),
        GamePhase::Play => tick_play(state, input),
        GamePhase::GameOver => tick_game_over(state, input),
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    if input.keys.is_held(Key::Space) {
        state.set_phase(GamePhase::SelectCharacters);
    }
}

fn tick_select(state: &mut GameState, input: &TickInput) {
    let pointer = &input.pointer;
    if let Some(slot) = pointer.pos.and_then(ui::character_slot_at) {
        // Left button claims for player 1 first; right only if left didn't
        if pointer.left && !state.selection.is_selected(Side::Left) {
            state.selection.pick(Side::Left, slot);
            log::info!("{} picked character {}", Side::Left.name(), slot);
        } else if pointer.right && !state.selection.is_selected(Side::Right) {
            state.selection.pick(Side::Right, slot);
            log::info!("{} picked character {}", Side::Right.name(), slot);
        }
    }

    if let Some(picks) = state.selection.complete() {
        state.start_match(picks);
    }
}

fn tick_play(state: &mut GameState, input: &TickInput) {
    let Some(pitch) = state.pitch.as_mut() else {
        // Play without entities can't be simulated; go pick characters again
        log::warn!("Play phase entered without a pitch");
        state.set_phase(GamePhase::SelectCharacters);
        return;
    };

    state.goal_banner_ticks = state.goal_banner_ticks.saturating_sub(1);

    for player in &mut pitch.players {
        player.update(&input.keys);
    }

    let report = resolve_frame(pitch, &state.tuning);
    let ball_vel = pitch.ball.vel;

    for side in Side::BOTH {
        if report.kicks[side.index()] {
            log::debug!("{} kicked, ball velocity {:?}", side.name(), ball_vel);
            state.push_event(GameEvent::Kick { side });
        }
    }

    if let Some(scorer) = report.scorer {
        state.score.credit(scorer);
        state.goal_banner_ticks = state.tuning.goal_banner_ticks;
        log::info!(
            "Goal for {}! Blue {} - Red {}",
            scorer.name(),
            state.score.left,
            state.score.right
        );
        state.push_event(GameEvent::Goal {
            scorer,
            score: state.score,
        });
    }

    if let Some(winner) = state.score.winner(state.tuning.score_limit) {
        log::info!("{} wins the match", winner.name());
        state.winner = Some(winner);
        state.push_event(GameEvent::MatchWon { winner });
        state.set_phase(GamePhase::GameOver);
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput) {
    if ui::RESTART_BUTTON.activated(&input.pointer) {
        state.restart();
    } else if ui::QUIT_BUTTON.activated(&input.pointer) {
        state.quit_to_menu();
    }
}
