//! Game state and core simulation types
//!
//! `GameState` is the single session object owned by the frame loop; the
//! simulation never keeps state anywhere else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Appearance, Ball, Player};
use crate::consts::*;
use crate::tuning::Tuning;

/// One of the two teams. Player 1 defends the left goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, "Blue", WASD
    Left,
    /// Player 2, "Red", arrow keys
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Team name shown on the scoreboard
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Blue",
            Side::Right => "Red",
        }
    }

    pub fn start_position(self) -> Vec2 {
        let x = match self {
            Side::Left => PLAYER_START_INSET,
            Side::Right => SCREEN_WIDTH - PLAYER_START_INSET,
        };
        Vec2::new(x, SCREEN_HEIGHT / 2.0)
    }
}

/// Goals per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add one goal for `side`, returning its new total
    pub fn credit(&mut self, side: Side) -> u32 {
        let goals = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *goals += 1;
        *goals
    }

    /// First side (left checked first) that reached `limit`
    pub fn winner(&self, limit: u32) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| self.get(side) >= limit)
    }
}

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for SPACE
    Menu,
    /// Both players picking a portrait
    SelectCharacters,
    /// Match in progress
    Play,
    /// Match decided, Restart / Quit buttons shown
    GameOver,
}

/// Character picks made on the select screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picks: [Option<usize>; 2],
}

impl Selection {
    pub fn is_selected(&self, side: Side) -> bool {
        self.picks[side.index()].is_some()
    }

    pub fn pick_of(&self, side: Side) -> Option<usize> {
        self.picks[side.index()]
    }

    /// Lock in `character` for `side`. The first pick wins; later ones are ignored.
    pub fn pick(&mut self, side: Side, character: usize) -> bool {
        let slot = &mut self.picks[side.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(character);
        true
    }

    /// Both picks, once both players have chosen
    pub fn complete(&self) -> Option<[usize; 2]> {
        match self.picks {
            [Some(left), Some(right)] => Some([left, right]),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.picks = [None; 2];
    }
}

/// Entities that exist only while a match session is running
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pitch {
    /// Indexed by `Side::index()`
    pub players: [Player; 2],
    pub ball: Ball,
}

impl Pitch {
    pub fn new(picks: [usize; 2], tuning: &Tuning) -> Self {
        let appearance = |side: Side| Appearance {
            character: picks[side.index()],
            mirrored: side == Side::Right,
        };
        Self {
            players: Side::BOTH.map(|side| Player::new(side, appearance(side), tuning)),
            ball: Ball::new(tuning),
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Ball to the center spot, players to their start spots
    pub fn reset_positions(&mut self) {
        self.ball.reset();
        for player in &mut self.players {
            player.reset();
        }
    }
}

/// Things the simulation reports to the outside (audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Kick { side: Side },
    Goal { scorer: Side, score: Score },
    MatchWon { winner: Side },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub selection: Selection,
    /// `None` until both characters are picked; dropped again on quit
    pub pitch: Option<Pitch>,
    pub score: Score,
    /// Frames left on the "Goal!" banner
    pub goal_banner_ticks: u32,
    /// Only meaningful in `GameOver`
    pub winner: Option<Side>,
    pub tuning: Tuning,
    /// Frames simulated since startup
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            selection: Selection::default(),
            pitch: None,
            score: Score::default(),
            goal_banner_ticks: 0,
            winner: None,
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {:?} -> {:?} at frame {}", from, to, self.time_ticks);
        self.phase = to;
        self.push_event(GameEvent::PhaseChanged { from, to });
    }

    /// Build the session entities from the picks and kick off a fresh match
    pub fn start_match(&mut self, picks: [usize; 2]) {
        self.pitch = Some(Pitch::new(picks, &self.tuning));
        self.reset_match();
        self.set_phase(GamePhase::Play);
    }

    /// Restart from the game-over screen, keeping the chosen characters
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        let Some(pitch) = self.pitch.as_mut() else {
            return false;
        };
        pitch.reset_positions();
        self.reset_match();
        self.set_phase(GamePhase::Play);
        true
    }

    /// Leave the game-over screen for the title screen, dropping the session
    pub fn quit_to_menu(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.pitch = None;
        self.selection.clear();
        self.reset_match();
        self.set_phase(GamePhase::Menu);
        true
    }

    fn reset_match(&mut self) {
        self.score = Score::default();
        self.goal_banner_ticks = 0;
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen_center;

    #[test]
    fn test_score_credit_and_winner() {
        let mut score = Score::default();
        assert_eq!(score.winner(1), None);
        assert_eq!(score.credit(Side::Right), 1);
        assert_eq!(score.winner(2), None);
        assert_eq!(score.winner(1), Some(Side::Right));
        score.credit(Side::Left);
        // Left is checked first
        assert_eq!(score.winner(1), Some(Side::Left));
    }

    #[test]
    fn test_selection_first_pick_wins() {
        let mut selection = Selection::default();
        assert!(selection.pick(Side::Left, 2));
        assert!(!selection.pick(Side::Left, 3));
        assert_eq!(selection.pick_of(Side::Left), Some(2));
        assert_eq!(selection.complete(), None);
        assert!(selection.pick(Side::Right, 2));
        assert_eq!(selection.complete(), Some([2, 2]));
        selection.clear();
        assert!(!selection.is_selected(Side::Left));
        assert!(!selection.is_selected(Side::Right));
    }

    #[test]
    fn test_start_match_builds_pitch() {
        let mut state = GameState::default();
        state.phase = GamePhase::SelectCharacters;
        state.start_match([1, 3]);

        assert_eq!(state.phase, GamePhase::Play);
        let pitch = state.pitch.as_ref().unwrap();
        assert_eq!(pitch.player(Side::Left).appearance, Appearance { character: 1, mirrored: false });
        assert_eq!(pitch.player(Side::Right).appearance, Appearance { character: 3, mirrored: true });
        assert_eq!(pitch.player(Side::Left).pos, Vec2::new(80.0, 300.0));
        assert_eq!(pitch.player(Side::Right).pos, Vec2::new(920.0, 300.0));
        assert_eq!(pitch.ball.pos, screen_center());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged { from: GamePhase::SelectCharacters, to: GamePhase::Play }]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_and_quit_only_from_game_over() {
        let mut state = GameState::default();
        assert!(!state.restart());
        assert!(!state.quit_to_menu());
        assert_eq!(state.phase, GamePhase::Menu);
    }
}
