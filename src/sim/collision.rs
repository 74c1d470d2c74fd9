//! Collision detection and response
//!
//! Contact between a player and the ball is a plain AABB overlap. The
//! response is an impulse, not a reflection: the ball is pushed away from
//! the player's center and inherits the player's last-frame displacement.

use glam::Vec2;

use super::entity::{Ball, Entity, Player};
use super::state::{Pitch, Side};
use crate::tuning::Tuning;

/// Kick direction used when ball and player centers coincide
pub const KICK_FALLBACK_DIRECTION: Vec2 = Vec2::X;

/// What happened on the pitch during one resolved frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Side credited with a goal this frame
    pub scorer: Option<Side>,
    /// Which players kicked the ball, indexed by `Side::index()`
    pub kicks: [bool; 2],
}

/// Strict bounding-box overlap between any two entities
#[inline]
pub fn overlapping<A: Entity, B: Entity>(a: &A, b: &B) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Impulse a player imparts on the ball
///
/// `normalize(ball - player) * kick_speed + player.velocity()`, with the
/// fallback direction substituted for a zero-length offset.
pub fn kick_impulse(player: &Player, ball: &Ball, kick_speed: f32) -> Vec2 {
    let offset = ball.bounds().center() - player.bounds().center();
    let direction = if offset.length_squared() == 0.0 {
        KICK_FALLBACK_DIRECTION
    } else {
        offset.normalize()
    };
    direction * kick_speed + player.velocity()
}

/// Step the ball and resolve goals and kicks for one frame
///
/// Players must already be updated. A goal resets every position before
/// contacts are checked, so it takes priority over a simultaneous kick.
pub fn resolve_frame(pitch: &mut Pitch, tuning: &Tuning) -> FrameReport {
    let mut report = FrameReport::default();

    report.scorer = pitch.ball.update(&());
    if report.scorer.is_some() {
        pitch.reset_positions();
    }

    for player in &pitch.players {
        if overlapping(&pitch.ball, player) {
            let impulse = kick_impulse(player, &pitch.ball, tuning.kick_speed);
            pitch.ball.apply_force(impulse);
            report.kicks[player.side.index()] = true;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::screen_center;

    fn pitch() -> Pitch {
        Pitch::new([0, 1], &Tuning::default())
    }

    #[test]
    fn test_kick_pushes_ball_away_from_player() {
        let mut pitch = pitch();
        let player = &mut pitch.players[0];
        player.pos = Vec2::new(300.0, 300.0);
        player.prev_pos = player.pos;
        pitch.ball.pos = Vec2::new(350.0, 300.0);

        let impulse = kick_impulse(&pitch.players[0], &pitch.ball, 4.0);
        assert_eq!(impulse, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_centered_kick_uses_fallback_direction() {
        let mut pitch = pitch();
        let player = &mut pitch.players[0];
        player.prev_pos = Vec2::new(497.0, 302.0);
        player.pos = screen_center();
        pitch.ball.pos = screen_center();

        let impulse = kick_impulse(&pitch.players[0], &pitch.ball, 4.0);
        assert!(!impulse.is_nan());
        // Fallback (1, 0) * 4 plus the player's displacement (3, -2)
        assert_eq!(impulse, Vec2::new(7.0, -2.0));
    }

    #[test]
    fn test_resolve_applies_kick_with_player_velocity() {
        let mut pitch = pitch();
        let player = &mut pitch.players[1];
        player.prev_pos = Vec2::new(604.0, 300.0);
        player.pos = Vec2::new(600.0, 300.0);
        pitch.ball.pos = Vec2::new(550.0, 300.0);

        let report = resolve_frame(&mut pitch, &Tuning::default());
        assert_eq!(report.scorer, None);
        assert_eq!(report.kicks, [false, true]);
        // Kick (-4, 0) plus the player's (-4, 0) displacement
        assert_eq!(pitch.ball.vel, Vec2::new(-8.0, 0.0));
    }

    #[test]
    fn test_sustained_overlap_kicks_every_frame() {
        let mut pitch = pitch();
        let player = &mut pitch.players[0];
        player.pos = Vec2::new(470.0, 300.0);
        player.prev_pos = player.pos;

        resolve_frame(&mut pitch, &Tuning::default());
        let after_first = pitch.ball.vel;
        assert_eq!(after_first, Vec2::new(4.0, 0.0));

        let report = resolve_frame(&mut pitch, &Tuning::default());
        assert_eq!(report.kicks, [true, false]);
        assert!(pitch.ball.vel.x > after_first.x);
    }

    #[test]
    fn test_touching_edges_do_not_kick() {
        let mut pitch = pitch();
        let player = &mut pitch.players[0];
        player.pos = Vec2::new(500.0 - (PLAYER_SIZE + BALL_SIZE) / 2.0, 300.0);
        player.prev_pos = player.pos;

        let report = resolve_frame(&mut pitch, &Tuning::default());
        assert_eq!(report.kicks, [false, false]);
        assert_eq!(pitch.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_goal_resets_before_contacts() {
        let mut pitch = pitch();
        pitch.ball.pos = Vec2::new(BALL_SIZE / 2.0 + 1.0, 300.0);
        pitch.ball.vel = Vec2::new(-2.0, 0.0);
        // Defender standing on the ball at the goal line
        let player = &mut pitch.players[0];
        player.pos = Vec2::new(PLAYER_SIZE / 2.0, 300.0);
        player.prev_pos = player.pos;

        let report = resolve_frame(&mut pitch, &Tuning::default());
        assert_eq!(report.scorer, Some(Side::Right));
        assert_eq!(report.kicks, [false, false]);
        assert_eq!(pitch.ball.pos, screen_center());
        assert_eq!(pitch.ball.vel, Vec2::ZERO);
        assert_eq!(pitch.players[0].pos, Side::Left.start_position());
        assert_eq!(pitch.players[1].pos, Side::Right.start_position());
    }
}
