//! Data-driven game balance
//!
//! Defaults reproduce the classic feel: no ball friction, perfectly elastic
//! top/bottom bounces and a first-goal-wins match.

use serde::{Deserialize, Serialize};

/// Physics and match tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player displacement per frame per held direction key
    pub player_speed: f32,
    /// Length of the normalized kick vector added on contact
    pub kick_speed: f32,
    /// Velocity multiplier applied to the ball after each step (1.0 = no decay)
    pub ball_friction: f32,
    /// Vertical velocity multiplier on a top/bottom bounce
    pub bounce_factor: f32,
    /// Goals needed to win the match
    pub score_limit: u32,
    /// Frames the "Goal!" banner stays on screen
    pub goal_banner_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 4.0,
            kick_speed: 4.0,
            ball_friction: 1.0,
            bounce_factor: 1.0,
            score_limit: 1,
            goal_banner_ticks: 120,
        }
    }
}

impl Tuning {
    /// Clamp every value into its playable range, logging each correction
    pub fn sanitized(mut self) -> Self {
        if self.score_limit == 0 {
            log::warn!("score_limit must be at least 1, using 1");
            self.score_limit = 1;
        }
        self.player_speed = clamp_logged("player_speed", self.player_speed, 0.0, f32::MAX);
        self.kick_speed = clamp_logged("kick_speed", self.kick_speed, 0.0, f32::MAX);
        self.ball_friction = clamp_logged("ball_friction", self.ball_friction, 0.0, 1.0);
        self.bounce_factor = clamp_logged("bounce_factor", self.bounce_factor, 0.0, 1.0);
        self
    }
}

fn clamp_logged(name: &str, value: f32, lo: f32, hi: f32) -> f32 {
    if value.is_nan() {
        log::warn!("{name} is NaN, using {lo}");
        return lo;
    }
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        log::warn!("{name} = {value} out of range, using {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_already_sane() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clone().sanitized(), tuning);
    }

    #[test]
    fn test_sanitized_clamps_out_of_range_values() {
        let tuning = Tuning {
            player_speed: -3.0,
            ball_friction: 1.5,
            bounce_factor: f32::NAN,
            score_limit: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.player_speed, 0.0);
        assert_eq!(tuning.ball_friction, 1.0);
        assert_eq!(tuning.bounce_factor, 0.0);
        assert_eq!(tuning.score_limit, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "score_limit": 5 }"#).unwrap();
        assert_eq!(tuning.score_limit, 5);
        assert_eq!(tuning.kick_speed, 4.0);
        assert_eq!(tuning.goal_banner_ticks, 120);
    }
}
