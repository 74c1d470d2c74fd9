//! Soccer Pong - a two-player local soccer arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, state machine)
//! - `ui`: Pure hit-testing for buttons and character slots
//! - `renderer`: Software frame buffer rendering presented through `pixels`
//! - `platform`: Native input sampling and frame pacing
//! - `assets` / `audio`: External collaborators (images, font, sounds)
//! - `settings` / `tuning`: Data-driven configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{AppError, AssetError, AudioError};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical resolution of the play field (pixels)
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Frame buffer size (same as the logical resolution)
    pub const FRAME_WIDTH: u32 = 1000;
    pub const FRAME_HEIGHT: u32 = 600;

    /// Fixed frame rate; physics is stepped once per frame
    pub const TARGET_FPS: u32 = 60;

    /// Player sprite size (square)
    pub const PLAYER_SIZE: f32 = 80.0;
    /// Ball sprite size (square)
    pub const BALL_SIZE: f32 = 40.0;

    /// Distance of each player's start position from its own goal line
    pub const PLAYER_START_INSET: f32 = 80.0;

    /// Goal-mouth band as fractions of screen height
    pub const GOAL_BAND_TOP: f32 = 0.25;
    pub const GOAL_BAND_BOTTOM: f32 = 0.75;
    /// Width of the painted goal posts
    pub const GOAL_POST_WIDTH: f32 = 10.0;

    /// Number of selectable characters
    pub const CHARACTER_COUNT: usize = 4;
    /// Portrait size on the select screen
    pub const PORTRAIT_SIZE: f32 = 80.0;
}

/// Centre of the play field
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}

/// The whole screen as a rectangle; players are clamped into it
#[inline]
pub fn play_field() -> sim::Rect {
    sim::Rect::new(0.0, 0.0, consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Vertical extent of the goal mouth as (top, bottom)
#[inline]
pub fn goal_band() -> (f32, f32) {
    (
        consts::SCREEN_HEIGHT * consts::GOAL_BAND_TOP,
        consts::SCREEN_HEIGHT * consts::GOAL_BAND_BOTTOM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_band_is_central_half() {
        let (top, bottom) = goal_band();
        assert_eq!(top, 150.0);
        assert_eq!(bottom, 450.0);
        assert_eq!(bottom - top, consts::SCREEN_HEIGHT / 2.0);
    }

    #[test]
    fn test_screen_center() {
        assert_eq!(screen_center(), Vec2::new(500.0, 300.0));
    }
}
