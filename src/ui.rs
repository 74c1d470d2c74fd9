//! Screen layout and pointer hit-testing
//!
//! Hit-testing is pure: given a pointer snapshot and a rectangle it only
//! answers whether the pointer is over it or activating it. Drawing lives in
//! the renderer.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{PointerState, Rect};

/// A clickable, labelled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    /// Fill when the pointer is elsewhere
    pub idle_color: [u8; 4],
    /// Fill while hovered
    pub hover_color: [u8; 4],
}

impl Button {
    pub fn hovered(&self, pointer: &PointerState) -> bool {
        pointer.pos.is_some_and(|pos| self.rect.contains_point(pos))
    }

    /// Left button held while hovering
    pub fn activated(&self, pointer: &PointerState) -> bool {
        pointer.left && self.hovered(pointer)
    }

    pub fn fill_color(&self, pointer: &PointerState) -> [u8; 4] {
        if self.hovered(pointer) {
            self.hover_color
        } else {
            self.idle_color
        }
    }
}

const BUTTON_X: f32 = SCREEN_WIDTH / 2.0 - 330.0;
const BUTTON_WIDTH: f32 = 700.0;
const BUTTON_HEIGHT: f32 = 100.0;

pub const RESTART_BUTTON: Button = Button {
    label: "Restart",
    rect: Rect::new(BUTTON_X, SCREEN_HEIGHT / 2.0, BUTTON_WIDTH, BUTTON_HEIGHT),
    idle_color: [100, 200, 100, 255],
    hover_color: [150, 255, 150, 255],
};

pub const QUIT_BUTTON: Button = Button {
    label: "Quit",
    rect: Rect::new(BUTTON_X, SCREEN_HEIGHT / 2.0 + 130.0, BUTTON_WIDTH, BUTTON_HEIGHT),
    idle_color: [200, 100, 100, 255],
    hover_color: [255, 150, 150, 255],
};

/// Horizontal distance between portrait slots on the select screen
const SLOT_SPACING: f32 = 200.0;
const FIRST_SLOT_X: f32 = 150.0;

/// Portrait rectangle for character `index` on the select screen
pub fn character_slot(index: usize) -> Rect {
    Rect::new(
        FIRST_SLOT_X + index as f32 * SLOT_SPACING,
        SCREEN_HEIGHT / 2.0,
        PORTRAIT_SIZE,
        PORTRAIT_SIZE,
    )
}

/// Character whose portrait is under `pos`
pub fn character_slot_at(pos: Vec2) -> Option<usize> {
    (0..CHARACTER_COUNT).find(|&i| character_slot(i).covers_point(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer_at(x: f32, y: f32, left: bool) -> PointerState {
        PointerState {
            pos: Some(Vec2::new(x, y)),
            left,
            ..Default::default()
        }
    }

    #[test]
    fn test_button_layout() {
        assert_eq!(RESTART_BUTTON.rect, Rect::new(170.0, 300.0, 700.0, 100.0));
        assert_eq!(QUIT_BUTTON.rect, Rect::new(170.0, 430.0, 700.0, 100.0));
        assert!(!RESTART_BUTTON.rect.overlaps(&QUIT_BUTTON.rect));
    }

    #[test]
    fn test_button_hover_and_activation() {
        let hover = pointer_at(500.0, 350.0, false);
        assert!(RESTART_BUTTON.hovered(&hover));
        assert!(!RESTART_BUTTON.activated(&hover));
        assert_eq!(RESTART_BUTTON.fill_color(&hover), [150, 255, 150, 255]);

        let press = pointer_at(500.0, 350.0, true);
        assert!(RESTART_BUTTON.activated(&press));
        assert!(!QUIT_BUTTON.activated(&press));

        // Edge pixels are outside
        assert!(!RESTART_BUTTON.activated(&pointer_at(170.0, 350.0, true)));
        assert!(!RESTART_BUTTON.activated(&PointerState {
            pos: None,
            left: true,
            ..Default::default()
        }));
    }

    #[test]
    fn test_character_slots() {
        assert_eq!(character_slot(0), Rect::new(150.0, 300.0, 80.0, 80.0));
        assert_eq!(character_slot(3), Rect::new(750.0, 300.0, 80.0, 80.0));
        assert_eq!(character_slot_at(Vec2::new(190.0, 340.0)), Some(0));
        assert_eq!(character_slot_at(Vec2::new(590.0, 340.0)), Some(2));
        assert_eq!(character_slot_at(Vec2::new(300.0, 340.0)), None);
        assert_eq!(character_slot_at(Vec2::new(190.0, 200.0)), None);
        // Top-left corner picks, bottom-right corner doesn't
        assert_eq!(character_slot_at(Vec2::new(150.0, 300.0)), Some(0));
        assert_eq!(character_slot_at(Vec2::new(230.0, 340.0)), None);
        assert_eq!(character_slot_at(Vec2::new(190.0, 380.0)), None);
    }
}
