//! Keyboard and mouse sampling
//!
//! Window events arrive whenever the OS delivers them; the simulation wants
//! one consistent snapshot per frame. The collector folds events into held
//! state and hands out copies.

use glam::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::sim::{Key, KeySet, PointerState, TickInput};

/// Physical key to game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Space => Key::Space,
        _ => return None,
    })
}

/// Held keys and mouse state, updated from window events
#[derive(Debug, Default)]
pub struct InputCollector {
    keys: KeySet,
    pointer: PointerState,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState) {
        let Some(key) = map_key(code) else {
            return;
        };
        match state {
            ElementState::Pressed => self.keys.press(key),
            ElementState::Released => self.keys.release(key),
        }
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let held = state.is_pressed();
        match button {
            MouseButton::Left => self.pointer.left = held,
            MouseButton::Middle => self.pointer.middle = held,
            MouseButton::Right => self.pointer.right = held,
            _ => {}
        }
    }

    /// Pointer moved; `None` when it is over the letterbox border
    pub fn cursor_moved(&mut self, pos: Option<Vec2>) {
        self.pointer.pos = pos;
    }

    pub fn cursor_left(&mut self) {
        self.pointer.pos = None;
    }

    /// Release everything; release events are not delivered while unfocused
    pub fn focus_lost(&mut self) {
        self.keys.clear();
        self.pointer.left = false;
        self.pointer.middle = false;
        self.pointer.right = false;
    }

    /// Input for the next simulation tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            keys: self.keys,
            pointer: self.pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Key::Left));
        assert_eq!(map_key(KeyCode::Space), Some(Key::Space));
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_held_keys_persist_until_release() {
        let mut input = InputCollector::new();
        input.key(KeyCode::KeyD, ElementState::Pressed);
        input.key(KeyCode::ArrowUp, ElementState::Pressed);
        input.key(KeyCode::KeyQ, ElementState::Pressed);

        let snap = input.snapshot();
        assert!(snap.keys.is_held(Key::D));
        assert!(snap.keys.is_held(Key::Up));
        assert_eq!(input.snapshot(), snap);

        input.key(KeyCode::KeyD, ElementState::Released);
        assert!(!input.snapshot().keys.is_held(Key::D));
        assert!(input.snapshot().keys.is_held(Key::Up));
    }

    #[test]
    fn test_pointer_tracking() {
        let mut input = InputCollector::new();
        input.cursor_moved(Some(Vec2::new(190.0, 340.0)));
        input.mouse_button(MouseButton::Right, ElementState::Pressed);

        let pointer = input.snapshot().pointer;
        assert_eq!(pointer.pos, Some(Vec2::new(190.0, 340.0)));
        assert!(pointer.right);
        assert!(!pointer.left);

        input.cursor_left();
        assert_eq!(input.snapshot().pointer.pos, None);
        assert!(input.snapshot().pointer.right);
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut input = InputCollector::new();
        input.key(KeyCode::Space, ElementState::Pressed);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.cursor_moved(Some(Vec2::new(10.0, 10.0)));

        input.focus_lost();
        let snap = input.snapshot();
        assert_eq!(snap.keys, KeySet::default());
        assert!(!snap.pointer.left);
        assert_eq!(snap.pointer.pos, Some(Vec2::new(10.0, 10.0)));
    }
}
