//! Input mapping from raw events to semantic actions
//!
//! The viewer is not interactive. The only input it reacts to is a request
//! to quit, from the window manager or from the Escape key.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for mapped keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }

    /// Map any window event to an action
    pub fn map_window_event(event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::CloseRequested => Some(InputAction::Exit),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key) => Self::map_keyboard(key, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Space, KeyCode::KeyQ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_close_requested_exits() {
        assert_eq!(
            InputMapper::map_window_event(&WindowEvent::CloseRequested),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_unrelated_window_event_ignored() {
        assert_eq!(
            InputMapper::map_window_event(&WindowEvent::Focused(true)),
            None
        );
    }
}
