//! Game action definitions
//!
//! Keyboard-only bindings: arrows to steer, Enter to confirm, F for fullscreen.

use macroquad::prelude::KeyCode;

/// All possible game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,

    // Menus (edge-triggered)
    Confirm,
    ToggleFullscreen,
}

impl Action {
    /// Keys bound to this action
    pub fn keys(&self) -> &'static [KeyCode] {
        match self {
            Action::MoveForward => &[KeyCode::Up],
            Action::MoveBackward => &[KeyCode::Down],
            Action::MoveLeft => &[KeyCode::Left],
            Action::MoveRight => &[KeyCode::Right],
            Action::Confirm => &[KeyCode::Enter, KeyCode::KpEnter],
            Action::ToggleFullscreen => &[KeyCode::F],
        }
    }

    /// Movement actions are read as "held", everything else as "just pressed"
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Action::MoveForward | Action::MoveBackward | Action::MoveLeft | Action::MoveRight
        )
    }
}
