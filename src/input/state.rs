//! Input state management
//!
//! Polls the keyboard once per frame and folds it into a `FrameInput`
//! snapshot, so screen logic never calls into macroquad directly.

use macroquad::prelude::*;
use crate::game::MoveInput;
use super::Action;

/// Everything screen logic needs to know about this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Movement keys currently held
    pub movement: MoveInput,
    /// Confirm was pressed this frame
    pub confirm: bool,
    /// Fullscreen toggle was pressed this frame
    pub toggle_fullscreen: bool,
}

impl FrameInput {
    /// Build a snapshot from an "is this action active" query
    pub fn from_actions(delta_time: f32, active: impl Fn(Action) -> bool) -> Self {
        Self {
            delta_time,
            movement: MoveInput {
                left: active(Action::MoveLeft),
                right: active(Action::MoveRight),
                forward: active(Action::MoveForward),
                backward: active(Action::MoveBackward),
            },
            confirm: active(Action::Confirm),
            toggle_fullscreen: active(Action::ToggleFullscreen),
        }
    }
}

/// Keyboard input source
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|&k| is_key_down(k))
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        action.keys().iter().any(|&k| is_key_pressed(k))
    }

    /// Call once per frame before updating any screen
    pub fn poll(&self) -> FrameInput {
        FrameInput::from_actions(get_frame_time(), |action| {
            if action.is_movement() {
                self.action_down(action)
            } else {
                self.action_pressed(action)
            }
        })
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
