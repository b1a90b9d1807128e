//! Screen state machine
//!
//! Three screens and a cross-fade between them. A transition fades the old
//! screen to black, swaps screens at full opacity, then fades the new one in.
//! The swap happens at the midpoint, not when the transition is requested,
//! so until then the old screen is still the current one.
//!
//! The fade moves a fixed alpha step per frame, so its length is a frame
//! count (50 frames each way at the default step), not a duration.

use crate::config::TransitionConfig;

/// The screens the game can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Title,
    Gameplay,
    GameOver,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Title => "Title",
            Screen::Gameplay => "Gameplay",
            Screen::GameOver => "GameOver",
        }
    }
}

/// Which half of the cross-fade is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Old screen fading to black (alpha rising)
    FadeOut,
    /// New screen fading in from black (alpha falling)
    FadeIn,
}

/// An in-flight transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub phase: FadePhase,
    /// Black overlay opacity, 0.0-1.0
    pub alpha: f32,
    pub from: Screen,
    pub to: Screen,
}

/// Current screen plus the transition gate
#[derive(Debug, Clone)]
pub struct ScreenMachine {
    current: Screen,
    transition: Option<Transition>,
    alpha_step: f32,
}

impl ScreenMachine {
    /// Starts on the title screen
    pub fn new(config: &TransitionConfig) -> Self {
        Self {
            current: Screen::Title,
            transition: None,
            alpha_step: config.alpha_step,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn on_transition(&self) -> bool {
        self.transition().is_some()
    }

    /// Opacity of the fade overlay (0.0 when idle)
    pub fn fade_alpha(&self) -> f32 {
        self.transition().map(|t| t.alpha.clamp(0.0, 1.0)).unwrap_or(0.0)
    }

    /// Start a cross-fade to `target`.
    ///
    /// Ignored while another transition is running. Returns whether the
    /// request was accepted.
    pub fn request_transition(&mut self, target: Screen) -> bool {
        if let Some(t) = &self.transition {
            tracing::debug!(
                requested = target.label(),
                in_flight = t.to.label(),
                "transition request ignored"
            );
            return false;
        }

        self.transition = Some(Transition {
            phase: FadePhase::FadeOut,
            alpha: 0.0,
            from: self.current,
            to: target,
        });
        tracing::info!(from = self.current.label(), to = target.label(), "screen transition");
        true
    }

    /// Advance the fade by one frame. No-op when idle.
    pub fn update_transition(&mut self) {
        let Some(t) = &mut self.transition else { return };

        match t.phase {
            FadePhase::FadeOut => {
                t.alpha += self.alpha_step;
                if t.alpha > 1.0 {
                    self.current = t.to;
                    t.phase = FadePhase::FadeIn;
                }
            }
            FadePhase::FadeIn => {
                t.alpha -= self.alpha_step;
                if t.alpha < 0.0 {
                    self.transition = None;
                }
            }
        }
    }
}
