//! Application state and screen dispatch
//!
//! Owns the screen machine and the gameplay simulation. Each frame the
//! transition (if any) gets first claim on the update; otherwise the
//! current screen's update runs. Nothing here draws or polls devices, so a
//! whole session can be played from tests.

use rand::Rng;
use crate::config::GameConfig;
use crate::game::{Gameplay, GameplayEvent, GameplayEvents};
use crate::input::FrameInput;
use crate::screen::{Screen, ScreenMachine};

/// Seconds the "+points" popup stays on the HUD after a pickup
pub const PICKUP_FLASH_TIME: f32 = 0.6;

/// Requests for the windowing layer that come out of an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEffects {
    /// Flip between windowed and fullscreen
    pub toggle_fullscreen: bool,
}

/// Main application state
pub struct AppState {
    pub screens: ScreenMachine,
    pub gameplay: Gameplay,
    /// Scratch queue, drained right after every gameplay frame
    events: GameplayEvents,
    pub fullscreen: bool,
    /// Time left on the pickup popup (0 = hidden)
    pub pickup_flash: f32,
}

impl AppState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            screens: ScreenMachine::new(&config.transition),
            gameplay: Gameplay::new(config),
            events: GameplayEvents::new(),
            fullscreen: false,
            pickup_flash: 0.0,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screens.current()
    }

    /// Run one frame of logic
    pub fn update(&mut self, input: &FrameInput, rng: &mut impl Rng) -> FrameEffects {
        if self.screens.on_transition() {
            self.screens.update_transition();
            return FrameEffects::default();
        }

        match self.screens.current() {
            Screen::Title => self.update_title(input),
            Screen::Gameplay => {
                self.update_gameplay(input, rng);
                FrameEffects::default()
            }
            Screen::GameOver => {
                self.update_game_over(input);
                FrameEffects::default()
            }
        }
    }

    fn update_title(&mut self, input: &FrameInput) -> FrameEffects {
        if input.confirm {
            self.screens.request_transition(Screen::Gameplay);
        }

        let mut effects = FrameEffects::default();
        if input.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            effects.toggle_fullscreen = true;
        }
        effects
    }

    fn update_gameplay(&mut self, input: &FrameInput, rng: &mut impl Rng) {
        self.pickup_flash = (self.pickup_flash - input.delta_time).max(0.0);
        self.gameplay.update(input.delta_time, input.movement, rng, &mut self.events);

        let mut hit = false;
        for event in self.events.drain() {
            match event {
                GameplayEvent::CollectiblePicked { index } => {
                    self.pickup_flash = PICKUP_FLASH_TIME;
                    tracing::debug!(index, score = self.gameplay.stats.score, "collectible picked");
                }
                GameplayEvent::ObstacleHit { index } => {
                    hit = true;
                    tracing::debug!(index, collisions = self.gameplay.stats.collisions, "obstacle hit");
                }
            }
        }

        // The gate keeps this to one transition however many obstacles hit
        if hit {
            self.screens.request_transition(Screen::GameOver);
        }
    }

    fn update_game_over(&mut self, input: &FrameInput) {
        if input.confirm {
            self.gameplay.init_session();
            self.pickup_flash = 0.0;
            // Back to the title rather than straight into a new run
            self.screens.request_transition(Screen::Title);
        }
    }

    /// Apply a value from the debug panel's speed slider
    pub fn apply_debug_speed(&mut self, speed: Option<f32>) {
        if let Some(speed) = speed {
            self.gameplay.set_speed(speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::EntityKind;
    use crate::game::{MoveInput, PlayerStats};
    use crate::screen::FadePhase;
    use macroquad::math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 1.0 / 60.0;

    fn app() -> (AppState, StdRng) {
        (AppState::new(&GameConfig::default()), StdRng::seed_from_u64(42))
    }

    fn idle() -> FrameInput {
        FrameInput { delta_time: DT, ..Default::default() }
    }

    fn confirm() -> FrameInput {
        FrameInput { delta_time: DT, confirm: true, ..Default::default() }
    }

    fn finish_transition(app: &mut AppState, rng: &mut StdRng) {
        let mut frames = 0;
        while app.screens.on_transition() {
            app.update(&idle(), rng);
            frames += 1;
            assert!(frames < 1000);
        }
    }

    /// Move every entity out of the player's lane
    fn clear_track(app: &mut AppState) {
        let reg = &mut app.gameplay.entities;
        for i in 0..reg.len() {
            reg.get_mut(i).unwrap().position = Vec3::new(100.0, 0.0, -15.0);
        }
    }

    fn place_obstacle_on_player(app: &mut AppState, nth: usize) {
        let pos = app.gameplay.player.position;
        let idx = app.gameplay.entities.iter()
            .enumerate()
            .filter(|(_, e)| e.kind() == EntityKind::Obstacle)
            .map(|(i, _)| i)
            .nth(nth)
            .unwrap();
        app.gameplay.entities.get_mut(idx).unwrap().position = pos;
    }

    fn place_collectible_on_player(app: &mut AppState) {
        let pos = app.gameplay.player.position;
        let idx = app.gameplay.entities.iter()
            .position(|e| e.kind() == EntityKind::Collectible)
            .unwrap();
        app.gameplay.entities.get_mut(idx).unwrap().position = pos;
    }

    fn start_game(app: &mut AppState, rng: &mut StdRng) {
        app.update(&confirm(), rng);
        finish_transition(app, rng);
        assert_eq!(app.current_screen(), Screen::Gameplay);
    }

    #[test]
    fn test_title_enter_starts_gameplay() {
        let (mut app, mut rng) = app();
        assert_eq!(app.current_screen(), Screen::Title);

        app.update(&confirm(), &mut rng);
        assert!(app.screens.on_transition());
        assert_eq!(app.current_screen(), Screen::Title);

        finish_transition(&mut app, &mut rng);
        assert_eq!(app.current_screen(), Screen::Gameplay);
    }

    #[test]
    fn test_gameplay_frozen_during_transition() {
        let (mut app, mut rng) = app();
        app.update(&confirm(), &mut rng);

        let moving = FrameInput {
            delta_time: DT,
            movement: MoveInput { right: true, ..Default::default() },
            ..Default::default()
        };
        let before = app.gameplay.player.position;
        while app.screens.on_transition() {
            app.update(&moving, &mut rng);
        }
        assert_eq!(app.gameplay.player.position, before);
        assert_eq!(app.gameplay.stats.playtime, 0.0);
    }

    #[test]
    fn test_obstacle_hit_leads_to_game_over() {
        let (mut app, mut rng) = app();
        start_game(&mut app, &mut rng);
        clear_track(&mut app);
        place_obstacle_on_player(&mut app, 0);

        app.update(&idle(), &mut rng);
        assert_eq!(app.gameplay.stats.collisions, 1);
        let t = *app.screens.transition().unwrap();
        assert_eq!(t.to, Screen::GameOver);

        finish_transition(&mut app, &mut rng);
        assert_eq!(app.current_screen(), Screen::GameOver);
    }

    #[test]
    fn test_multiple_obstacles_single_transition() {
        let (mut app, mut rng) = app();
        start_game(&mut app, &mut rng);
        clear_track(&mut app);
        place_obstacle_on_player(&mut app, 0);
        place_obstacle_on_player(&mut app, 1);

        app.update(&idle(), &mut rng);
        assert_eq!(app.gameplay.stats.collisions, 2);

        let t = *app.screens.transition().unwrap();
        assert_eq!(t.from, Screen::Gameplay);
        assert_eq!(t.to, Screen::GameOver);
        assert_eq!(t.phase, FadePhase::FadeOut);

        // One more frame only advances the fade; no new request is queued
        app.update(&idle(), &mut rng);
        assert_eq!(app.gameplay.stats.collisions, 2);
        assert_eq!(app.screens.transition().unwrap().to, Screen::GameOver);
    }

    #[test]
    fn test_pickup_shows_popup_until_it_expires() {
        let (mut app, mut rng) = app();
        start_game(&mut app, &mut rng);
        clear_track(&mut app);
        assert_eq!(app.pickup_flash, 0.0);

        place_collectible_on_player(&mut app);
        app.update(&idle(), &mut rng);
        assert_eq!(app.gameplay.stats.hits, 1);
        assert_eq!(app.pickup_flash, PICKUP_FLASH_TIME);
        assert_eq!(app.current_screen(), Screen::Gameplay);
        assert!(!app.screens.on_transition());

        let long_frame = FrameInput { delta_time: PICKUP_FLASH_TIME, ..Default::default() };
        app.update(&long_frame, &mut rng);
        assert_eq!(app.pickup_flash, 0.0);
    }

    #[test]
    fn test_game_over_enter_resets_and_returns_to_title() {
        let (mut app, mut rng) = app();
        start_game(&mut app, &mut rng);
        clear_track(&mut app);
        place_obstacle_on_player(&mut app, 0);
        app.update(&idle(), &mut rng);
        finish_transition(&mut app, &mut rng);
        assert_eq!(app.current_screen(), Screen::GameOver);

        let depths: Vec<f32> = app.gameplay.entities.iter().map(|e| e.position.z).collect();
        app.update(&confirm(), &mut rng);

        assert_eq!(app.gameplay.stats, PlayerStats::default());
        assert_eq!(app.gameplay.player.speed, 5.0);
        assert_eq!(app.pickup_flash, 0.0);
        for (e, z) in app.gameplay.entities.iter().zip(depths) {
            assert_eq!(e.position.z, z - 20.0);
        }

        finish_transition(&mut app, &mut rng);
        assert_eq!(app.current_screen(), Screen::Title);
    }

    #[test]
    fn test_game_over_ignores_movement() {
        let (mut app, mut rng) = app();
        start_game(&mut app, &mut rng);
        clear_track(&mut app);
        place_obstacle_on_player(&mut app, 0);
        app.update(&idle(), &mut rng);
        finish_transition(&mut app, &mut rng);

        let stats = app.gameplay.stats;
        let moving = FrameInput {
            delta_time: DT,
            movement: MoveInput { left: true, ..Default::default() },
            ..Default::default()
        };
        app.update(&moving, &mut rng);
        assert_eq!(app.gameplay.stats, stats);
    }

    #[test]
    fn test_fullscreen_toggle_on_title_only() {
        let (mut app, mut rng) = app();
        let toggle = FrameInput { delta_time: DT, toggle_fullscreen: true, ..Default::default() };

        let effects = app.update(&toggle, &mut rng);
        assert!(effects.toggle_fullscreen);
        assert!(app.fullscreen);

        start_game(&mut app, &mut rng);
        let effects = app.update(&toggle, &mut rng);
        assert!(!effects.toggle_fullscreen);
        assert!(app.fullscreen);
    }

    #[test]
    fn test_debug_speed_is_clamped() {
        let (mut app, _) = app();
        app.apply_debug_speed(None);
        assert_eq!(app.gameplay.player.speed, 5.0);
        app.apply_debug_speed(Some(42.0));
        assert_eq!(app.gameplay.player.speed, 10.0);
    }
}
