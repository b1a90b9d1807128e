//! Gameplay Simulation
//!
//! One `update` call per gameplay frame. Order matters and is fixed:
//! playtime, movement, arena clamp, lightning, scroll + collide, speed ramp.
//!
//! The simulation never talks to the screen layer. Anything the rest of the
//! game must react to (an obstacle hit) goes out through `GameplayEvents`.

use macroquad::math::Vec3;
use rand::Rng;
use crate::config::{GameConfig, PlayerConfig};
use super::collision::check_collision;
use super::entity::{EntityKind, EntityRegistry};
use super::event::{GameplayEvent, GameplayEvents};
use super::lightning::{LightningChange, LightningTimer};
use super::stats::PlayerStats;

/// Snapshot of the movement keys held this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    /// Away from the camera (-z)
    pub forward: bool,
    /// Toward the camera (+z)
    pub backward: bool,
}

impl MoveInput {
    pub fn any(&self) -> bool {
        self.left || self.right || self.forward || self.backward
    }
}

/// The player cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Units per second, never negative
    pub speed: f32,
}

/// Everything that changes while a run is in progress
pub struct Gameplay {
    pub player: PlayerState,
    pub stats: PlayerStats,
    pub entities: EntityRegistry,
    pub lightning: LightningTimer,
    player_config: PlayerConfig,
    collectible_reward: i32,
    session_shift: f32,
}

impl Gameplay {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: PlayerState {
                position: Vec3::from_array(config.player.start),
                speed: config.player.initial_speed,
            },
            stats: PlayerStats::new(),
            entities: EntityRegistry::initialize(&config.world),
            lightning: LightningTimer::new(&config.lightning),
            player_config: config.player.clone(),
            collectible_reward: config.world.collectible_reward,
            session_shift: config.world.session_shift,
        }
    }

    /// Reset the run: player back to the start, speed and stats reset, and the
    /// whole track pushed back by the session shift. Entity x/y are kept.
    /// The lightning timer keeps running across sessions.
    pub fn init_session(&mut self) {
        self.player.position = Vec3::from_array(self.player_config.start);
        self.player.speed = self.player_config.initial_speed;
        self.stats.reset();
        self.entities.shift_depth(self.session_shift);
        tracing::info!(
            start = ?self.player.position,
            speed = self.player.speed,
            "session reset"
        );
    }

    /// Run one frame of gameplay
    pub fn update(
        &mut self,
        delta_time: f32,
        input: MoveInput,
        rng: &mut impl Rng,
        events: &mut GameplayEvents,
    ) {
        self.stats.add_playtime(delta_time);

        // Movement
        let step = self.player.speed * delta_time;
        let pos = &mut self.player.position;
        if input.right { pos.x += step; }
        if input.left { pos.x -= step; }
        if input.forward { pos.z -= step; }
        if input.backward { pos.z += step; }
        if input.any() {
            self.stats.record_keystroke();
        }

        self.clamp_to_arena();

        // Environment
        if self.lightning.update(delta_time, rng) == LightningChange::Struck {
            tracing::trace!(next_cooldown = self.lightning.cooldown, "lightning strike");
        }

        // Scroll and collide, one entity at a time
        let scroll = self.player.speed * delta_time;
        let half_extent = self.player_config.half_extent;
        for index in 0..self.entities.len() {
            self.entities.advance(index, scroll);

            let Some(entity) = self.entities.get(index) else { continue };
            if !check_collision(self.player.position, half_extent, entity) {
                continue;
            }

            match entity.kind() {
                EntityKind::Collectible => {
                    self.stats.record_pickup(self.collectible_reward);
                    self.entities.recycle(index);
                    events.send(GameplayEvent::CollectiblePicked { index });
                }
                EntityKind::Obstacle => {
                    self.stats.record_collision();
                    events.send(GameplayEvent::ObstacleHit { index });
                }
            }
        }

        // Speed ramp
        let mut speed = self.player.speed + self.player_config.speed_ramp * delta_time;
        if let Some(max) = self.player_config.max_speed {
            speed = speed.min(max);
        }
        self.player.speed = speed.max(0.0);
    }

    /// Hard arena bounds, applied after movement every frame
    fn clamp_to_arena(&mut self) {
        let p = &self.player_config;
        let pos = &mut self.player.position;
        pos.x = pos.x.clamp(p.min_x, p.max_x);
        pos.z = pos.z.clamp(p.min_z, p.max_z);
    }

    /// The one field the debug panel may write. Clamped to the slider range.
    pub fn set_speed(&mut self, speed: f32) {
        let max = self.player_config.slider_max_speed;
        self.player.speed = if speed.is_nan() { 0.0 } else { speed.clamp(0.0, max) };
    }

    /// Upper end of the debug speed slider
    pub fn max_slider_speed(&self) -> f32 {
        self.player_config.slider_max_speed
    }

    /// Points a single pickup is worth
    pub fn collectible_reward(&self) -> i32 {
        self.collectible_reward
    }

    pub fn half_extent(&self) -> f32 {
        self.player_config.half_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Gameplay, StdRng, GameplayEvents) {
        (
            Gameplay::new(&GameConfig::default()),
            StdRng::seed_from_u64(42),
            GameplayEvents::new(),
        )
    }

    /// Index of the first entity of a kind
    fn first_of(game: &Gameplay, kind: EntityKind) -> usize {
        game.entities.iter().position(|e| e.kind() == kind).unwrap()
    }

    /// Park every entity far away so only the one under test can collide
    fn clear_track(game: &mut Gameplay) {
        for i in 0..game.entities.len() {
            game.entities.get_mut(i).unwrap().position = Vec3::new(100.0, 0.0, -15.0);
        }
    }

    #[test]
    fn test_starts_at_session_start() {
        let (game, _, _) = setup();
        assert_eq!(game.player.position, Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(game.player.speed, 5.0);
        assert_eq!(game.stats, PlayerStats::default());
    }

    #[test]
    fn test_position_always_inside_arena() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        let pushes = [
            MoveInput { left: true, forward: true, ..Default::default() },
            MoveInput { right: true, backward: true, ..Default::default() },
            MoveInput { right: true, forward: true, ..Default::default() },
        ];
        for input in pushes {
            for _ in 0..120 {
                game.update(0.1, input, &mut rng, &mut events);
                let p = game.player.position;
                assert!((-4.0..=4.0).contains(&p.x), "x out of bounds: {}", p.x);
                assert!((-1.0..=2.0).contains(&p.z), "z out of bounds: {}", p.z);
            }
        }
        assert_eq!(game.player.position.x, 4.0);
        assert_eq!(game.player.position.z, -1.0);
    }

    #[test]
    fn test_clamp_applies_without_input() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        game.player.position = Vec3::new(9.0, 0.0, -5.0);
        game.update(0.016, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.player.position.x, 4.0);
        assert_eq!(game.player.position.z, -1.0);
    }

    #[test]
    fn test_movement_direction_and_distance() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        game.update(0.1, MoveInput { right: true, ..Default::default() }, &mut rng, &mut events);
        assert!((game.player.position.x - 0.5).abs() < 1e-5);

        game.update(0.1, MoveInput { forward: true, ..Default::default() }, &mut rng, &mut events);
        assert!(game.player.position.z < 0.5);
    }

    #[test]
    fn test_keystrokes_count_frames_not_keys() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);

        let all = MoveInput { left: true, right: true, forward: true, backward: true };
        game.update(0.016, all, &mut rng, &mut events);
        assert_eq!(game.stats.keystrokes, 1);

        game.update(0.016, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.stats.keystrokes, 1);

        game.update(0.016, MoveInput { left: true, ..Default::default() }, &mut rng, &mut events);
        assert_eq!(game.stats.keystrokes, 2);
    }

    #[test]
    fn test_playtime_and_speed_ramp() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        for _ in 0..10 {
            game.update(0.5, MoveInput::default(), &mut rng, &mut events);
        }
        assert!((game.stats.playtime - 5.0).abs() < 1e-4);
        assert!((game.player.speed - 5.05).abs() < 1e-4);
    }

    #[test]
    fn test_speed_cap_when_configured() {
        let mut config = GameConfig::default();
        config.player.speed_ramp = 10.0;
        config.player.max_speed = Some(6.0);
        let mut game = Gameplay::new(&config);
        clear_track(&mut game);
        let mut rng = StdRng::seed_from_u64(3);
        let mut events = GameplayEvents::new();

        game.update(1.0, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.player.speed, 6.0);
    }

    #[test]
    fn test_collectible_pickup() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        let idx = first_of(&game, EntityKind::Collectible);
        game.entities.get_mut(idx).unwrap().position = game.player.position;

        game.update(0.0, MoveInput::default(), &mut rng, &mut events);

        assert_eq!(game.stats.hits, 1);
        assert_eq!(game.stats.score, 100);
        assert_eq!(game.entities.get(idx).unwrap().position.z, -20.0);
        let sent: Vec<_> = events.drain().collect();
        assert_eq!(sent, vec![GameplayEvent::CollectiblePicked { index: idx }]);

        // Recycled immediately: the next frame does not count it again
        game.update(0.0, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.stats.hits, 1);
        assert_eq!(game.stats.score, 100);
        assert_eq!(events.drain().count(), 0);
    }

    #[test]
    fn test_obstacle_hit_reports_event() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        let idx = first_of(&game, EntityKind::Obstacle);
        game.entities.get_mut(idx).unwrap().position = game.player.position;

        game.update(0.0, MoveInput::default(), &mut rng, &mut events);

        assert_eq!(game.stats.collisions, 1);
        assert_eq!(game.stats.score, 0);
        let sent: Vec<_> = events.drain().collect();
        assert_eq!(sent, vec![GameplayEvent::ObstacleHit { index: idx }]);
        // Obstacles are not recycled on contact
        assert_eq!(game.entities.get(idx).unwrap().position, game.player.position);
    }

    #[test]
    fn test_two_obstacles_same_frame() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        let pos = game.player.position;
        game.entities.get_mut(0).unwrap().position = pos;
        game.entities.get_mut(1).unwrap().position = pos;

        game.update(0.0, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.stats.collisions, 2);
        assert_eq!(events.drain().count(), 2);
    }

    #[test]
    fn test_scroll_recycles_past_threshold() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        game.entities.get_mut(0).unwrap().position.z = 4.9;

        // speed 5.0, dt 0.1 -> 5.4 -> wrapped
        game.update(0.1, MoveInput::default(), &mut rng, &mut events);
        assert_eq!(game.entities.get(0).unwrap().position.z, -20.0);
    }

    #[test]
    fn test_init_session_resets_run() {
        let (mut game, mut rng, mut events) = setup();
        for _ in 0..50 {
            game.update(0.05, MoveInput { left: true, ..Default::default() }, &mut rng, &mut events);
        }
        game.stats.record_pickup(100);
        game.player.speed = 9.0;

        let depths: Vec<f32> = game.entities.iter().map(|e| e.position.z).collect();
        let lightning = game.lightning.clone();
        game.init_session();

        assert_eq!(game.stats, PlayerStats::default());
        assert_eq!(game.player.speed, 5.0);
        assert_eq!(game.player.position, Vec3::new(0.0, 0.0, 0.5));
        for (e, z) in game.entities.iter().zip(depths) {
            assert_eq!(e.position.z, z - 20.0);
        }
        assert_eq!(game.lightning, lightning);
    }

    #[test]
    fn test_lightning_runs_during_gameplay() {
        let (mut game, mut rng, mut events) = setup();
        clear_track(&mut game);
        game.update(3.1, MoveInput::default(), &mut rng, &mut events);
        assert!(game.lightning.active);
    }

    #[test]
    fn test_set_speed_is_bounded() {
        let (mut game, _, _) = setup();
        game.set_speed(7.25);
        assert_eq!(game.player.speed, 7.25);
        game.set_speed(50.0);
        assert_eq!(game.player.speed, 10.0);
        game.set_speed(-3.0);
        assert_eq!(game.player.speed, 0.0);
        game.set_speed(f32::NAN);
        assert_eq!(game.player.speed, 0.0);
    }
}
