//! Player Stats
//!
//! Per-session counters shown on the HUD, the game-over screen and the
//! debug panel.

/// Session accumulators. Only ever grow during a run; zeroed on restart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerStats {
    /// Collectibles picked up
    pub hits: u32,
    /// Frames with at least one movement key held
    pub keystrokes: u32,
    /// Obstacles touched
    pub collisions: u32,
    pub score: i32,
    /// Seconds spent in gameplay
    pub playtime: f32,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Credit one pickup worth `reward` points
    pub fn record_pickup(&mut self, reward: i32) {
        self.hits += 1;
        self.score += reward;
    }

    pub fn record_collision(&mut self) {
        self.collisions += 1;
    }

    pub fn record_keystroke(&mut self) {
        self.keystrokes += 1;
    }

    pub fn add_playtime(&mut self, delta_time: f32) {
        self.playtime += delta_time.max(0.0);
    }
}
