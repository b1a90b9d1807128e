//! Event System
//!
//! The simulation reports what happened during a frame through events
//! instead of reaching into the screen layer directly:
//!
//! 1. Simulation detects an obstacle overlap → sends `ObstacleHit`
//! 2. App drains the frame's events → requests the game-over screen
//!
//! The app drains the queue after every gameplay frame, so it never carries
//! events over to the next one.

/// A queue for events of a single type.
/// Events are collected during the frame and drained once it ends.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something the simulation wants the rest of the game to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameplayEvent {
    /// Collectible at this registry index was picked up (and recycled)
    CollectiblePicked { index: usize },
    /// Obstacle at this registry index touched the player
    ObstacleHit { index: usize },
}

pub type GameplayEvents = EventQueue<GameplayEvent>;
