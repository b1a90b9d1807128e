//! Game Foundation Module
//!
//! The endless-runner simulation, free of any window or drawing code so it
//! can be driven by tests as easily as by the frame loop.
//!
//! Key concepts:
//! - Entity registry: fixed pool of obstacles and collectibles, recycled by depth
//! - Collision: inclusive AABB overlap between the player cube and an entity
//! - Simulation: per-frame movement, scrolling, scoring and speed ramp
//! - Event: what happened this frame, for the app to react to

pub mod entity;
pub mod stats;
pub mod collision;
pub mod lightning;
pub mod event;
pub mod simulation;

// Re-export main types
pub use stats::PlayerStats;
pub use event::{GameplayEvent, GameplayEvents};
pub use simulation::{Gameplay, MoveInput};
