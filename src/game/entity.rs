//! Entity Registry
//!
//! A fixed pool of obstacles and collectibles created once at startup.
//! Entities are never spawned or despawned after that: "respawning" is
//! just moving an entity back to the far end of the track, which gives the
//! illusion of endless terrain without any reallocation.

use macroquad::math::Vec3;
use crate::config::WorldConfig;

/// What happens when the player touches an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Ends the run on contact
    Obstacle,
    /// Scores on contact, then recycles
    Collectible,
}

/// Display tag for the renderer (RGB 0-255)
pub type ColorTag = [u8; 3];

pub const OBSTACLE_COLOR: ColorTag = [230, 41, 55];
pub const COLLECTIBLE_COLOR: ColorTag = [0, 228, 48];

/// A single actor on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Center of the box
    pub position: Vec3,
    /// Full extents (always positive)
    size: Vec3,
    pub color: ColorTag,
    kind: EntityKind,
}

impl Entity {
    /// Sizes are forced positive so the box is never inside-out.
    pub fn new(position: Vec3, size: Vec3, color: ColorTag, kind: EntityKind) -> Self {
        Self {
            position,
            size: size.abs().max(Vec3::splat(f32::EPSILON)),
            color,
            kind,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}

/// Owns every entity on the track.
///
/// The sequence is ordered (obstacles first, then collectibles) and its
/// length never changes after `initialize`.
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    /// Depth past which an entity has gone behind the camera
    recycle_threshold: f32,
    /// Depth recycled entities jump back to
    recycle_depth: f32,
}

impl EntityRegistry {
    /// Populate the track with staggered obstacles and collectibles.
    ///
    /// Each successive entity sits 5 units further from the camera and
    /// alternates sideways, so the first few seconds are always dodgeable.
    pub fn initialize(config: &WorldConfig) -> Self {
        let mut entities = Vec::with_capacity(config.obstacle_count + config.collectible_count);

        for i in 0..config.obstacle_count {
            let i = i as f32;
            entities.push(Entity::new(
                Vec3::new(-2.0 + i * 2.0, 0.0, -10.0 - i * 5.0),
                Vec3::splat(1.0),
                OBSTACLE_COLOR,
                EntityKind::Obstacle,
            ));
        }

        for i in 0..config.collectible_count {
            let i = i as f32;
            entities.push(Entity::new(
                Vec3::new(2.0 - i * 2.0, 0.0, -12.0 - i * 5.0),
                Vec3::splat(0.5),
                COLLECTIBLE_COLOR,
                EntityKind::Collectible,
            ));
        }

        Self {
            entities,
            recycle_threshold: config.recycle_threshold,
            recycle_depth: config.recycle_depth,
        }
    }

    /// Move one entity toward the camera, wrapping it to the far depth once
    /// it has passed the threshold. Returns true if it wrapped.
    pub fn advance(&mut self, index: usize, delta_z: f32) -> bool {
        let threshold = self.recycle_threshold;
        let far = self.recycle_depth;
        let Some(entity) = self.entities.get_mut(index) else { return false };

        entity.position.z += delta_z;
        if entity.position.z > threshold {
            entity.position.z = far;
            true
        } else {
            false
        }
    }

    /// Send an entity straight back to the far depth (consumed pickups)
    pub fn recycle(&mut self, index: usize) {
        let far = self.recycle_depth;
        if let Some(entity) = self.entities.get_mut(index) {
            entity.position.z = far;
        }
    }

    /// Shift every entity's depth by `offset` without touching x/y
    pub fn shift_depth(&mut self, offset: f32) {
        for entity in &mut self.entities {
            entity.position.z += offset;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }
}
