//! Collision System
//!
//! Axis-aligned box overlap between the player cube and track entities.
//! Touching faces count as a hit: every comparison is inclusive.

use macroquad::math::Vec3;
use super::entity::Entity;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box from a center point and half extents
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Inclusive overlap test on all three axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x && self.min.x <= other.max.x
            && self.max.y >= other.min.y && self.min.y <= other.max.y
            && self.max.z >= other.min.z && self.min.z <= other.max.z
    }
}

/// Bounding box of an entity (center +/- half its size)
pub fn entity_box(entity: &Entity) -> Aabb {
    Aabb::from_center(entity.position, entity.size() * 0.5)
}

/// Does the player cube (center, half edge length) touch the entity?
pub fn check_collision(player: Vec3, half_extent: f32, entity: &Entity) -> bool {
    Aabb::from_center(player, Vec3::splat(half_extent)).overlaps(&entity_box(entity))
}
