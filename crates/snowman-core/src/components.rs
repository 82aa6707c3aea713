//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::Aabb;

/// World position and facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about +Y in radians, taken from the last non-zero move.
    pub yaw: f32,
}

/// Displacement rate in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Collision box in mesh space and its world-space placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Mesh extents (already scaled to the drawn size).
    pub local: Aabb,
    /// `local` translated to the current position. Recomputed every frame.
    pub world: Aabb,
}

/// A fired projectile. Direction is fixed at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub direction: Vec3,
    pub speed: f32,
}

/// An enemy that walks toward the camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Snowman {
    pub speed: f32,
}

/// Marks a snowman that has been shot this frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;
