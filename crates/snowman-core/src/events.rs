//! Events emitted by the simulation for UI and log feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A snowman entered the field.
    SnowmanSpawned { position: Vec3 },
    /// The player fired.
    BulletFired { position: Vec3, direction: Vec3 },
    /// A bullet hit a snowman.
    SnowmanKilled { position: Vec3 },
    /// A snowman reached the player. Emitted once.
    PlayerKilled { score: u32 },
}
