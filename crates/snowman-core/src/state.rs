//! Frame snapshot: everything a renderer needs to draw one frame.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, MeshId};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    /// Meshes to draw this frame, in draw order.
    pub draws: Vec<DrawItem>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// Camera placement and matrices.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub front: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// Field of view in degrees.
    pub zoom: f32,
}

/// One mesh instance with its model matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub model: Mat4,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub snowmen_killed: u32,
    pub snowmen_spawned: u32,
    pub bullets_fired: u32,
    /// Snowmen alive right now.
    pub snowmen_alive: u32,
    /// Bullets in flight right now.
    pub bullets_live: u32,
}

impl FrameSnapshot {
    /// Number of draws of a given mesh.
    pub fn count_of(&self, mesh: MeshId) -> usize {
        self.draws.iter().filter(|d| d.mesh == mesh).count()
    }
}
