//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Snowmen spawn and move; the player can shoot.
    #[default]
    Playing,
    /// A snowman reached the player. Terminal.
    GameOver,
}

/// Held-key inputs applied every tick while down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Backward,
    Left,
    Right,
    /// Narrows the field of view.
    Aim,
}

/// Camera movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Meshes the renderer is expected to have loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshId {
    SkyBox,
    Ground,
    Gun,
    Bullet,
    Snowman,
    GameOver,
}

impl Key {
    /// Camera direction for movement keys. `None` for `Aim`.
    pub fn movement(self) -> Option<CameraMovement> {
        match self {
            Key::Forward => Some(CameraMovement::Forward),
            Key::Backward => Some(CameraMovement::Backward),
            Key::Left => Some(CameraMovement::Left),
            Key::Right => Some(CameraMovement::Right),
            Key::Aim => None,
        }
    }
}
