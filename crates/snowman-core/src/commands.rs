//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Key;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Held keys ---
    /// A key went down. Movement keys move the camera every tick while held.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },

    // --- Mouse ---
    /// Absolute cursor position. The first event only seeds the last-known
    /// position so the camera does not jump.
    MouseMoved { x: f64, y: f64 },
    /// Left button pressed: fire one bullet along the camera front.
    Fire,

    // --- Session ---
    /// Close the game.
    Quit,
}
