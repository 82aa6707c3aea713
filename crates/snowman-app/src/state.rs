//! State shared between the game loop thread and its owner.

use std::sync::{Arc, Mutex};

use snowman_core::commands::PlayerCommand;
use snowman_core::state::FrameSnapshot;

/// Commands sent from the owning thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
