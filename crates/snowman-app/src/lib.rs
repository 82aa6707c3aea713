//! Snowman shooter application.
//!
//! Wires configuration, the scripted input driver, and the simulation
//! engine together behind a fixed-rate game loop thread.

pub mod autopilot;
pub mod cli;
pub mod config;
pub mod game_loop;
pub mod state;

pub use snowman_core as core;
