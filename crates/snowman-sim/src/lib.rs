//! Simulation engine for the snowman shooter.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `FrameSnapshot`s for a renderer.

pub mod engine;
pub mod ring;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use snowman_core as core;
