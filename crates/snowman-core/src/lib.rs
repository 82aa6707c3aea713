//! Core types and definitions for the snowman shooter.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, frame snapshots, events, the camera, and constants.
//! It has no dependency on a window system or graphics API.

pub mod camera;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod mesh_bounds;
pub mod state;
pub mod types;
