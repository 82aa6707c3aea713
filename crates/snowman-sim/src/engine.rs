//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless
//! (no window or graphics dependency), enabling deterministic testing.

use std::collections::{BTreeSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use snowman_core::camera::Camera;
use snowman_core::commands::PlayerCommand;
use snowman_core::constants::*;
use snowman_core::enums::{GamePhase, Key};
use snowman_core::events::GameEvent;
use snowman_core::state::FrameSnapshot;
use snowman_core::types::SimTime;

use crate::ring::RingSlots;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::collision::CollisionScratch;
use crate::systems::snapshot::SnapshotInput;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup::{self, MeshExtents};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Fixed ticks per second.
    pub tick_rate: u32,
    /// Lower bound for the decaying spawn interval (seconds).
    pub spawn_interval_floor: f64,
    /// Viewport width / height, used for the projection matrix.
    pub aspect_ratio: f32,
    pub extents: MeshExtents,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            aspect_ratio: SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32,
            extents: MeshExtents::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    dt: f64,
    phase: GamePhase,
    rng: ChaCha8Rng,
    camera: Camera,
    aspect_ratio: f32,
    extents: MeshExtents,
    held_keys: BTreeSet<Key>,
    last_cursor: Option<(f64, f64)>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    collision_scratch: CollisionScratch,
    events: Vec<GameEvent>,
    bullets: RingSlots,
    snowmen: RingSlots,
    spawn_timer: SpawnTimer,
    score: ScoreState,
    quit_requested: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let tick_rate = config.tick_rate.max(1);
        Self {
            world: World::new(),
            time: SimTime::default(),
            dt: 1.0 / tick_rate as f64,
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            camera: Camera::default(),
            aspect_ratio: config.aspect_ratio,
            extents: config.extents,
            held_keys: BTreeSet::new(),
            last_cursor: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            collision_scratch: CollisionScratch::default(),
            events: Vec::new(),
            bullets: RingSlots::new(MAX_BULLETS),
            snowmen: RingSlots::new(MAX_SNOWMEN),
            spawn_timer: SpawnTimer::new(config.spawn_interval_floor),
            score: ScoreState::default(),
            quit_requested: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();
        self.apply_held_keys();

        if self.phase == GamePhase::Playing {
            self.run_systems();
        }
        self.time.advance(self.dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInput {
                time: self.time,
                phase: self.phase,
                camera: &self.camera,
                aspect: self.aspect_ratio,
                bullets: &self.bullets,
                snowmen: &self.snowmen,
                score: &self.score,
                events,
            },
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn spawn_timer(&self) -> &SpawnTimer {
        &self.spawn_timer
    }

    /// True once a `Quit` command has been processed.
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bullet_slots(&self) -> &RingSlots {
        &self.bullets
    }

    pub fn snowman_slots(&self) -> &RingSlots {
        &self.snowmen
    }

    /// Spawn a snowman at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_snowman_at(&mut self, position: glam::Vec3) -> hecs::Entity {
        use snowman_core::components::Transform;

        let entity = world_setup::spawn_snowman(
            &mut self.world,
            &mut self.snowmen,
            &mut self.rng,
            self.camera.position,
            &self.extents,
        );
        if let Ok(mut transform) = self.world.get::<&mut Transform>(entity) {
            transform.position = position;
        }
        systems::bounds::run(&mut self.world);
        entity
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => {
                self.held_keys.insert(key);
            }
            PlayerCommand::KeyUp { key } => {
                self.held_keys.remove(&key);
            }
            PlayerCommand::MouseMoved { x, y } => {
                let (last_x, last_y) = self.last_cursor.unwrap_or((x, y));
                self.last_cursor = Some((x, y));
                // Screen y grows downward; looking up is positive.
                self.camera
                    .process_mouse_movement((x - last_x) as f32, (last_y - y) as f32);
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing {
                    self.fire();
                }
            }
            PlayerCommand::Quit => {
                self.quit_requested = true;
            }
        }
    }

    fn fire(&mut self) {
        let position = self.camera.position;
        let direction = self.camera.front();
        world_setup::spawn_bullet(
            &mut self.world,
            &mut self.bullets,
            position,
            direction,
            &self.extents,
        );
        self.score.bullets_fired += 1;
        self.events.push(GameEvent::BulletFired {
            position,
            direction,
        });
    }

    /// Held keys act every tick, including after game over.
    fn apply_held_keys(&mut self) {
        let dt = self.dt as f32;
        for key in &self.held_keys {
            if let Some(direction) = key.movement() {
                self.camera.process_keyboard(direction, dt);
            }
        }
        self.camera.set_aiming(self.held_keys.contains(&Key::Aim));
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.dt as f32;
        let now = self.time.elapsed_secs + self.dt;
        let camera_pos = self.camera.position;

        // 1. Enemy spawn timer
        if systems::spawner::run(
            &mut self.world,
            &mut self.snowmen,
            &mut self.rng,
            &mut self.spawn_timer,
            now,
            camera_pos,
            &self.extents,
            &mut self.events,
        ) {
            self.score.snowmen_spawned += 1;
        }
        // 2. Movement
        systems::movement::run_bullets(&mut self.world, dt);
        systems::movement::run_snowmen(&mut self.world, camera_pos, dt);
        // 3. Bounding boxes
        systems::bounds::run(&mut self.world);
        // 4. Collisions
        let result =
            systems::collision::run(&mut self.world, camera_pos, &mut self.collision_scratch);
        for position in result.kills {
            self.score.snowmen_killed += 1;
            log::debug!("snowman killed at {position:?}");
            self.events.push(GameEvent::SnowmanKilled { position });
        }
        if result.player_hit {
            self.phase = GamePhase::GameOver;
            log::info!(
                "player caught at tick {}, {} snowmen killed",
                self.time.tick,
                self.score.snowmen_killed
            );
            self.events.push(GameEvent::PlayerKilled {
                score: self.score.snowmen_killed,
            });
        }
        // 5. Cleanup (dead snowmen, bullets out of view)
        systems::cleanup::run(&mut self.world, camera_pos, &mut self.despawn_buffer);
    }
}
