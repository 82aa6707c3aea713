//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen ---

pub const SCREEN_WIDTH: u32 = 1000;
pub const SCREEN_HEIGHT: u32 = 600;

// --- Player ---

/// Camera start position.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 0.3);

/// Player collision box relative to the camera.
pub const PLAYER_BOX_MIN: Vec3 = Vec3::new(-0.5, -2.0, -0.5);
pub const PLAYER_BOX_MAX: Vec3 = Vec3::new(0.5, 2.0, 0.5);

// --- Camera ---

pub const CAMERA_YAW_DEG: f32 = -90.0;
pub const CAMERA_PITCH_DEG: f32 = 0.0;
pub const CAMERA_SPEED: f32 = 2.5;
pub const CAMERA_SENSITIVITY: f32 = 0.1;
pub const CAMERA_PITCH_LIMIT_DEG: f32 = 89.0;
/// Field of view when not aiming (degrees).
pub const ZOOM_DEFAULT_DEG: f32 = 45.0;
/// Field of view while the aim key is held (degrees).
pub const ZOOM_AIM_DEG: f32 = 30.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

// --- Bullets ---

/// Bullet ring capacity.
pub const MAX_BULLETS: usize = 300;
pub const BULLET_SPEED: f32 = 50.0;
/// Uniform scale of the bullet mesh; also applied to its bounds.
pub const BULLET_SCALE: f32 = 0.05;
/// Offset from the bullet's position to where its mesh is drawn.
pub const BULLET_DRAW_OFFSET: Vec3 = Vec3::new(0.0, -0.17, 0.07);
/// Fixed yaw (radians) added to the bullet mesh on top of its flight yaw.
/// The bullet OBJ is authored for this turn, about +96 degrees about +Y.
pub const BULLET_MESH_YAW_OFFSET: f32 = -80.0;

// --- Snowmen ---

/// Snowman ring capacity.
pub const MAX_SNOWMEN: usize = 200;
pub const SNOWMAN_SPEED: f32 = 8.0;
/// Height snowmen are placed at (feet on the ground plane).
pub const SNOWMAN_SPAWN_Y: f32 = -2.0;
/// Spawn offset range from the camera on x and z, per axis (integer units).
pub const SNOWMAN_SPAWN_OFFSET_MIN: i32 = 65;
pub const SNOWMAN_SPAWN_OFFSET_MAX: i32 = 145;

// --- Spawn timer ---

/// Interval before the first snowman (seconds).
pub const SPAWN_INTERVAL_START: f64 = 6.0;
/// Default floor for the decaying spawn interval (seconds).
pub const SPAWN_INTERVAL_FLOOR: f64 = 0.5;

// --- Visibility ---

/// Bullets further than this from the camera on x or z are culled.
pub const VIEW_HALF_EXTENT: f32 = 60.0;
/// Bullets further than this below the camera are culled.
pub const VIEW_BELOW: f32 = 10.0;

// --- Scenery ---

pub const SKYBOX_SCALE: f32 = 50.0;
pub const GROUND_OFFSET: Vec3 = Vec3::new(0.0, -1.9, 0.0);
pub const GROUND_SCALE: f32 = 5.0;
pub const GUN_OFFSET: Vec3 = Vec3::new(0.0, -0.35, -1.0);
pub const GUN_SCALE: f32 = 0.1;
pub const GAME_OVER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const GAME_OVER_SCALE: f32 = 0.3;

// --- Default mesh extents (used when no OBJ file is supplied) ---

pub const SNOWMAN_MESH_MIN: Vec3 = Vec3::new(-0.6, 0.0, -0.6);
pub const SNOWMAN_MESH_MAX: Vec3 = Vec3::new(0.6, 2.4, 0.6);
pub const BULLET_MESH_MIN: Vec3 = Vec3::new(-0.6, -0.6, -1.5);
pub const BULLET_MESH_MAX: Vec3 = Vec3::new(0.6, 0.6, 1.5);
