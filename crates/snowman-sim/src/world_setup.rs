//! Entity spawn factories.
//!
//! Creates bullets and snowmen with their component bundles and records
//! them in the owning ring, despawning whatever the ring evicts.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use snowman_core::components::*;
use snowman_core::constants::*;
use snowman_core::types::{yaw_of_move, Aabb};

use crate::ring::RingSlots;

/// Mesh-space extents of the collidable meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshExtents {
    pub snowman: Aabb,
    /// Unscaled; `BULLET_SCALE` is applied when a bullet spawns.
    pub bullet: Aabb,
}

impl Default for MeshExtents {
    fn default() -> Self {
        Self {
            snowman: Aabb::new(SNOWMAN_MESH_MIN, SNOWMAN_MESH_MAX),
            bullet: Aabb::new(BULLET_MESH_MIN, BULLET_MESH_MAX),
        }
    }
}

/// Random spawn point around the camera: one of four diagonal quadrants,
/// 65..145 units out on both x and z, feet on the ground.
pub fn snowman_spawn_point(rng: &mut ChaCha8Rng, camera_pos: Vec3) -> Vec3 {
    let quadrant: u32 = rng.gen_range(1..=4);
    let mut dx = rng.gen_range(SNOWMAN_SPAWN_OFFSET_MIN..SNOWMAN_SPAWN_OFFSET_MAX) as f32;
    let mut dz = rng.gen_range(SNOWMAN_SPAWN_OFFSET_MIN..SNOWMAN_SPAWN_OFFSET_MAX) as f32;
    if quadrant >= 3 {
        dx = -dx;
    }
    if quadrant % 2 == 0 {
        dz = -dz;
    }
    Vec3::new(camera_pos.x + dx, SNOWMAN_SPAWN_Y, camera_pos.z + dz)
}

/// Spawn a snowman near the camera and store it in `ring`.
pub fn spawn_snowman(
    world: &mut World,
    ring: &mut RingSlots,
    rng: &mut ChaCha8Rng,
    camera_pos: Vec3,
    extents: &MeshExtents,
) -> Entity {
    let position = snowman_spawn_point(rng, camera_pos);
    let bounds = Bounds {
        local: extents.snowman,
        world: extents.snowman.translated(position),
    };

    let entity = world.spawn((
        Snowman {
            speed: SNOWMAN_SPEED,
        },
        Transform { position, yaw: 0.0 },
        Velocity::default(),
        bounds,
    ));
    store(world, ring, entity);
    entity
}

/// Spawn a bullet at `position` flying along `direction`.
pub fn spawn_bullet(
    world: &mut World,
    ring: &mut RingSlots,
    position: Vec3,
    direction: Vec3,
    extents: &MeshExtents,
) -> Entity {
    let direction = direction.normalize_or_zero();
    let local = extents.bullet.scaled(BULLET_SCALE);
    let bounds = Bounds {
        local,
        world: local.translated(position),
    };

    let entity = world.spawn((
        Bullet {
            direction,
            speed: BULLET_SPEED,
        },
        Transform {
            position,
            yaw: yaw_of_move(0.0, direction),
        },
        Velocity(direction * BULLET_SPEED),
        bounds,
    ));
    store(world, ring, entity);
    entity
}

fn store(world: &mut World, ring: &mut RingSlots, entity: Entity) {
    if let Some(evicted) = ring.insert(entity) {
        // Already gone if cleanup removed it first.
        if world.despawn(evicted).is_ok() {
            log::trace!("ring full, evicted {evicted:?}");
        }
    }
}
