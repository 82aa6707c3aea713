//! Cleanup system: removes shot snowmen and bullets that left the view.

use glam::Vec3;
use hecs::{Entity, World};

use snowman_core::components::{Bullet, Dead, Transform};
use snowman_core::constants::{VIEW_BELOW, VIEW_HALF_EXTENT};
use snowman_core::types::Aabb;

/// Region around the camera in which bullets are kept and drawn.
pub fn view_box(camera_pos: Vec3) -> Aabb {
    Aabb::new(
        Vec3::new(-VIEW_HALF_EXTENT, -VIEW_BELOW, -VIEW_HALF_EXTENT),
        Vec3::splat(VIEW_HALF_EXTENT),
    )
    .translated(camera_pos)
}

/// Despawn dead snowmen and out-of-view bullets.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, camera_pos: Vec3, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _dead) in world.query_mut::<&Dead>() {
        despawn_buffer.push(entity);
    }

    // Frozen in place instead, these would stay live hazards that kill
    // snowmen walking into them.
    let view = view_box(camera_pos);
    for (entity, (_bullet, transform)) in world.query_mut::<(&Bullet, &Transform)>() {
        if !view.contains_point(transform.position) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
