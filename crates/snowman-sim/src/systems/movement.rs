//! Kinematic integration: bullets fly straight, snowmen walk toward the
//! camera on the ground plane.

use glam::Vec3;
use hecs::World;

use snowman_core::components::{Bullet, Dead, Snowman, Transform, Velocity};
use snowman_core::types::yaw_of_move;

/// Advance every bullet along its fixed direction.
pub fn run_bullets(world: &mut World, dt: f32) {
    for (_entity, (_bullet, transform, vel)) in
        world.query_mut::<(&Bullet, &mut Transform, &Velocity)>()
    {
        let step = vel.0 * dt;
        transform.position += step;
        transform.yaw = yaw_of_move(transform.yaw, step);
    }
}

/// Steer every living snowman toward the camera's ground position and
/// advance it. Height is never changed.
pub fn run_snowmen(world: &mut World, camera_pos: Vec3, dt: f32) {
    let target = Vec3::new(camera_pos.x, 0.0, camera_pos.z);

    for (_entity, (snowman, transform, vel, dead)) in
        world.query_mut::<(&Snowman, &mut Transform, &mut Velocity, Option<&Dead>)>()
    {
        if dead.is_some() {
            continue;
        }

        let here = Vec3::new(transform.position.x, 0.0, transform.position.z);
        vel.0 = (target - here).normalize_or_zero() * snowman.speed;

        let step = vel.0 * dt;
        transform.position += step;
        transform.yaw = yaw_of_move(transform.yaw, step);
    }
}
