//! Box-overlap collision between the player, snowmen, and bullets.

use glam::Vec3;
use hecs::{Entity, World};

use snowman_core::components::{Bounds, Bullet, Dead, Snowman, Transform};
use snowman_core::constants::{PLAYER_BOX_MAX, PLAYER_BOX_MIN};
use snowman_core::types::Aabb;

#[derive(Debug, Default)]
pub struct CollisionResult {
    /// A snowman overlapped the player this frame.
    pub player_hit: bool,
    /// Positions of snowmen shot this frame.
    pub kills: Vec<Vec3>,
}

/// Per-tick working buffers, kept by the engine between ticks.
#[derive(Debug, Default)]
pub struct CollisionScratch {
    bullet_boxes: Vec<Aabb>,
    killed: Vec<Entity>,
}

/// Player collision box around the camera.
pub fn player_box(camera_pos: Vec3) -> Aabb {
    Aabb::new(PLAYER_BOX_MIN, PLAYER_BOX_MAX).translated(camera_pos)
}

/// Test every living snowman against the player and every bullet.
///
/// Shot snowmen get a `Dead` marker; each counts once no matter how many
/// bullets hit it. Bullets pass through and keep flying.
pub fn run(
    world: &mut World,
    camera_pos: Vec3,
    scratch: &mut CollisionScratch,
) -> CollisionResult {
    let player = player_box(camera_pos);
    let mut result = CollisionResult::default();
    let CollisionScratch {
        bullet_boxes,
        killed,
    } = scratch;
    bullet_boxes.clear();
    killed.clear();

    bullet_boxes.extend(
        world
            .query_mut::<(&Bullet, &Bounds)>()
            .into_iter()
            .map(|(_entity, (_bullet, bounds))| bounds.world),
    );

    for (entity, (_snowman, transform, bounds, dead)) in
        world.query_mut::<(&Snowman, &Transform, &Bounds, Option<&Dead>)>()
    {
        if dead.is_some() {
            continue;
        }

        if player.overlaps(&bounds.world) {
            result.player_hit = true;
        }

        if bullet_boxes.iter().any(|b| b.overlaps(&bounds.world)) {
            killed.push(entity);
            result.kills.push(transform.position);
        }
    }

    for entity in killed.drain(..) {
        let _ = world.insert_one(entity, Dead);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snowman(world: &mut World, position: Vec3) -> Entity {
        let local = Aabb::new(Vec3::new(-0.6, 0.0, -0.6), Vec3::new(0.6, 2.4, 0.6));
        world.spawn((
            Snowman { speed: 8.0 },
            Transform { position, yaw: 0.0 },
            Bounds {
                local,
                world: local.translated(position),
            },
        ))
    }

    fn bullet(world: &mut World, position: Vec3) -> Entity {
        let local = Aabb::new(Vec3::splat(-0.05), Vec3::splat(0.05));
        world.spawn((
            Bullet {
                direction: Vec3::NEG_Z,
                speed: 50.0,
            },
            Transform { position, yaw: 0.0 },
            Bounds {
                local,
                world: local.translated(position),
            },
        ))
    }

    #[test]
    fn test_hit_marks_dead_once() {
        let mut world = World::new();
        let mut scratch = CollisionScratch::default();
        let target = snowman(&mut world, Vec3::new(0.0, -2.0, -10.0));
        bullet(&mut world, Vec3::new(0.0, -1.0, -10.0));
        bullet(&mut world, Vec3::new(0.2, -1.0, -10.0));

        let result = run(&mut world, Vec3::ZERO, &mut scratch);
        assert_eq!(result.kills, vec![Vec3::new(0.0, -2.0, -10.0)]);
        assert!(!result.player_hit);
        assert!(world.get::<&Dead>(target).is_ok());

        // Already dead: no second kill.
        let again = run(&mut world, Vec3::ZERO, &mut scratch);
        assert!(again.kills.is_empty());
    }

    #[test]
    fn test_scratch_buffers_are_reused() {
        let mut world = World::new();
        let mut scratch = CollisionScratch::default();
        for i in 0..16 {
            bullet(&mut world, Vec3::new(i as f32, 50.0, 0.0));
        }
        run(&mut world, Vec3::ZERO, &mut scratch);
        let capacity = scratch.bullet_boxes.capacity();
        assert!(capacity >= 16);

        run(&mut world, Vec3::ZERO, &mut scratch);
        assert_eq!(scratch.bullet_boxes.capacity(), capacity);
        assert_eq!(scratch.bullet_boxes.len(), 16);
        assert!(scratch.killed.is_empty());
    }

    #[test]
    fn test_snowman_touching_player() {
        let mut world = World::new();
        let mut scratch = CollisionScratch::default();
        snowman(&mut world, Vec3::new(0.5, -2.0, 0.0));
        assert!(run(&mut world, Vec3::ZERO, &mut scratch).player_hit);
    }
}
