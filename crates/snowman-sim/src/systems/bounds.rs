//! Recompute world-space collision boxes from the current positions.

use hecs::World;

use snowman_core::components::{Bounds, Transform};

pub fn run(world: &mut World) {
    for (_entity, (transform, bounds)) in world.query_mut::<(&Transform, &mut Bounds)>() {
        bounds.world = bounds.local.translated(transform.position);
    }
}
