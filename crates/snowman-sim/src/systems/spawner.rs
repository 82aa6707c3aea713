//! Enemy spawn timer: spawns one snowman each time a shrinking interval
//! elapses.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use snowman_core::components::Transform;
use snowman_core::constants::SPAWN_INTERVAL_START;
use snowman_core::events::GameEvent;

use crate::ring::RingSlots;
use crate::world_setup::{self, MeshExtents};

/// Decaying spawn interval.
///
/// Each spawn shrinks the interval by `interval / now`, so the longer the
/// game runs the faster snowmen arrive, down to `floor_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    pub last_spawn_secs: f64,
    pub interval_secs: f64,
    pub floor_secs: f64,
}

impl SpawnTimer {
    pub fn new(floor_secs: f64) -> Self {
        Self {
            last_spawn_secs: 0.0,
            interval_secs: SPAWN_INTERVAL_START,
            floor_secs: floor_secs.max(0.0),
        }
    }

    /// Returns true when a spawn is due at `now`, updating the schedule.
    pub fn poll(&mut self, now: f64) -> bool {
        if now <= self.last_spawn_secs + self.interval_secs {
            return false;
        }
        // now > 0 here.
        self.last_spawn_secs = now;
        self.interval_secs -= self.interval_secs / now;
        self.interval_secs = self.interval_secs.max(self.floor_secs);
        true
    }
}

/// Spawn a snowman if the timer says one is due.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    ring: &mut RingSlots,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    now: f64,
    camera_pos: Vec3,
    extents: &MeshExtents,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !timer.poll(now) {
        return false;
    }

    let entity = world_setup::spawn_snowman(world, ring, rng, camera_pos, extents);
    if let Ok(transform) = world.get::<&Transform>(entity) {
        log::debug!(
            "snowman spawned at {:?}, next in {:.2}s",
            transform.position,
            timer.interval_secs
        );
        events.push(GameEvent::SnowmanSpawned {
            position: transform.position,
        });
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_before_first_interval() {
        let mut timer = SpawnTimer::new(0.5);
        assert!(!timer.poll(1.0));
        assert!(!timer.poll(6.0), "interval boundary is exclusive");
        assert!(timer.poll(6.5));
        assert_eq!(timer.last_spawn_secs, 6.5);
    }

    #[test]
    fn test_interval_decays_by_interval_over_now() {
        let mut timer = SpawnTimer::new(0.0);
        assert!(timer.poll(12.0));
        // 6 - 6/12 = 5.5
        assert!((timer.interval_secs - 5.5).abs() < 1e-12);
        assert!(!timer.poll(17.0));
        assert!(timer.poll(17.6));
        let expected = 5.5 - 5.5 / 17.6;
        assert!((timer.interval_secs - expected).abs() < 1e-12);
    }

    #[test]
    fn test_interval_respects_floor() {
        let mut timer = SpawnTimer::new(5.5);
        assert!(timer.poll(6.01));
        // 6 - 6/6.01 is about 5.0, below the floor
        assert_eq!(timer.interval_secs, 5.5);
        assert!(!timer.poll(11.5));
        assert!(timer.poll(11.6));
        assert_eq!(timer.interval_secs, 5.5);
    }

    #[test]
    fn test_interval_decays_slowly() {
        let mut timer = SpawnTimer::new(0.0);
        let mut now = 6.01;
        let mut intervals = Vec::new();
        for _ in 0..4 {
            assert!(timer.poll(now));
            intervals.push(timer.interval_secs);
            now += timer.interval_secs + 0.01;
        }
        assert!((intervals[0] - 5.0017).abs() < 1e-3, "{intervals:?}");
        assert!((intervals[1] - 4.548).abs() < 1e-2, "{intervals:?}");
        assert!(intervals.windows(2).all(|w| w[1] < w[0]));
        assert!(intervals[3] > 4.0, "{intervals:?}");
    }

    #[test]
    fn test_negative_floor_is_clamped() {
        let timer = SpawnTimer::new(-3.0);
        assert_eq!(timer.floor_secs, 0.0);
    }
}
