//! Scripted input: turns the cursor toward the nearest snowman and fires
//! once it is lined up and within bullet range.
//!
//! Sees the game only through `FrameSnapshot`s, the same data a renderer
//! gets, and answers with ordinary `PlayerCommand`s.

use glam::Vec3;

use snowman_core::commands::PlayerCommand;
use snowman_core::constants::{CAMERA_SENSITIVITY, SCREEN_HEIGHT, SCREEN_WIDTH, VIEW_HALF_EXTENT};
use snowman_core::enums::{GamePhase, MeshId};
use snowman_core::state::FrameSnapshot;

use crate::config::AutopilotConfig;

/// Source of player commands for the game loop.
pub trait InputSource: Send {
    /// Commands to apply on the next tick, given the last frame.
    fn poll(&mut self, snapshot: &FrameSnapshot) -> Vec<PlayerCommand>;
}

/// Sends nothing. Used when the autopilot is disabled.
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _snapshot: &FrameSnapshot) -> Vec<PlayerCommand> {
        Vec::new()
    }
}

pub struct Autopilot {
    settings: AutopilotConfig,
    cursor: (f64, f64),
    seeded: bool,
    dt: f64,
    since_last_shot: f64,
}

impl Autopilot {
    pub fn new(settings: AutopilotConfig, tick_rate: u32) -> Self {
        Self {
            since_last_shot: settings.fire_interval_secs,
            settings,
            cursor: (SCREEN_WIDTH as f64 / 2.0, SCREEN_HEIGHT as f64 / 2.0),
            seeded: false,
            dt: 1.0 / tick_rate.max(1) as f64,
        }
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &FrameSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        if !self.seeded {
            self.seeded = true;
            commands.push(mouse(self.cursor));
            return commands;
        }
        if snapshot.phase == GamePhase::GameOver {
            return commands;
        }
        self.since_last_shot += self.dt;

        let camera = snapshot.camera.position;
        let Some(target) = nearest_snowman(snapshot, camera) else {
            return commands;
        };

        let front = snapshot.camera.front;
        let to_target = target - camera;
        let yaw_error = wrap_degrees(
            to_target.z.atan2(to_target.x).to_degrees() - front.z.atan2(front.x).to_degrees(),
        );
        // Bullets fly level with the camera; keep the pitch at zero.
        let pitch_error = -front.y.clamp(-1.0, 1.0).asin().to_degrees();

        let sensitivity = CAMERA_SENSITIVITY as f64;
        let limit = self.settings.max_turn_px;
        let dx = (yaw_error as f64 / sensitivity).clamp(-limit, limit);
        let dy = (pitch_error as f64 / sensitivity).clamp(-limit, limit);
        if dx != 0.0 || dy != 0.0 {
            // Cursor y grows downward, so looking up means moving it up.
            self.cursor = (self.cursor.0 + dx, self.cursor.1 - dy);
            commands.push(mouse(self.cursor));
        }

        let residual_yaw = yaw_error - (dx * sensitivity) as f32;
        let residual_pitch = pitch_error - (dy * sensitivity) as f32;
        let tolerance = self.settings.fire_tolerance_deg;
        let range = Vec3::new(to_target.x, 0.0, to_target.z).length();
        if residual_yaw.abs() <= tolerance
            && residual_pitch.abs() <= tolerance
            && range < VIEW_HALF_EXTENT
            && self.since_last_shot >= self.settings.fire_interval_secs
        {
            self.since_last_shot = 0.0;
            commands.push(PlayerCommand::Fire);
        }

        commands
    }
}

fn mouse((x, y): (f64, f64)) -> PlayerCommand {
    PlayerCommand::MouseMoved { x, y }
}

/// Closest drawn snowman on the ground plane.
fn nearest_snowman(snapshot: &FrameSnapshot, camera: Vec3) -> Option<Vec3> {
    let flat = |p: Vec3| Vec3::new(p.x - camera.x, 0.0, p.z - camera.z).length_squared();
    snapshot
        .draws
        .iter()
        .filter(|d| d.mesh == MeshId::Snowman)
        .map(|d| d.model.w_axis.truncate())
        .min_by(|a, b| flat(*a).total_cmp(&flat(*b)))
}

/// Wrap an angle into (-180, 180].
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use snowman_core::state::{CameraView, DrawItem};

    fn snapshot_with_snowman(at: Vec3) -> FrameSnapshot {
        FrameSnapshot {
            camera: CameraView {
                position: Vec3::ZERO,
                front: Vec3::NEG_Z,
                ..Default::default()
            },
            draws: vec![DrawItem {
                mesh: MeshId::Snowman,
                model: Mat4::from_translation(at),
            }],
            ..Default::default()
        }
    }

    fn seeded() -> Autopilot {
        let mut pilot = Autopilot::new(AutopilotConfig::default(), 60);
        let first = pilot.poll(&FrameSnapshot::default());
        assert_eq!(first.len(), 1);
        assert!(matches!(first[0], PlayerCommand::MouseMoved { .. }));
        pilot
    }

    #[test]
    fn test_fires_at_target_straight_ahead() {
        let mut pilot = seeded();
        let commands = pilot.poll(&snapshot_with_snowman(Vec3::new(0.0, -2.0, -20.0)));
        assert_eq!(commands, vec![PlayerCommand::Fire]);
    }

    #[test]
    fn test_turns_toward_target_on_the_right() {
        let mut pilot = seeded();
        let (x0, y0) = pilot.cursor();
        let commands = pilot.poll(&snapshot_with_snowman(Vec3::new(20.0, -2.0, 0.0)));

        // 90 degrees needs 900 px; one tick is capped at 300.
        assert_eq!(
            commands,
            vec![PlayerCommand::MouseMoved {
                x: x0 + 300.0,
                y: y0
            }]
        );
    }

    #[test]
    fn test_holds_fire_out_of_range() {
        let mut pilot = seeded();
        let commands = pilot.poll(&snapshot_with_snowman(Vec3::new(0.0, -2.0, -90.0)));
        assert!(commands.is_empty());
    }

    #[test]
    fn test_respects_fire_interval() {
        let mut pilot = seeded();
        let snapshot = snapshot_with_snowman(Vec3::new(0.0, -2.0, -20.0));
        assert_eq!(pilot.poll(&snapshot), vec![PlayerCommand::Fire]);
        assert!(pilot.poll(&snapshot).is_empty());
    }

    #[test]
    fn test_nothing_after_game_over() {
        let mut pilot = seeded();
        let mut snapshot = snapshot_with_snowman(Vec3::new(0.0, -2.0, -20.0));
        snapshot.phase = GamePhase::GameOver;
        assert!(pilot.poll(&snapshot).is_empty());
    }

    #[test]
    fn test_picks_nearest() {
        let mut snapshot = snapshot_with_snowman(Vec3::new(0.0, -2.0, -50.0));
        snapshot.draws.push(DrawItem {
            mesh: MeshId::Snowman,
            model: Mat4::from_translation(Vec3::new(5.0, -2.0, 5.0)),
        });
        assert_eq!(
            nearest_snowman(&snapshot, Vec3::ZERO),
            Some(Vec3::new(5.0, -2.0, 5.0))
        );
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(-270.0), 90.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
    }

    #[test]
    fn test_idle_sends_nothing() {
        assert!(Idle.poll(&FrameSnapshot::default()).is_empty());
    }
}
