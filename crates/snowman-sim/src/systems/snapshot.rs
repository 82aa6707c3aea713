//! Snapshot builder: reads the world and produces a `FrameSnapshot`
//! with a draw list for the renderer.

use glam::{Mat4, Vec3};
use hecs::World;

use snowman_core::camera::Camera;
use snowman_core::components::{Dead, Transform};
use snowman_core::constants::*;
use snowman_core::enums::{GamePhase, MeshId};
use snowman_core::events::GameEvent;
use snowman_core::state::{CameraView, DrawItem, FrameSnapshot, ScoreView};
use snowman_core::types::SimTime;

use crate::ring::RingSlots;
use crate::score::ScoreState;

/// Everything the snapshot needs besides the world.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: &'a Camera,
    pub aspect: f32,
    pub bullets: &'a RingSlots,
    pub snowmen: &'a RingSlots,
    pub score: &'a ScoreState,
    pub events: Vec<GameEvent>,
}

/// Build the complete frame snapshot from the current world state.
pub fn build_snapshot(world: &World, input: SnapshotInput<'_>) -> FrameSnapshot {
    let view = input.camera.view_matrix();
    let camera = CameraView {
        position: input.camera.position,
        front: input.camera.front(),
        view,
        projection: input.camera.projection_matrix(input.aspect),
        zoom: input.camera.zoom,
    };

    let mut draws = Vec::new();

    let bullet_transforms: Vec<Transform> = input
        .bullets
        .iter()
        .filter_map(|e| world.get::<&Transform>(e).ok().map(|t| *t))
        .collect();
    let snowman_transforms: Vec<Transform> = input
        .snowmen
        .iter()
        .filter(|&e| world.get::<&Dead>(e).is_err())
        .filter_map(|e| world.get::<&Transform>(e).ok().map(|t| *t))
        .collect();
    let bullets_live = bullet_transforms.len() as u32;
    let snowmen_alive = snowman_transforms.len() as u32;

    match input.phase {
        GamePhase::Playing => {
            draws.push(draw(MeshId::SkyBox, skybox_matrix(input.camera.position)));
            draws.push(draw(MeshId::Ground, ground_matrix()));
            draws.push(draw(MeshId::Gun, gun_matrix(view)));
            draws.extend(
                bullet_transforms
                    .iter()
                    .map(|t| draw(MeshId::Bullet, bullet_matrix(t))),
            );
            draws.extend(
                snowman_transforms
                    .iter()
                    .map(|t| draw(MeshId::Snowman, snowman_matrix(t))),
            );
        }
        GamePhase::GameOver => {
            draws.push(draw(MeshId::GameOver, game_over_matrix(view)));
        }
    }

    FrameSnapshot {
        time: input.time,
        phase: input.phase,
        camera,
        draws,
        score: ScoreView {
            snowmen_killed: input.score.snowmen_killed,
            snowmen_spawned: input.score.snowmen_spawned,
            bullets_fired: input.score.bullets_fired,
            snowmen_alive,
            bullets_live,
        },
        events: input.events,
    }
}

fn draw(mesh: MeshId, model: Mat4) -> DrawItem {
    DrawItem { mesh, model }
}

/// Skybox follows the camera so it never gets closer.
pub fn skybox_matrix(camera_pos: Vec3) -> Mat4 {
    Mat4::from_translation(camera_pos) * Mat4::from_scale(Vec3::splat(SKYBOX_SCALE))
}

pub fn ground_matrix() -> Mat4 {
    Mat4::from_translation(GROUND_OFFSET) * Mat4::from_scale(Vec3::splat(GROUND_SCALE))
}

/// Gun is placed in view space, so it sticks to the screen.
pub fn gun_matrix(view: Mat4) -> Mat4 {
    view.inverse()
        * Mat4::from_translation(GUN_OFFSET)
        * Mat4::from_rotation_y(90f32.to_radians())
        * Mat4::from_scale(Vec3::splat(GUN_SCALE))
}

pub fn bullet_matrix(transform: &Transform) -> Mat4 {
    Mat4::from_translation(transform.position + BULLET_DRAW_OFFSET)
        * Mat4::from_scale(Vec3::splat(BULLET_SCALE))
        * Mat4::from_rotation_y(transform.yaw + BULLET_MESH_YAW_OFFSET)
}

pub fn snowman_matrix(transform: &Transform) -> Mat4 {
    Mat4::from_translation(transform.position) * Mat4::from_rotation_y(transform.yaw)
}

/// Game-over plane, one unit in front of the camera, facing it.
pub fn game_over_matrix(view: Mat4) -> Mat4 {
    view.inverse()
        * Mat4::from_translation(GAME_OVER_OFFSET)
        * Mat4::from_rotation_x(90f32.to_radians())
        * Mat4::from_scale(Vec3::splat(GAME_OVER_SCALE))
}
