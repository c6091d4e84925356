//! Core domain: third-person orbit camera.

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{LocomotionTuning, PlayerMesh, wrap_angle};

/// Orbit camera around the character mesh. `yaw` is what the velocity
/// integrator reads as "camera forward".
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    /// Height of the look-at point above the mesh origin.
    pub focus_height: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.35,
            distance: 3.0,
            focus_height: 0.165,
        }
    }
}

impl FollowCamera {
    const MIN_PITCH: f32 = -0.2;
    const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;

    /// Turn by a mouse delta. Yaw wraps, pitch clamps.
    pub fn orbit(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw = wrap_angle(self.yaw - delta.x * sensitivity);
        self.pitch = (self.pitch + delta.y * sensitivity).clamp(Self::MIN_PITCH, Self::MAX_PITCH);
    }

    /// Camera translation for a given focus point.
    pub fn eye(&self, focus: Vec3) -> Vec3 {
        let forward = Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos());
        focus - forward * (self.distance * self.pitch.cos()) + Vec3::Y * (self.distance * self.pitch.sin())
    }
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    let rig = FollowCamera::default();
    let focus = Vec3::Y * rig.focus_height;
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(rig.eye(focus)).looking_at(focus, Vec3::Y),
        rig,
    ));
}

pub(crate) fn orbit_camera(
    motion: Res<AccumulatedMouseMotion>,
    tuning: Res<LocomotionTuning>,
    mut cameras: Query<&mut FollowCamera>,
) {
    if motion.delta == Vec2::ZERO {
        return;
    }
    for mut rig in &mut cameras {
        rig.orbit(motion.delta, tuning.mouse_sensitivity);
    }
}

pub(crate) fn follow_mesh(
    mesh: Query<&Transform, (With<PlayerMesh>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(mesh) = mesh.single() else {
        return;
    };
    for (rig, mut transform) in &mut cameras {
        let focus = mesh.translation + Vec3::Y * rig.focus_height;
        *transform = Transform::from_translation(rig.eye(focus)).looking_at(focus, Vec3::Y);
    }
}
