//! Movement domain: body orientation and mesh smoothing.

use bevy::prelude::*;

use crate::movement::{LocomotionState, RigidBodyHandle, quantize_angle};

/// Yaw-only rotation facing the quantized `direction`. A zero direction faces +Z.
pub fn heading_rotation(direction: Vec3) -> Quat {
    if Vec2::new(direction.x, direction.z).length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(quantize_angle(direction.x.atan2(direction.z)))
}

/// Rotation taking world up onto `normal`, or identity while sliding.
pub fn surface_alignment(normal: Vec3, sliding: bool) -> Quat {
    if sliding {
        return Quat::IDENTITY;
    }
    match normal.try_normalize() {
        Some(normal) => Quat::from_rotation_arc(Vec3::Y, normal),
        None => Quat::IDENTITY,
    }
}

/// Where the body should point this frame.
pub fn target_rotation(state: &LocomotionState) -> Quat {
    let heading = heading_rotation(state.desired_direction);
    let alignment = surface_alignment(state.surface_normal, state.sliding);
    (alignment * heading).normalize()
}

/// Snap the body to its target rotation and strip pitch/roll spin.
pub fn orient(body: &mut impl RigidBodyHandle, state: &mut LocomotionState) {
    let rotation = target_rotation(state);
    body.set_rotation(rotation);
    state.rotation = rotation;

    let spin = body.angular_velocity();
    let yaw_only = Vec3::new(0.0, spin.y, 0.0);
    body.set_angular_velocity(yaw_only);
    state.angular_velocity = yaw_only;
}

/// One frame of mesh smoothing toward the body rotation.
pub fn smooth_mesh_rotation(mesh: Quat, body: Quat, rate: f32) -> Quat {
    mesh.normalize().slerp(body.normalize(), rate.clamp(0.0, 1.0))
}

/// The collider is shorter than the mesh, so the mesh sits below the body origin.
pub fn mesh_translation(body_position: Vec3, mesh_offset: f32, scale: f32) -> Vec3 {
    body_position - Vec3::Y * (mesh_offset * scale)
}
