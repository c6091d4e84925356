//! Movement domain: body orientation and mesh follow.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BodySample, LocomotionState, LocomotionTuning, Player, PlayerMesh, mesh_translation, orient,
    smooth_mesh_rotation,
};

pub(crate) fn orient_body(
    mut query: Query<
        (
            &mut Transform,
            &LinearVelocity,
            &mut AngularVelocity,
            Option<&ComputedMass>,
            &mut LocomotionState,
        ),
        With<Player>,
    >,
) {
    for (mut transform, linear, mut angular, mass, mut state) in &mut query {
        let mut sample = BodySample::capture(&transform, linear, &angular, mass);
        orient(&mut sample, &mut state);
        if transform.rotation != sample.rotation {
            transform.rotation = sample.rotation;
        }
        angular.set_if_neq(AngularVelocity(sample.angular_velocity));
    }
}

/// Runs every frame so the mesh keeps easing toward the body between ticks.
pub(crate) fn sync_mesh_to_body(
    tuning: Res<LocomotionTuning>,
    body: Query<&Transform, (With<Player>, Without<PlayerMesh>)>,
    mut meshes: Query<&mut Transform, (With<PlayerMesh>, Without<Player>)>,
) {
    let Ok(body) = body.single() else {
        return;
    };
    for mut transform in &mut meshes {
        transform.rotation =
            smooth_mesh_rotation(transform.rotation, body.rotation, tuning.rotation_smoothing);
        transform.translation =
            mesh_translation(body.translation, tuning.mesh_offset, tuning.character_scale);
    }
}
