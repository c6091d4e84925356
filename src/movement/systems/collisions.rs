//! Movement domain: ground sensing against the physics world.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BodySample, LocomotionState, LocomotionTuning, Player, apply_contact, sense,
};

pub(crate) fn sense_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &LinearVelocity,
            &AngularVelocity,
            Option<&ComputedMass>,
            &mut LocomotionState,
        ),
        With<Player>,
    >,
) {
    for (entity, transform, linear, angular, mass, mut state) in &mut query {
        let sample = BodySample::capture(transform, linear, angular, mass);
        let was_grounded = state.grounded;
        let was_sliding = state.sliding;

        state.sync_from_body(&sample);
        let contact = sense(&sample, &spatial_query, &[entity], &tuning);
        apply_contact(&mut state, &contact, &tuning);

        if !tuning.debug_mode {
            continue;
        }
        if state.grounded && !was_grounded {
            info!(
                "[DEBUG] Landed: tilt={:.1}, speed={:.2}",
                state.tilt_degrees, state.speed
            );
        } else if !state.grounded && was_grounded {
            info!("[DEBUG] Left ground: vertical={:.2}", state.linear_velocity.y);
        }
        if state.sliding != was_sliding {
            info!(
                "[DEBUG] Sliding {}: tilt={:.1}",
                if state.sliding { "started" } else { "ended" },
                state.tilt_degrees
            );
        }
    }
}
