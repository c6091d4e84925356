//! Movement domain: velocity integration against the physics body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::{FollowCamera, SimClock};
use crate::movement::{LocomotionState, LocomotionTuning, Player, integrate};

pub(crate) fn integrate_velocity(
    clock: Res<SimClock>,
    tuning: Res<LocomotionTuning>,
    cameras: Query<&FollowCamera>,
    mut query: Query<(&mut LinearVelocity, &mut LocomotionState), With<Player>>,
) {
    // Without a camera, move relative to world +Z.
    let yaw = cameras.iter().next().map_or(0.0, |rig| rig.yaw);

    for (mut linear, mut state) in &mut query {
        let velocity = integrate(&mut state, yaw, clock.now_ms(), &tuning);
        linear.0 = velocity;

        if tuning.debug_mode && state.jumped_this_tick {
            info!(
                "[DEBUG] Jump: vertical={:.2}, horizontal={:.2}",
                velocity.y, state.horizontal_speed
            );
        }
    }
}
