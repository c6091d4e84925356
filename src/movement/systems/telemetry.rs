//! Movement domain: per-tick telemetry snapshot.

use bevy::prelude::*;

use crate::animation::AnimationState;
use crate::core::FixedTick;
use crate::movement::{LocomotionSnapshot, LocomotionState, Player};

pub(crate) fn publish_snapshot(
    tick: Res<FixedTick>,
    mut snapshot: ResMut<LocomotionSnapshot>,
    query: Query<(&LocomotionState, Option<&AnimationState>), With<Player>>,
) {
    let Ok((state, animation)) = query.single() else {
        return;
    };
    *snapshot = LocomotionSnapshot::capture(
        tick.count(),
        state,
        animation.and_then(|a| a.current_name()),
    );
}
