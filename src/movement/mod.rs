//! Movement domain: ground sensing, velocity integration and orientation.

mod body;
mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod integrator;
mod orientation;
mod resources;
mod sensor;
mod systems;

#[cfg(test)]
mod tests;

pub use body::{AvianBody, BodySample, GroundHit, GroundQuery, RigidBodyHandle, teleport};
pub use components::{Ground, GameLayer, LocomotionState, MovementIntent, Player, PlayerMesh};
pub use integrator::{
    apply_friction, approach, camera_basis, integrate, jump_allowed, quantize_angle,
    quantize_heading, wrap_angle,
};
pub use orientation::{
    heading_rotation, mesh_translation, orient, smooth_mesh_rotation, surface_alignment,
    target_rotation,
};
pub use resources::{LocomotionSnapshot, LocomotionTuning};
pub use sensor::{GroundContact, SlopeClass, apply_contact, classify_slope, sense, tilt_degrees};

use bevy::prelude::*;

use crate::core::{LocomotionSet, tick_ready};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    integrate_velocity, orient_body, publish_snapshot, read_intent, sense_ground,
    sync_mesh_to_body,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionSnapshot>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_intent.in_set(LocomotionSet::Input))
            .add_systems(Update, sense_ground.in_set(LocomotionSet::Sense))
            .add_systems(Update, integrate_velocity.in_set(LocomotionSet::Integrate))
            .add_systems(
                Update,
                (orient_body, sync_mesh_to_body)
                    .chain()
                    .in_set(LocomotionSet::Orient),
            )
            .add_systems(
                Update,
                publish_snapshot
                    .in_set(LocomotionSet::Present)
                    .run_if(tick_ready),
            );

        #[cfg(feature = "dev-tools")]
        app.init_resource::<dev::ArenaSeed>()
            .add_systems(Startup, dev::spawn_test_arena)
            .add_systems(Update, dev::handle_dev_hotkeys.in_set(LocomotionSet::Input));
    }
}
