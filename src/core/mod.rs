//! Core domain: clock, tick gating, system ordering and the camera.

mod camera;
mod clock;


pub use camera::FollowCamera;
pub use clock::{FixedTick, SimClock, tick_ready};

use bevy::prelude::*;

use crate::core::camera::{follow_mesh, orbit_camera, spawn_camera};
use crate::core::clock::advance_clock;

/// Per-frame ordering of the locomotion pipeline. `Sense`, `Integrate` and
/// `Animate` only run on frames that carry a logical tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Clock,
    Input,
    Sense,
    Integrate,
    Animate,
    Orient,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>()
            .init_resource::<FixedTick>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Clock,
                    LocomotionSet::Input,
                    LocomotionSet::Sense.run_if(tick_ready),
                    LocomotionSet::Integrate.run_if(tick_ready),
                    LocomotionSet::Animate.run_if(tick_ready),
                    LocomotionSet::Orient,
                    LocomotionSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, advance_clock.in_set(LocomotionSet::Clock))
            .add_systems(Update, orbit_camera.in_set(LocomotionSet::Input))
            .add_systems(Update, follow_mesh.in_set(LocomotionSet::Present));
    }
}
