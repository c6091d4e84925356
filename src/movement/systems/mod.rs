//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod orientation;
pub(crate) mod telemetry;

pub(crate) use collisions::sense_ground;
pub(crate) use input::read_intent;
pub(crate) use movement::integrate_velocity;
pub(crate) use orientation::{orient_body, sync_mesh_to_body};
pub(crate) use telemetry::publish_snapshot;
