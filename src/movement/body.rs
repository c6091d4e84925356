//! Movement domain: the rigid-body and ground-query seams.
//!
//! The controller only talks to physics through these two traits, so the
//! locomotion math can run against Avian in game and against fakes in tests.

use avian3d::prelude::*;
use bevy::prelude::*;

pub trait RigidBodyHandle {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);
    fn angular_velocity(&self) -> Vec3;
    fn set_angular_velocity(&mut self, velocity: Vec3);
    fn mass(&self) -> f32;
}

/// A ray hit against walkable geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub distance: f32,
    pub normal: Vec3,
}

pub trait GroundQuery {
    /// Cast a ray, ignoring `exclude`. Returns the closest hit within `max_distance`.
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        exclude: &[Entity],
    ) -> Option<GroundHit>;
}

impl GroundQuery for SpatialQuery<'_, '_> {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        exclude: &[Entity],
    ) -> Option<GroundHit> {
        let filter = SpatialQueryFilter::from_excluded_entities(exclude.iter().copied());
        self.cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| GroundHit {
                distance: hit.distance,
                normal: hit.normal,
            })
    }
}

/// Borrowed view over an Avian dynamic body.
pub struct AvianBody<'a> {
    pub transform: &'a mut Transform,
    pub linear: &'a mut LinearVelocity,
    pub angular: &'a mut AngularVelocity,
    pub mass: f32,
}

impl RigidBodyHandle for AvianBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position;
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear.0 = velocity;
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular.0
    }

    fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.angular.0 = velocity;
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}

/// Plain-value copy of a body. Sensing reads from one of these so it does not
/// flag the live components as changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    pub position: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f32,
}

impl Default for BodySample {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
        }
    }
}

impl BodySample {
    /// Copy the live Avian components without borrowing them mutably.
    pub fn capture(
        transform: &Transform,
        linear: &LinearVelocity,
        angular: &AngularVelocity,
        mass: Option<&ComputedMass>,
    ) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
            linear_velocity: linear.0,
            angular_velocity: angular.0,
            mass: mass.map_or(0.0, |m| m.value()),
        }
    }
}

impl RigidBodyHandle for BodySample {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.angular_velocity = velocity;
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}

/// Move a body and cancel all of its motion.
pub fn teleport(body: &mut impl RigidBodyHandle, position: Vec3) {
    body.set_position(position);
    body.set_linear_velocity(Vec3::ZERO);
    body.set_angular_velocity(Vec3::ZERO);
}
