//! Movement domain: ground contact and slope classification.

use bevy::prelude::*;

use crate::movement::{GroundQuery, LocomotionState, LocomotionTuning, RigidBodyHandle};

/// What the ground probe found this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub grounded: bool,
    pub tilt_degrees: f32,
    pub surface_normal: Vec3,
}

impl GroundContact {
    pub fn airborne() -> Self {
        Self {
            grounded: false,
            tilt_degrees: 0.0,
            surface_normal: Vec3::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeClass {
    Flat,
    Walkable,
    /// Walkable, but sprint and jump are off.
    Steep,
    /// Beyond the walkable angle: the character slides.
    Sliding,
}

pub fn classify_slope(tilt_degrees: f32, tuning: &LocomotionTuning) -> SlopeClass {
    if tilt_degrees > tuning.max_walkable_angle {
        SlopeClass::Sliding
    } else if tilt_degrees > tuning.steep_angle {
        SlopeClass::Steep
    } else if tilt_degrees > 0.0 {
        SlopeClass::Walkable
    } else {
        SlopeClass::Flat
    }
}

/// Angle in degrees between `normal` and world up.
pub fn tilt_degrees(normal: Vec3) -> f32 {
    let normal = normal.try_normalize().unwrap_or(Vec3::Y);
    normal.dot(Vec3::Y).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Probe along the body's local down axis so slopes still register while the
/// body is tilted to match them.
pub fn sense(
    body: &impl RigidBodyHandle,
    ground: &impl GroundQuery,
    exclude: &[Entity],
    tuning: &LocomotionTuning,
) -> GroundContact {
    let Ok(down) = Dir3::new(body.rotation() * Vec3::NEG_Y) else {
        return GroundContact::airborne();
    };

    match ground.cast(body.position(), down, tuning.ground_probe_length(), exclude) {
        Some(hit) => {
            let surface_normal = hit.normal.try_normalize().unwrap_or(Vec3::Y);
            GroundContact {
                grounded: true,
                tilt_degrees: tilt_degrees(surface_normal),
                surface_normal,
            }
        }
        None => GroundContact::airborne(),
    }
}

/// Fold a contact into the state. Sliding latches: it is only re-evaluated
/// while grounded, so it survives a hop off the slope.
pub fn apply_contact(state: &mut LocomotionState, contact: &GroundContact, tuning: &LocomotionTuning) {
    state.grounded = contact.grounded;
    state.tilt_degrees = contact.tilt_degrees;
    state.surface_normal = contact.surface_normal;

    let class = classify_slope(contact.tilt_degrees, tuning);
    if contact.grounded {
        state.sliding = class == SlopeClass::Sliding;
    }
    state.steep = contact.grounded && class == SlopeClass::Steep;
    state.can_sprint = !state.sliding && !state.steep;

    if state.sliding {
        state.intent.clear_movement();
    }
}
