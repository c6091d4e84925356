//! Movement domain: locomotion state, intent flags and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LocomotionTuning, RigidBodyHandle};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable and slidable surfaces
    Ground,
    /// Loose props scattered around the arena
    Prop,
    /// The character body
    Player,
}

/// Marker for the physics body the controller drives.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for the visible character mesh. It is a separate entity from the
/// body so its rotation can be smoothed independently.
#[derive(Component, Debug)]
pub struct PlayerMesh;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Input intent written by the input collaborator. Opposing directions may
/// both be held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump_requested: bool,
    pub sprint_held: bool,
    pub walk_held: bool,
}

impl MovementIntent {
    pub fn is_moving(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Drop every movement request. Used when the slope takes control.
    pub fn clear_movement(&mut self) {
        self.forward = false;
        self.back = false;
        self.left = false;
        self.right = false;
        self.jump_requested = false;
        self.sprint_held = false;
    }
}

/// Per-character locomotion state, mutated once per tick.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub position: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub grounded: bool,
    pub sliding: bool,
    /// Grounded on a walkable slope above the steep threshold.
    pub steep: bool,
    pub can_sprint: bool,
    /// Angle between ground normal and world up, 0 without contact.
    pub tilt_degrees: f32,
    pub surface_normal: Vec3,
    pub intent: MovementIntent,
    pub speed: f32,
    pub horizontal_speed: f32,
    pub current_move_speed: f32,
    pub accel_ramp: f32,
    pub last_jump_ms: Option<f64>,
    pub last_move_ms: f64,
    pub jumped_this_tick: bool,
    /// Steering direction carried between ticks. Horizontal, unit length or zero.
    pub input_accumulator: Vec3,
    /// Last non-zero horizontal movement direction, unit length or zero.
    pub desired_direction: Vec3,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::new(&LocomotionTuning::default(), 0.0)
    }
}

impl LocomotionState {
    pub fn new(tuning: &LocomotionTuning, now_ms: f64) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            grounded: false,
            sliding: false,
            steep: false,
            can_sprint: true,
            tilt_degrees: 0.0,
            surface_normal: Vec3::Y,
            intent: MovementIntent::default(),
            speed: 0.0,
            horizontal_speed: 0.0,
            current_move_speed: tuning.move_speed,
            accel_ramp: tuning.ramp_bounds().0,
            last_jump_ms: None,
            last_move_ms: now_ms,
            jumped_this_tick: false,
            input_accumulator: Vec3::ZERO,
            desired_direction: Vec3::ZERO,
        }
    }

    /// Store a velocity and refresh the derived speeds.
    pub fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
        self.speed = velocity.length();
        self.horizontal_speed = Vec2::new(velocity.x, velocity.z).length();
    }

    /// Pull the body's current kinematics into the state at the start of a tick.
    pub fn sync_from_body(&mut self, body: &impl RigidBodyHandle) {
        self.position = body.position();
        self.rotation = body.rotation().normalize();
        self.angular_velocity = body.angular_velocity();
        self.set_linear_velocity(body.linear_velocity());
    }
}
