//! Movement domain: tuning and telemetry resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{LocomotionState, MovementIntent};

/// Every locomotion constant in one place. Loaded from `locomotion.ron`,
/// falling back to these defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Target speed when neither walk nor sprint is held.
    pub move_speed: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub max_velocity: f32,
    pub jump_height: f32,
    /// Floor added to every jump so slow jumps still leave the ground.
    pub min_jump_height: f32,
    pub jump_cooldown_ms: f64,
    /// Horizontal speed that must be exceeded before a jump is accepted.
    pub jump_min_speed: f32,
    /// Fraction of horizontal velocity removed per stationary tick (0..=1).
    pub friction: f32,
    /// Per-tick step for both the acceleration ramp and the move speed setpoint.
    pub accel_step: f32,
    /// Ticks-worth of ramp spent below zero before movement kicks in.
    pub start_delay: f32,
    /// Bound on the accumulated input direction.
    pub max_input_magnitude: f32,
    /// Horizontal speed under which friction snaps to a full stop.
    pub stationary_epsilon: f32,
    pub max_walkable_angle: f32,
    /// Slopes above this (but still walkable) disable sprint and jump.
    pub steep_angle: f32,
    /// Per-frame slerp factor from mesh rotation toward body rotation.
    pub rotation_smoothing: f32,
    pub idle_sleep_timeout_ms: f64,
    pub anim_blend_speed: f32,
    pub sleep_blend_speed: f32,
    pub character_scale: f32,
    /// Half the collider height. Derived from the character body at load,
    /// never read from config.
    #[serde(skip)]
    pub body_half_height: f32,
    pub slope_detection_buffer: f32,
    /// Vertical gap between body origin and mesh origin (feet alignment).
    pub mesh_offset: f32,
    /// Speed band boundaries, multiplied by `character_scale`.
    pub walk_band: f32,
    pub trot_band: f32,
    pub gallop_band: f32,
    pub gravity: f32,
    pub tick_rate_hz: f64,
    pub max_backlog_ticks: u32,
    pub mouse_sensitivity: f32,
    pub debug_mode: bool,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            walk_speed: 0.5,
            sprint_speed: 3.0,
            max_velocity: 10.0,
            jump_height: 2.5,
            min_jump_height: 1.0,
            jump_cooldown_ms: 1000.0,
            jump_min_speed: 0.0,
            friction: 0.115,
            accel_step: 0.04,
            start_delay: 0.0,
            max_input_magnitude: 2.0,
            stationary_epsilon: 0.01,
            max_walkable_angle: 35.0,
            steep_angle: 20.0,
            rotation_smoothing: 0.025,
            idle_sleep_timeout_ms: 15_000.0,
            anim_blend_speed: 0.1,
            sleep_blend_speed: 0.025,
            character_scale: 1.0,
            body_half_height: 0.2,
            slope_detection_buffer: 0.05,
            mesh_offset: 0.2,
            walk_band: 0.0,
            trot_band: 0.99,
            gallop_band: 2.25,
            gravity: 9.0,
            tick_rate_hz: 60.0,
            max_backlog_ticks: 4,
            mouse_sensitivity: 0.003,
            debug_mode: false,
        }
    }
}

impl LocomotionTuning {
    /// Length of the ground probe: half the body plus the slope buffer, scaled.
    pub fn ground_probe_length(&self) -> f32 {
        (self.body_half_height + self.slope_detection_buffer) * self.character_scale
    }

    /// Lower and upper bound of the acceleration ramp.
    pub fn ramp_bounds(&self) -> (f32, f32) {
        (-self.start_delay, 1.0)
    }

    /// Setpoint for `current_move_speed`. Walk beats sprint beats default.
    pub fn move_speed_target(&self, intent: &MovementIntent, can_sprint: bool) -> f32 {
        if intent.walk_held {
            self.walk_speed
        } else if intent.sprint_held && can_sprint {
            self.sprint_speed
        } else {
            self.move_speed
        }
    }
}

/// Read-only copy of the locomotion state published once per tick for the HUD.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocomotionSnapshot {
    pub tick: u64,
    pub position: [f32; 3],
    pub speed: f32,
    pub horizontal_speed: f32,
    pub current_move_speed: f32,
    pub grounded: bool,
    pub sliding: bool,
    pub tilt_degrees: f32,
    pub clip: Option<String>,
}

impl LocomotionSnapshot {
    pub fn capture(tick: u64, state: &LocomotionState, clip: Option<&str>) -> Self {
        Self {
            tick,
            position: state.position.to_array(),
            speed: state.speed,
            horizontal_speed: state.horizontal_speed,
            current_move_speed: state.current_move_speed,
            grounded: state.grounded,
            sliding: state.sliding,
            tilt_degrees: state.tilt_degrees,
            clip: clip.map(str::to_owned),
        }
    }
}
