//! Movement domain: per-tick velocity integration.
//!
//! One call advances the character by exactly one logical tick. The body's
//! vertical velocity belongs to the physics engine (gravity) except on the
//! tick a jump is accepted.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use bevy::prelude::*;

use crate::movement::{LocomotionState, LocomotionTuning};

/// Wrap an angle into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Horizontal forward and right vectors for a camera yaw. Pitch is ignored.
pub fn camera_basis(yaw: f32) -> (Vec3, Vec3) {
    let yaw = wrap_angle(yaw);
    let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
    let right = Vec3::new((yaw - FRAC_PI_2).sin(), 0.0, (yaw - FRAC_PI_2).cos());
    (forward, right)
}

/// Snap to the nearest multiple of 45 degrees. Halfway rounds away from zero.
pub fn quantize_angle(angle: f32) -> f32 {
    (angle / FRAC_PI_4).round() * FRAC_PI_4
}

/// Rebuild the horizontal part of `velocity` along the nearest of the eight
/// compass headings, keeping its magnitude and the vertical component.
pub fn quantize_heading(velocity: Vec3) -> Vec3 {
    let magnitude = Vec2::new(velocity.x, velocity.z).length();
    if magnitude <= f32::EPSILON {
        return velocity;
    }
    let angle = quantize_angle(velocity.x.atan2(velocity.z));
    Vec3::new(angle.sin() * magnitude, velocity.y, angle.cos() * magnitude)
}

/// Step `current` toward `target` without passing it.
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

/// Exponential decay on the horizontal plane; vertical is left alone.
pub fn apply_friction(velocity: Vec3, friction: f32, epsilon: f32) -> Vec3 {
    let keep = (1.0 - friction).clamp(0.0, 1.0);
    let horizontal = Vec2::new(velocity.x, velocity.z) * keep;
    if horizontal.length() < epsilon {
        Vec3::new(0.0, velocity.y, 0.0)
    } else {
        Vec3::new(horizontal.x, velocity.y, horizontal.y)
    }
}

pub fn jump_allowed(state: &LocomotionState, now_ms: f64, tuning: &LocomotionTuning) -> bool {
    let cooled_down = state
        .last_jump_ms
        .is_none_or(|last| now_ms - last >= tuning.jump_cooldown_ms);

    state.grounded
        && !state.sliding
        && !state.steep
        && state.horizontal_speed > tuning.jump_min_speed
        && cooled_down
}

/// Compute this tick's velocity command and fold it back into `state`.
pub fn integrate(
    state: &mut LocomotionState,
    camera_yaw: f32,
    now_ms: f64,
    tuning: &LocomotionTuning,
) -> Vec3 {
    let (forward, right) = camera_basis(camera_yaw);
    let (ramp_floor, ramp_ceiling) = tuning.ramp_bounds();
    let current = state.linear_velocity;
    let intent = state.intent;
    state.jumped_this_tick = false;

    let mut raw = Vec3::ZERO;
    if intent.is_moving() {
        raw = state.input_accumulator;
        for (held, basis) in [
            (intent.forward, forward),
            (intent.back, -forward),
            (intent.right, right),
            (intent.left, -right),
        ] {
            if held {
                raw = (raw + basis).clamp_length_max(tuning.max_input_magnitude);
            }
        }
    }
    let direction = Vec3::new(raw.x, 0.0, raw.z).normalize_or_zero();
    let planar = direction * state.current_move_speed;
    let moving = planar != Vec3::ZERO;
    if intent.is_moving() {
        // Unit length, or zero once opposing keys cancel.
        state.input_accumulator = direction;
        state.last_move_ms = now_ms;
    }

    // Requests that fail a guard are dropped, never queued.
    if intent.jump_requested {
        if jump_allowed(state, now_ms, tuning) {
            raw += Vec3::Y * tuning.jump_height;
            state.last_jump_ms = Some(now_ms);
            state.jumped_this_tick = true;
        }
        state.intent.jump_requested = false;
    }
    let jump_force = tuning.jump_height + tuning.min_jump_height + state.horizontal_speed;
    let jump_y = (raw.normalize_or_zero().y * jump_force).min(tuning.max_velocity);

    let mut velocity = current;
    if moving {
        state.desired_direction = direction;

        let y = if state.jumped_this_tick { jump_y } else { current.y };
        let ramp = state.accel_ramp;
        let ramped = if ramp > 0.0 {
            Vec3::new(planar.x * ramp, y, planar.z * ramp)
        } else {
            Vec3::new(current.x, y, current.z)
        };
        velocity = quantize_heading(ramped);
        state.accel_ramp = (ramp + tuning.accel_step).min(ramp_ceiling);
    } else {
        if state.jumped_this_tick {
            velocity.y = jump_y;
        }
        if state.grounded && !state.sliding && !intent.is_moving() {
            velocity = apply_friction(velocity, tuning.friction, tuning.stationary_epsilon);
        }
        state.accel_ramp = ramp_floor;
    }
    state.accel_ramp = state.accel_ramp.clamp(ramp_floor, ramp_ceiling);

    let target = tuning.move_speed_target(&intent, state.can_sprint);
    state.current_move_speed = approach(state.current_move_speed, target, tuning.accel_step)
        .clamp(0.0, tuning.sprint_speed.max(0.0));

    velocity = velocity.clamp_length_max(tuning.max_velocity);
    if !velocity.is_finite() {
        velocity = current;
    }
    state.set_linear_velocity(velocity);
    velocity
}
