//! Movement domain: tests for sensing, integration and orientation.

use std::cell::RefCell;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_8, PI};

use bevy::prelude::*;

use super::*;

/// Ground that answers every cast with the same hit, or none.
struct FakeGround {
    hit: Option<GroundHit>,
    casts: RefCell<Vec<(Vec3, Vec3, f32)>>,
}

impl FakeGround {
    fn flat() -> Self {
        Self::with_normal(Vec3::Y)
    }

    fn with_normal(normal: Vec3) -> Self {
        Self {
            hit: Some(GroundHit {
                distance: 0.2,
                normal,
            }),
            casts: RefCell::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            hit: None,
            casts: RefCell::new(Vec::new()),
        }
    }
}

impl GroundQuery for FakeGround {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        _exclude: &[Entity],
    ) -> Option<GroundHit> {
        self.casts
            .borrow_mut()
            .push((origin, direction.as_vec3(), max_distance));
        self.hit.filter(|hit| hit.distance <= max_distance)
    }
}

fn tilted_normal(degrees: f32) -> Vec3 {
    Quat::from_rotation_x(degrees.to_radians()) * Vec3::Y
}

fn grounded_state(tuning: &LocomotionTuning) -> LocomotionState {
    let mut state = LocomotionState::new(tuning, 0.0);
    apply_contact(
        &mut state,
        &GroundContact {
            grounded: true,
            tilt_degrees: 0.0,
            surface_normal: Vec3::Y,
        },
        tuning,
    );
    state
}

fn forward_intent() -> MovementIntent {
    MovementIntent {
        forward: true,
        ..default()
    }
}

/// Run `ticks` integrations at 60Hz, feeding each velocity back in the way
/// the physics body would.
fn run_ticks(state: &mut LocomotionState, tuning: &LocomotionTuning, ticks: usize) -> Vec3 {
    let mut velocity = state.linear_velocity;
    for i in 0..ticks {
        velocity = integrate(state, 0.0, i as f64 * 16.0, tuning);
    }
    velocity
}

// -----------------------------------------------------------------------------
// Sensor tests
// -----------------------------------------------------------------------------

#[test]
fn test_sense_flat_ground() {
    let tuning = LocomotionTuning::default();
    let body = BodySample {
        position: Vec3::new(1.0, 0.2, 3.0),
        ..default()
    };
    let ground = FakeGround::flat();

    let contact = sense(&body, &ground, &[], &tuning);

    assert!(contact.grounded);
    assert!(contact.tilt_degrees.abs() < 1e-3);
    let casts = ground.casts.borrow();
    assert_eq!(casts.len(), 1);
    assert_eq!(casts[0].0, body.position);
    assert!((casts[0].1 - Vec3::NEG_Y).length() < 1e-6);
    assert!((casts[0].2 - tuning.ground_probe_length()).abs() < 1e-6);
}

#[test]
fn test_sense_probes_along_body_down_axis() {
    let tuning = LocomotionTuning::default();
    let rotation = Quat::from_rotation_x(0.3);
    let body = BodySample {
        rotation,
        ..default()
    };
    let ground = FakeGround::flat();

    sense(&body, &ground, &[], &tuning);

    let direction = ground.casts.borrow()[0].1;
    assert!((direction - rotation * Vec3::NEG_Y).length() < 1e-5);
}

#[test]
fn test_sense_airborne_when_probe_misses() {
    let tuning = LocomotionTuning::default();
    let contact = sense(&BodySample::default(), &FakeGround::empty(), &[], &tuning);
    assert!(!contact.grounded);
    assert_eq!(contact.surface_normal, Vec3::Y);
}

#[test]
fn test_probe_length_scales_with_character() {
    let tuning = LocomotionTuning {
        character_scale: 2.0,
        ..default()
    };
    let expected = (tuning.body_half_height + tuning.slope_detection_buffer) * 2.0;
    assert!((tuning.ground_probe_length() - expected).abs() < 1e-6);
}

#[test]
fn test_tilt_degrees_from_normal() {
    assert!(tilt_degrees(Vec3::Y).abs() < 1e-3);
    assert!((tilt_degrees(tilted_normal(30.0)) - 30.0).abs() < 1e-3);
    assert!((tilt_degrees(Vec3::X) - 90.0).abs() < 1e-3);
}

#[test]
fn test_classify_slope_bands() {
    let tuning = LocomotionTuning {
        max_walkable_angle: 40.0,
        steep_angle: 20.0,
        ..default()
    };
    assert_eq!(classify_slope(0.0, &tuning), SlopeClass::Flat);
    assert_eq!(classify_slope(10.0, &tuning), SlopeClass::Walkable);
    assert_eq!(classify_slope(20.0, &tuning), SlopeClass::Walkable);
    assert_eq!(classify_slope(30.0, &tuning), SlopeClass::Steep);
    assert_eq!(classify_slope(40.0, &tuning), SlopeClass::Steep);
    assert_eq!(classify_slope(41.0, &tuning), SlopeClass::Sliding);
}

#[test]
fn test_steep_slope_disables_sprint() {
    let tuning = LocomotionTuning {
        max_walkable_angle: 40.0,
        steep_angle: 20.0,
        ..default()
    };
    let mut state = LocomotionState::new(&tuning, 0.0);
    let body = BodySample::default();
    let contact = sense(&body, &FakeGround::with_normal(tilted_normal(30.0)), &[], &tuning);

    apply_contact(&mut state, &contact, &tuning);

    assert!(state.grounded);
    assert!(state.steep);
    assert!(!state.sliding);
    assert!(!state.can_sprint);
}

#[test]
fn test_sliding_clears_intent_and_targets_world_up() {
    let tuning = LocomotionTuning {
        max_walkable_angle: 40.0,
        ..default()
    };
    let mut state = LocomotionState::new(&tuning, 0.0);
    state.intent = MovementIntent {
        forward: true,
        left: true,
        jump_requested: true,
        sprint_held: true,
        ..default()
    };
    let contact = sense(
        &BodySample::default(),
        &FakeGround::with_normal(tilted_normal(50.0)),
        &[],
        &tuning,
    );

    apply_contact(&mut state, &contact, &tuning);

    assert!(state.sliding);
    assert!(!state.intent.is_moving());
    assert!(!state.intent.jump_requested);
    assert!(!state.intent.sprint_held);
    assert!(!state.can_sprint);

    let up = target_rotation(&state) * Vec3::Y;
    assert!((up - Vec3::Y).length() < 1e-5);
}

#[test]
fn test_sliding_latches_while_airborne() {
    let tuning = LocomotionTuning::default();
    let mut state = LocomotionState::new(&tuning, 0.0);
    let slope = GroundContact {
        grounded: true,
        tilt_degrees: 60.0,
        surface_normal: tilted_normal(60.0),
    };
    apply_contact(&mut state, &slope, &tuning);
    assert!(state.sliding);

    apply_contact(&mut state, &GroundContact::airborne(), &tuning);
    assert!(!state.grounded);
    assert!(state.sliding);

    let flat = GroundContact {
        grounded: true,
        tilt_degrees: 0.0,
        surface_normal: Vec3::Y,
    };
    apply_contact(&mut state, &flat, &tuning);
    assert!(!state.sliding);
    assert!(state.can_sprint);
}

// -----------------------------------------------------------------------------
// Integrator tests
// -----------------------------------------------------------------------------

#[test]
fn test_camera_basis_at_zero_yaw() {
    let (forward, right) = camera_basis(0.0);
    assert!((forward - Vec3::Z).length() < 1e-6);
    assert!((right - Vec3::NEG_X).length() < 1e-6);
}

#[test]
fn test_quantize_angle_snaps_to_eighths() {
    for i in -20..=20 {
        let angle = i as f32 * 0.137;
        let snapped = quantize_angle(angle);
        let steps = snapped / FRAC_PI_4;
        assert!((steps - steps.round()).abs() < 1e-4);
        assert!((snapped - angle).abs() <= FRAC_PI_4 / 2.0 + 1e-5);
    }
}

#[test]
fn test_quantize_angle_tie_rounds_away_from_zero() {
    assert!((quantize_angle(FRAC_PI_8) - FRAC_PI_4).abs() < 1e-6);
    assert!((quantize_angle(-FRAC_PI_8) + FRAC_PI_4).abs() < 1e-6);
}

#[test]
fn test_quantize_heading_keeps_magnitude_and_vertical() {
    let velocity = Vec3::new(0.3, -1.5, 1.0);
    let snapped = quantize_heading(velocity);
    let before = Vec2::new(velocity.x, velocity.z).length();
    let after = Vec2::new(snapped.x, snapped.z).length();
    assert!((before - after).abs() < 1e-5);
    assert_eq!(snapped.y, -1.5);
    assert!(snapped.x.abs() < 1e-5);
}

#[test]
fn test_forward_at_zero_yaw_heads_straight() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.current_move_speed = tuning.walk_speed;
    state.intent = MovementIntent {
        walk_held: true,
        ..forward_intent()
    };

    let velocity = run_ticks(&mut state, &tuning, 5);

    assert!(velocity.z > 0.0);
    assert!(velocity.x.abs() < 1e-5);
    assert!(velocity.x.atan2(velocity.z).abs() < 1e-5);
    assert!((state.desired_direction - Vec3::Z).length() < 1e-5);
}

#[test]
fn test_diagonal_input_is_quantized() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.intent = MovementIntent {
        forward: true,
        left: true,
        ..default()
    };

    let velocity = run_ticks(&mut state, &tuning, 10);

    let angle = velocity.x.atan2(velocity.z);
    let steps = angle / FRAC_PI_4;
    assert!((steps - steps.round()).abs() < 1e-4);
    // Left of +Z at zero yaw is +X.
    assert!((angle - FRAC_PI_4).abs() < 1e-4);
}

/// Hold `intent` for `ticks` ticks starting at tick `start`.
fn hold(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    intent: MovementIntent,
    start: usize,
    ticks: usize,
) -> Vec3 {
    let mut velocity = state.linear_velocity;
    for i in start..start + ticks {
        state.intent = intent;
        velocity = integrate(state, 0.0, i as f64 * 16.0, tuning);
    }
    velocity
}

#[test]
fn test_reversing_from_forward_moves_backward() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    let back = MovementIntent {
        back: true,
        ..default()
    };

    let velocity = hold(&mut state, &tuning, forward_intent(), 0, 60);
    assert!(velocity.z > 0.0);

    let velocity = hold(&mut state, &tuning, back, 60, 30);
    assert!(velocity.z < 0.0);
    assert!((state.desired_direction + Vec3::Z).length() < 1e-5);
    assert!((state.input_accumulator + Vec3::Z).length() < 1e-5);
}

#[test]
fn test_reversing_at_sprint_speed_moves_backward() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    let sprint_forward = MovementIntent {
        sprint_held: true,
        ..forward_intent()
    };
    let sprint_back = MovementIntent {
        back: true,
        sprint_held: true,
        ..default()
    };

    let velocity = hold(&mut state, &tuning, sprint_forward, 0, 120);
    assert!(velocity.z > tuning.move_speed);

    let velocity = hold(&mut state, &tuning, sprint_back, 120, 60);
    assert!(velocity.z < -tuning.move_speed);
}

#[test]
fn test_steering_accumulator_stays_unit_length() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    let sprint_forward = MovementIntent {
        sprint_held: true,
        ..forward_intent()
    };

    hold(&mut state, &tuning, sprint_forward, 0, 120);

    assert!((state.input_accumulator.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_cancelling_keys_hold_velocity_without_friction() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.set_linear_velocity(Vec3::new(0.0, 0.0, 1.0));
    state.intent = MovementIntent {
        forward: true,
        back: true,
        ..default()
    };

    let velocity = integrate(&mut state, 0.0, 500.0, &tuning);

    assert_eq!(velocity, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_held_keys_refresh_last_move_even_when_cancelled() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.intent = MovementIntent {
        forward: true,
        back: true,
        ..default()
    };

    integrate(&mut state, 0.0, 20_000.0, &tuning);

    assert_eq!(state.last_move_ms, 20_000.0);
}

#[test]
fn test_first_moving_tick_holds_velocity() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.intent = forward_intent();

    let velocity = integrate(&mut state, 0.0, 0.0, &tuning);

    assert_eq!(velocity, Vec3::ZERO);
    assert!(state.accel_ramp > 0.0);
}

#[test]
fn test_start_delay_postpones_acceleration() {
    let tuning = LocomotionTuning {
        start_delay: 0.1,
        ..default()
    };
    let mut state = grounded_state(&tuning);
    assert!((state.accel_ramp + 0.1).abs() < 1e-6);
    state.intent = forward_intent();

    // -0.1, -0.06, -0.02 hold; 0.02 moves.
    for i in 0..3 {
        let velocity = integrate(&mut state, 0.0, i as f64 * 16.0, &tuning);
        assert_eq!(velocity, Vec3::ZERO);
    }
    let velocity = integrate(&mut state, 0.0, 48.0, &tuning);
    assert!(velocity.length() > 0.0);
}

#[test]
fn test_ramp_stays_in_bounds_and_resets() {
    let tuning = LocomotionTuning {
        start_delay: 0.2,
        ..default()
    };
    let (floor, ceiling) = tuning.ramp_bounds();
    let mut state = grounded_state(&tuning);
    state.intent = forward_intent();

    for i in 0..100 {
        integrate(&mut state, 0.0, i as f64 * 16.0, &tuning);
        state.intent = forward_intent();
        assert!(state.accel_ramp >= floor && state.accel_ramp <= ceiling);
    }
    assert_eq!(state.accel_ramp, ceiling);

    state.intent = MovementIntent::default();
    integrate(&mut state, 0.0, 2000.0, &tuning);
    assert_eq!(state.accel_ramp, floor);
}

#[test]
fn test_move_speed_priority_and_bounds() {
    let tuning = LocomotionTuning::default();
    let both = MovementIntent {
        walk_held: true,
        sprint_held: true,
        ..default()
    };
    assert_eq!(tuning.move_speed_target(&both, true), tuning.walk_speed);

    let sprint = MovementIntent {
        sprint_held: true,
        ..default()
    };
    assert_eq!(tuning.move_speed_target(&sprint, true), tuning.sprint_speed);
    assert_eq!(tuning.move_speed_target(&sprint, false), tuning.move_speed);

    let mut state = grounded_state(&tuning);
    for i in 0..200 {
        state.intent = MovementIntent {
            sprint_held: i < 120,
            walk_held: i >= 120,
            ..forward_intent()
        };
        integrate(&mut state, 0.0, i as f64 * 16.0, &tuning);
        assert!(state.current_move_speed >= 0.0);
        assert!(state.current_move_speed <= tuning.sprint_speed);
    }
    assert!((state.current_move_speed - tuning.walk_speed).abs() < 1e-4);
}

#[test]
fn test_velocity_never_exceeds_max() {
    let tuning = LocomotionTuning {
        max_velocity: 2.0,
        ..default()
    };
    let mut state = grounded_state(&tuning);
    state.set_linear_velocity(Vec3::new(5.0, 5.0, 5.0));
    state.intent = MovementIntent::default();

    let velocity = integrate(&mut state, 0.0, 0.0, &tuning);

    assert!(velocity.length() <= 2.0 + 1e-5);
}

#[test]
fn test_jump_applies_vertical_velocity() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.set_linear_velocity(Vec3::new(0.0, 0.0, 0.5));
    state.intent = MovementIntent {
        jump_requested: true,
        ..default()
    };

    let velocity = integrate(&mut state, 0.0, 5000.0, &tuning);

    assert!(state.jumped_this_tick);
    assert!(velocity.y > 0.0);
    assert!(velocity.y <= tuning.max_velocity);
    assert!(!state.intent.jump_requested);
    assert_eq!(state.last_jump_ms, Some(5000.0));
}

#[test]
fn test_jump_while_sliding_is_a_no_op() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.sliding = true;
    state.set_linear_velocity(Vec3::new(0.0, -0.5, 1.0));
    state.intent = MovementIntent {
        jump_requested: true,
        ..default()
    };

    let velocity = integrate(&mut state, 0.0, 5000.0, &tuning);

    assert!(!state.jumped_this_tick);
    assert_eq!(velocity.y, -0.5);
    assert!(!state.intent.jump_requested);
    assert_eq!(state.last_jump_ms, None);
}

#[test]
fn test_jump_respects_cooldown() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.set_linear_velocity(Vec3::new(0.0, 0.0, 0.5));
    state.intent.jump_requested = true;
    integrate(&mut state, 0.0, 1000.0, &tuning);
    assert!(state.jumped_this_tick);

    // Land again and ask before the cooldown has passed.
    state.set_linear_velocity(Vec3::new(0.0, 0.0, 0.5));
    state.intent.jump_requested = true;
    integrate(&mut state, 0.0, 1000.0 + tuning.jump_cooldown_ms - 1.0, &tuning);
    assert!(!state.jumped_this_tick);

    state.set_linear_velocity(Vec3::new(0.0, 0.0, 0.5));
    state.intent.jump_requested = true;
    integrate(&mut state, 0.0, 1000.0 + tuning.jump_cooldown_ms, &tuning);
    assert!(state.jumped_this_tick);
}

#[test]
fn test_jump_needs_ground() {
    let tuning = LocomotionTuning::default();
    let mut state = LocomotionState::new(&tuning, 0.0);
    state.set_linear_velocity(Vec3::new(0.0, -1.0, 0.5));
    state.intent.jump_requested = true;

    integrate(&mut state, 0.0, 5000.0, &tuning);

    assert!(!state.jumped_this_tick);
}

#[test]
fn test_friction_converges_without_sign_flip() {
    let tuning = LocomotionTuning {
        friction: 0.115,
        ..default()
    };
    let mut state = grounded_state(&tuning);
    state.set_linear_velocity(Vec3::new(0.0, 0.0, 2.0));
    state.intent = MovementIntent::default();

    let mut previous = 2.0_f32;
    let mut ticks = 0;
    while state.horizontal_speed > 0.0 {
        let velocity = integrate(&mut state, 0.0, ticks as f64 * 16.0, &tuning);
        assert!(velocity.z >= 0.0);
        assert!(state.horizontal_speed < previous);
        previous = state.horizontal_speed;
        ticks += 1;
        assert!(ticks <= 60, "friction failed to settle");
    }
    assert!(ticks >= 10);
    assert_eq!(state.linear_velocity.z, 0.0);
}

#[test]
fn test_no_friction_while_airborne() {
    let tuning = LocomotionTuning::default();
    let mut state = LocomotionState::new(&tuning, 0.0);
    state.set_linear_velocity(Vec3::new(1.0, -2.0, 0.0));

    let velocity = integrate(&mut state, 0.0, 0.0, &tuning);

    assert_eq!(velocity, Vec3::new(1.0, -2.0, 0.0));
}

#[test]
fn test_friction_leaves_vertical_alone() {
    let velocity = apply_friction(Vec3::new(1.0, -3.0, 1.0), 0.5, 0.01);
    assert_eq!(velocity.y, -3.0);
    assert!((velocity.x - 0.5).abs() < 1e-6);
}

#[test]
fn test_approach_does_not_overshoot() {
    assert_eq!(approach(0.98, 1.0, 0.04), 1.0);
    assert_eq!(approach(1.02, 1.0, 0.04), 1.0);
    assert!((approach(0.5, 1.0, 0.04) - 0.54).abs() < 1e-6);
}

#[test]
fn test_integrate_rejects_non_finite_velocity() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    state.intent = forward_intent();
    state.current_move_speed = f32::NAN;
    state.accel_ramp = 0.5;

    let velocity = integrate(&mut state, 0.0, 0.0, &tuning);

    assert!(velocity.is_finite());
}

// -----------------------------------------------------------------------------
// Orientation tests
// -----------------------------------------------------------------------------

#[test]
fn test_heading_rotation_faces_quantized_direction() {
    let rotation = heading_rotation(Vec3::new(1.0, 0.0, 0.9));
    let facing = rotation * Vec3::Z;
    assert!((facing.x.atan2(facing.z) - FRAC_PI_4).abs() < 1e-5);
    assert_eq!(heading_rotation(Vec3::ZERO), Quat::IDENTITY);
}

#[test]
fn test_orient_aligns_to_surface_and_strips_tilt_spin() {
    let tuning = LocomotionTuning::default();
    let mut state = grounded_state(&tuning);
    let normal = tilted_normal(15.0);
    state.surface_normal = normal;
    state.desired_direction = Vec3::X;
    let mut body = BodySample {
        angular_velocity: Vec3::new(1.0, 2.0, 3.0),
        ..default()
    };

    orient(&mut body, &mut state);

    assert!((body.rotation * Vec3::Y - normal).length() < 1e-5);
    assert_eq!(body.angular_velocity, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(state.rotation, body.rotation);
}

#[test]
fn test_orient_body_leaves_linear_velocity_untouched() {
    use avian3d::prelude::{AngularVelocity, LinearVelocity};
    use bevy::ecs::system::RunSystemOnce;

    let mut world = World::new();
    let entity = world
        .spawn((
            Player,
            Transform::default(),
            LinearVelocity(Vec3::Z),
            AngularVelocity(Vec3::new(1.0, 2.0, 3.0)),
            LocomotionState::default(),
        ))
        .id();
    world.clear_trackers();

    world
        .run_system_once(super::systems::orient_body)
        .expect("system runs");

    let body = world.entity(entity);
    let linear = body.get_ref::<LinearVelocity>().expect("linear velocity");
    assert!(!linear.is_changed());
    assert_eq!(linear.0, Vec3::Z);
    let angular = body.get::<AngularVelocity>().expect("angular velocity");
    assert_eq!(angular.0, Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_mesh_smoothing_moves_partway() {
    let body = Quat::from_rotation_y(PI / 2.0);
    let mesh = smooth_mesh_rotation(Quat::IDENTITY, body, 0.5);
    let angle = mesh.angle_between(Quat::IDENTITY);
    assert!((angle - PI / 4.0).abs() < 1e-4);
    assert!(smooth_mesh_rotation(Quat::IDENTITY, body, 1.0).angle_between(body) < 1e-3);
}

#[test]
fn test_mesh_sits_below_body() {
    let position = mesh_translation(Vec3::new(1.0, 2.0, 3.0), 0.2, 2.0);
    assert!((position - Vec3::new(1.0, 1.6, 3.0)).length() < 1e-6);
}

#[test]
fn test_teleport_stops_the_body() {
    let mut body = BodySample {
        linear_velocity: Vec3::ONE,
        angular_velocity: Vec3::ONE,
        ..default()
    };
    teleport(&mut body, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(body.position, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(body.linear_velocity, Vec3::ZERO);
    assert_eq!(body.angular_velocity, Vec3::ZERO);
}

#[cfg(feature = "dev-tools")]
#[test]
fn test_scatter_layout_is_seeded() {
    let a = super::dev::scatter_layout(7);
    let b = super::dev::scatter_layout(7);
    let c = super::dev::scatter_layout(8);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 100);
    assert_eq!(a.iter().filter(|p| p.mass == 0.0).count(), 50);
    for placement in &a {
        assert!(placement.center.y >= 0.0 && placement.center.y <= 10.0);
        assert!(placement.size.x >= 0.1 && placement.size.x <= 5.0);
    }
}
