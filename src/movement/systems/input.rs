//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{LocomotionState, Player};

/// Keyboard to intent. Jump arms on press and fires on release, and only if
/// the body was not sliding when the key went down.
pub(crate) fn read_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut jump_armed: Local<bool>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    for mut state in &mut query {
        let grounded = state.grounded;
        let sliding = state.sliding;
        let can_sprint = state.can_sprint;
        let intent = &mut state.intent;

        intent.forward = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
        intent.back = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
        intent.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
        intent.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
        intent.sprint_held = can_sprint && keyboard.pressed(KeyCode::ShiftLeft);
        intent.walk_held = keyboard.pressed(KeyCode::AltLeft);

        if keyboard.just_pressed(KeyCode::Space) && !sliding {
            *jump_armed = true;
        }
        if keyboard.just_released(KeyCode::Space) && *jump_armed {
            *jump_armed = false;
            // Consumed by the integrator on the next tick.
            if grounded {
                intent.jump_requested = true;
            }
        }
    }
}
