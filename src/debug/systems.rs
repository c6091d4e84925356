//! Debug domain: hotkeys and debug logging.

use bevy::prelude::*;

use crate::animation::{ClipChanged, ClipCompleted};
use crate::debug::state::DebugState;
use crate::movement::{LocomotionSnapshot, LocomotionTuning};

/// Single-line JSON for a telemetry snapshot.
pub fn snapshot_json(snapshot: &LocomotionSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Toggle verbose locomotion logging with NumpadMultiply
pub(crate) fn toggle_debug_mode(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<LocomotionTuning>,
    mut debug_state: ResMut<DebugState>,
) {
    if !keyboard.just_pressed(KeyCode::NumpadMultiply) {
        return;
    }

    tuning.debug_mode = !tuning.debug_mode;
    let msg = if tuning.debug_mode {
        "Debug logging ON"
    } else {
        "Debug logging OFF"
    };
    debug_state.set_message(msg, 2.0);
    info!("[DEBUG] {}", msg);
}

/// Dump the latest snapshot to the log with F3
pub(crate) fn dump_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    snapshot: Res<LocomotionSnapshot>,
    mut debug_state: ResMut<DebugState>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    match snapshot_json(&snapshot) {
        Ok(json) => {
            debug_state.dumps += 1;
            info!("[DEBUG] snapshot {}: {}", debug_state.dumps, json);
            let dumps = debug_state.dumps;
            debug_state.set_message(format!("Snapshot {} logged", dumps), 2.0);
        }
        Err(e) => error!("[DEBUG] failed to serialize snapshot: {}", e),
    }
}

/// Log line for a clip change. Logged at info so it shows at the default level.
pub fn clip_changed_line(msg: &ClipChanged) -> String {
    format!(
        "[DEBUG] Clip changed on {:?}: {:?} -> {} via {:?}",
        msg.entity,
        msg.from,
        msg.to.primary(),
        msg.rule
    )
}

pub fn clip_completed_line(msg: &ClipCompleted) -> String {
    format!(
        "[DEBUG] Clip {} finished on {:?}, looping {}",
        msg.clip, msg.entity, msg.follow_up
    )
}

/// Log clip changes while debug logging is on. Always drains the readers.
pub(crate) fn log_clip_messages(
    tuning: Res<LocomotionTuning>,
    mut changed: MessageReader<ClipChanged>,
    mut completed: MessageReader<ClipCompleted>,
) {
    for msg in changed.read() {
        if tuning.debug_mode {
            info!("{}", clip_changed_line(msg));
        }
    }
    for msg in completed.read() {
        if tuning.debug_mode {
            info!("{}", clip_completed_line(msg));
        }
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}
