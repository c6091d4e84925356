//! Debug tooling for tuning the controller at runtime.
//!
//! Features:
//! - Toggle verbose locomotion logging (NumpadMultiply)
//! - Dump the telemetry snapshot as JSON (F3)
//! - Log clip changes and one-shot completions

mod state;
mod systems;
mod ui;


pub use state::DebugState;
pub use systems::{clip_changed_line, clip_completed_line, snapshot_json};
pub use ui::DebugStatusMessage;

use bevy::prelude::*;

use crate::core::LocomotionSet;
use crate::debug::systems::{
    dump_snapshot, log_clip_messages, toggle_debug_mode, update_status_message,
};
use crate::debug::ui::{spawn_debug_status, update_debug_status};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_status)
            .add_systems(
                Update,
                (toggle_debug_mode, dump_snapshot).in_set(LocomotionSet::Input),
            )
            .add_systems(
                Update,
                (log_clip_messages, update_status_message, update_debug_status)
                    .chain()
                    .in_set(LocomotionSet::Present),
            );
    }
}
