//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug tooling state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Message to display temporarily in the status overlay
    pub status_message: Option<(String, f32)>,
    /// Snapshots dumped this session
    pub dumps: u32,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message. Returns true on the frame it expires.
    pub fn tick_message(&mut self, delta_secs: f32) -> bool {
        let Some((_, remaining)) = &mut self.status_message else {
            return false;
        };
        *remaining -= delta_secs;
        if *remaining <= 0.0 {
            self.status_message = None;
            return true;
        }
        false
    }
}
