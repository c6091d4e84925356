//! UI domain: telemetry HUD.

mod hud_player;


pub use hud_player::{SpeedBarFill, TelemetryHud, TelemetryText, speed_fraction, telemetry_lines};

use bevy::prelude::*;

use crate::core::LocomotionSet;
use crate::ui::hud_player::{spawn_telemetry_hud, update_telemetry_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_telemetry_hud)
            .add_systems(Update, update_telemetry_hud.in_set(LocomotionSet::Present));
    }
}
