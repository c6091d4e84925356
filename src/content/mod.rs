//! Content domain: the locomotion config file and its validation.

mod data;
mod loader;
mod validation;


pub use data::{CURRENT_SCHEMA_VERSION, CharacterDef, LocomotionConfig};
pub use loader::{CONFIG_PATH, ContentLoadError, load_config, parse_config};
pub use validation::{
    ValidationError, enforce_bounds, validate_character, validate_clips, validate_config,
};

use std::path::Path;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::FixedTick;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterDef>()
            .add_systems(PreStartup, load_locomotion_config);
    }
}

/// Load, validate and install the config before anything spawns. Any failure
/// falls back to defaults.
fn load_locomotion_config(mut commands: Commands) {
    let mut config = match load_config(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded locomotion config from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default locomotion config");
            LocomotionConfig::default()
        }
    };

    for e in validate_config(&mut config) {
        error!("Config validation: {}", e);
    }

    let LocomotionConfig {
        tuning,
        clips,
        character,
        ..
    } = config;
    commands.insert_resource(FixedTick::new(tuning.tick_rate_hz, tuning.max_backlog_ticks));
    commands.insert_resource(Gravity(Vec3::NEG_Y * tuning.gravity));
    commands.insert_resource(tuning);
    commands.insert_resource(clips);
    commands.insert_resource(character);
}
