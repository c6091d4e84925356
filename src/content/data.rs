//! Data definitions for the locomotion config file.
//!
//! These structs mirror `assets/data/locomotion.ron`. Every field has a
//! default, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::ClipSet;
use crate::movement::LocomotionTuning;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Top-level file (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub schema_version: u32,
    pub tuning: LocomotionTuning,
    pub clips: ClipSet,
    pub character: CharacterDef,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            tuning: LocomotionTuning::default(),
            clips: ClipSet::default(),
            character: CharacterDef::default(),
        }
    }
}

// ============================================================================
// Character
// ============================================================================

/// The character model and its physics body.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CharacterDef {
    pub model_path: String,
    pub model_scale: f32,
    /// Name of the bone pinned against root motion.
    pub skeleton_root: String,
    /// Full collider extents (width, height, depth) before character scale.
    pub body_size: [f32; 3],
    pub mass: f32,
    pub spawn_point: [f32; 3],
}

impl Default for CharacterDef {
    fn default() -> Self {
        Self {
            model_path: "models/cat_default.glb".to_string(),
            model_scale: 2.0,
            skeleton_root: "Root".to_string(),
            body_size: [0.175, 0.4, 0.6],
            mass: 5.0,
            spawn_point: [0.0, 2.0, 0.0],
        }
    }
}

impl CharacterDef {
    /// Half the unscaled collider height. The ground probe starts from here.
    pub fn half_height(&self) -> f32 {
        self.body_size[1] * 0.5
    }
}
