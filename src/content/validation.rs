//! Range checks for loaded config values.
//!
//! Nothing here rejects a file. Each out-of-range value is reported and
//! clamped so the character still runs.

use super::data::*;
use crate::animation::ClipSet;
use crate::movement::LocomotionTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.field, self.message)
    }
}

/// Clamp a field into `[min, max]`, recording an error if it was outside.
/// NaN counts as outside and becomes `min`.
macro_rules! clamp_field {
    ($errors:expr, $owner:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $owner.$field;
        let (min, max) = ($min, $max);
        if !(value >= min && value <= max) {
            let clamped = if value > max { max } else { min };
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("{} is outside [{}, {}], using {}", value, min, max, clamped),
            });
            $owner.$field = clamped;
        }
    };
}

/// Clamp every tuning value into range. Order matters: fields bounded by
/// other fields are checked after those fields.
pub fn enforce_bounds(tuning: &mut LocomotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    clamp_field!(errors, tuning, move_speed, 0.0, f32::MAX);
    clamp_field!(errors, tuning, walk_speed, 0.0, tuning.move_speed);
    clamp_field!(errors, tuning, sprint_speed, tuning.move_speed, f32::MAX);
    clamp_field!(errors, tuning, max_velocity, 0.01, f32::MAX);

    clamp_field!(errors, tuning, jump_height, 0.0, f32::MAX);
    clamp_field!(errors, tuning, min_jump_height, 0.0, f32::MAX);
    clamp_field!(errors, tuning, jump_cooldown_ms, 0.0, f64::MAX);
    clamp_field!(errors, tuning, jump_min_speed, 0.0, f32::MAX);

    clamp_field!(errors, tuning, friction, 0.0, 1.0);
    clamp_field!(errors, tuning, accel_step, 0.001, 1.0);
    clamp_field!(errors, tuning, start_delay, 0.0, f32::MAX);
    clamp_field!(errors, tuning, max_input_magnitude, 0.01, f32::MAX);
    clamp_field!(errors, tuning, stationary_epsilon, 0.0, f32::MAX);

    clamp_field!(errors, tuning, max_walkable_angle, 0.0, 90.0);
    clamp_field!(errors, tuning, steep_angle, 0.0, tuning.max_walkable_angle);

    clamp_field!(errors, tuning, rotation_smoothing, 0.0, 1.0);
    clamp_field!(errors, tuning, idle_sleep_timeout_ms, 0.0, f64::MAX);
    clamp_field!(errors, tuning, anim_blend_speed, 0.001, 1.0);
    clamp_field!(errors, tuning, sleep_blend_speed, 0.001, 1.0);

    clamp_field!(errors, tuning, character_scale, 0.01, f32::MAX);
    clamp_field!(errors, tuning, slope_detection_buffer, 0.0, f32::MAX);
    clamp_field!(errors, tuning, mesh_offset, f32::MIN, f32::MAX);

    clamp_field!(errors, tuning, walk_band, 0.0, f32::MAX);
    clamp_field!(errors, tuning, trot_band, tuning.walk_band, f32::MAX);
    clamp_field!(errors, tuning, gallop_band, tuning.trot_band, f32::MAX);

    clamp_field!(errors, tuning, gravity, 0.0, f32::MAX);
    clamp_field!(errors, tuning, tick_rate_hz, 1.0, 1000.0);
    clamp_field!(errors, tuning, max_backlog_ticks, 1, 64);
    clamp_field!(errors, tuning, mouse_sensitivity, 0.0, 1.0);

    errors
}

/// Fix up the character body. Names are checked but left alone.
pub fn validate_character(character: &mut CharacterDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if character.model_path.trim().is_empty() {
        errors.push(ValidationError {
            field: "model_path",
            message: "model path is empty".to_string(),
        });
    }
    clamp_field!(errors, character, model_scale, 0.01, f32::MAX);
    clamp_field!(errors, character, mass, 0.01, f32::MAX);

    let mut size = BodySize {
        width: character.body_size[0],
        height: character.body_size[1],
        depth: character.body_size[2],
    };
    clamp_field!(errors, size, width, 0.01, f32::MAX);
    clamp_field!(errors, size, height, 0.01, f32::MAX);
    clamp_field!(errors, size, depth, 0.01, f32::MAX);
    character.body_size = [size.width, size.height, size.depth];

    if !character.spawn_point.iter().all(|v| v.is_finite()) {
        errors.push(ValidationError {
            field: "spawn_point",
            message: format!("{:?} is not finite, using origin", character.spawn_point),
        });
        character.spawn_point = [0.0, 2.0, 0.0];
    }

    errors
}

struct BodySize {
    width: f32,
    height: f32,
    depth: f32,
}

/// Every clip role needs a name. An empty one can never match a loaded clip.
pub fn validate_clips(clips: &ClipSet) -> Vec<ValidationError> {
    clips
        .all()
        .into_iter()
        .flat_map(|descriptor| descriptor.clip_names())
        .filter(|name| name.trim().is_empty())
        .map(|_| ValidationError {
            field: "clips",
            message: "clip name is empty".to_string(),
        })
        .collect()
}

/// Run every check against a loaded config.
pub fn validate_config(config: &mut LocomotionConfig) -> Vec<ValidationError> {
    let mut errors = enforce_bounds(&mut config.tuning);
    errors.extend(validate_character(&mut config.character));
    config.tuning.body_half_height = config.character.half_height();
    errors.extend(validate_clips(&config.clips));
    errors
}
