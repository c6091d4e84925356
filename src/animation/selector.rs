//! Animation domain: clip selection.
//!
//! An ordered rule table, first match wins. Selection reads state and returns
//! a descriptor; it never touches playback.

use crate::animation::{ClipDescriptor, ClipSet};
use crate::movement::{LocomotionState, LocomotionTuning};

/// The rule that produced a selection, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionRule {
    Sleep,
    Airborne,
    JustStopped,
    Sliding,
    SpeedBand,
    Idle,
}

impl SelectionRule {
    pub const ORDER: [SelectionRule; 6] = [
        SelectionRule::Sleep,
        SelectionRule::Airborne,
        SelectionRule::JustStopped,
        SelectionRule::Sliding,
        SelectionRule::SpeedBand,
        SelectionRule::Idle,
    ];
}

/// Everything one selection looks at.
#[derive(Debug, Clone, Copy)]
pub struct SelectionInput<'a> {
    pub locomotion: &'a LocomotionState,
    /// The descriptor playback last started, if any.
    pub current: Option<&'a ClipDescriptor>,
    pub now_ms: f64,
}

pub fn select(input: &SelectionInput, clips: &ClipSet, tuning: &LocomotionTuning) -> ClipDescriptor {
    select_with_rule(input, clips, tuning).1
}

pub fn select_with_rule(
    input: &SelectionInput,
    clips: &ClipSet,
    tuning: &LocomotionTuning,
) -> (SelectionRule, ClipDescriptor) {
    SelectionRule::ORDER
        .into_iter()
        .find_map(|rule| apply_rule(rule, input, clips, tuning).map(|clip| (rule, clip.clone())))
        .unwrap_or_else(|| (SelectionRule::Idle, clips.idle.clone()))
}

/// Evaluate a single rule. `None` means the rule does not match.
pub fn apply_rule<'c>(
    rule: SelectionRule,
    input: &SelectionInput,
    clips: &'c ClipSet,
    tuning: &LocomotionTuning,
) -> Option<&'c ClipDescriptor> {
    let state = input.locomotion;
    let scale = tuning.character_scale;
    let moving = state.intent.is_moving();

    match rule {
        SelectionRule::Sleep => {
            (input.now_ms - state.last_move_ms >= tuning.idle_sleep_timeout_ms).then_some(&clips.sleep)
        }
        SelectionRule::Airborne => {
            if state.jumped_this_tick {
                Some(&clips.jump)
            } else if !state.grounded {
                Some(&clips.fall)
            } else {
                None
            }
        }
        SelectionRule::JustStopped => {
            let current = input.current?;
            let still_moving = state.horizontal_speed > 0.0
                || clips.is_locomotion(current)
                || clips.stop.same_primary(current);
            (!moving && !clips.idle.same_primary(current) && still_moving).then_some(&clips.stop)
        }
        SelectionRule::Sliding => state.sliding.then_some(&clips.walk),
        SelectionRule::SpeedBand => {
            let speed = state.horizontal_speed;
            if !moving && speed <= tuning.walk_band * scale {
                None
            } else if speed <= tuning.trot_band * scale {
                Some(&clips.walk)
            } else if speed <= tuning.gallop_band * scale {
                Some(&clips.trot)
            } else {
                Some(&clips.gallop)
            }
        }
        SelectionRule::Idle => Some(&clips.idle),
    }
}
