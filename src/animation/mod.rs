//! Animation domain: clip selection, playback and skeleton binding.
//!
//! Selection is a pure rule table evaluated once per tick. Playback is a small
//! state machine that owns the one-shot/follow-up handoff. The binding layer
//! adapts both to Bevy's `AnimationPlayer`.

mod binding;
mod clips;
mod playback;
mod selector;


pub use binding::{CharacterAssets, ClipFades, ClipLibrary, PlayerClips, SkeletonRoot};
pub use clips::{ClipDescriptor, ClipSet};
pub use playback::{AnimationState, ClipProvider, PlayOutcome, PlaybackPhase};
pub use selector::{SelectionInput, SelectionRule, apply_rule, select, select_with_rule};

use bevy::app::AnimationSystems;
use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::animation::binding::{
    anchor_skeleton_root, bind_clip_library, drive_animation, fade_clip_weights,
    poll_clip_completion,
};
use crate::core::LocomotionSet;

/// Message fired when playback starts a new selection.
#[derive(Debug, Clone)]
pub struct ClipChanged {
    pub entity: Entity,
    pub from: Option<String>,
    pub to: ClipDescriptor,
    pub rule: SelectionRule,
}

impl Message for ClipChanged {}

/// Message fired when a one-shot finishes and its follow-up takes over.
#[derive(Debug, Clone)]
pub struct ClipCompleted {
    pub entity: Entity,
    pub clip: String,
    pub follow_up: String,
}

impl Message for ClipCompleted {}

pub struct CharacterAnimationPlugin;

impl Plugin for CharacterAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipSet>()
            .add_message::<ClipChanged>()
            .add_message::<ClipCompleted>()
            .add_systems(Update, bind_clip_library)
            .add_systems(Update, drive_animation.in_set(LocomotionSet::Animate))
            .add_systems(
                Update,
                (poll_clip_completion, fade_clip_weights)
                    .chain()
                    .in_set(LocomotionSet::Present),
            )
            // After clips are sampled, before transforms propagate.
            .add_systems(
                PostUpdate,
                anchor_skeleton_root
                    .after(AnimationSystems)
                    .before(TransformSystems::Propagate),
            );
    }
}
