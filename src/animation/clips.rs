//! Animation domain: clip descriptors and the named clip table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A clip to play. `WithFollowUp` plays its first clip once, then loops the
/// second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipDescriptor {
    Simple(String),
    WithFollowUp(String, String),
}

impl ClipDescriptor {
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple(name.into())
    }

    pub fn with_follow_up(name: impl Into<String>, follow_up: impl Into<String>) -> Self {
        Self::WithFollowUp(name.into(), follow_up.into())
    }

    /// The clip that starts first.
    pub fn primary(&self) -> &str {
        match self {
            Self::Simple(name) | Self::WithFollowUp(name, _) => name,
        }
    }

    pub fn follow_up(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::WithFollowUp(_, follow_up) => Some(follow_up),
        }
    }

    /// Every clip name this descriptor needs loaded.
    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary()).chain(self.follow_up())
    }

    /// Two descriptors starting the same clip count as the same selection.
    pub fn same_primary(&self, other: &ClipDescriptor) -> bool {
        self.primary() == other.primary()
    }
}

/// The clips the selector chooses between, by role.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipSet {
    pub idle: ClipDescriptor,
    pub sleep: ClipDescriptor,
    pub walk: ClipDescriptor,
    pub trot: ClipDescriptor,
    pub gallop: ClipDescriptor,
    /// One-shot played when movement stops.
    pub stop: ClipDescriptor,
    pub jump: ClipDescriptor,
    pub fall: ClipDescriptor,
}

impl Default for ClipSet {
    fn default() -> Self {
        Self {
            idle: ClipDescriptor::simple("cat_idleStandA"),
            sleep: ClipDescriptor::simple("cat_idleSleep"),
            walk: ClipDescriptor::simple("cat_walk"),
            trot: ClipDescriptor::simple("cat_trot"),
            gallop: ClipDescriptor::simple("cat_gallop"),
            stop: ClipDescriptor::with_follow_up("cat_walk_toStandA", "cat_idleStandA"),
            jump: ClipDescriptor::with_follow_up("cat_jump", "cat_idleStandA"),
            fall: ClipDescriptor::with_follow_up("cat_jumpHigh", "cat_idleStandA"),
        }
    }
}

impl ClipSet {
    /// Walk, trot and gallop. Used to tell a moving clip from everything else.
    pub fn is_locomotion(&self, descriptor: &ClipDescriptor) -> bool {
        [&self.walk, &self.trot, &self.gallop]
            .into_iter()
            .any(|clip| clip.same_primary(descriptor))
    }

    pub fn all(&self) -> [&ClipDescriptor; 8] {
        [
            &self.idle,
            &self.sleep,
            &self.walk,
            &self.trot,
            &self.gallop,
            &self.stop,
            &self.jump,
            &self.fall,
        ]
    }
}
