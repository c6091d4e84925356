//! Animation domain: playback state machine.
//!
//! A descriptor with a follow-up plays its primary once; when the primary
//! finishes, the follow-up loops. A newer request always supersedes a pending
//! follow-up, and a completion carrying an old token is ignored.

use bevy::prelude::*;

use crate::animation::ClipDescriptor;

/// Skeleton-side operations playback needs.
pub trait ClipProvider {
    fn has_clip(&self, name: &str) -> bool;
    /// Stop every clip and zero its weight.
    fn stop_all(&mut self);
    /// Restart `name` from its first frame and bring its weight up.
    fn play(&mut self, name: &str, looped: bool);
    /// True once a one-shot clip has played through.
    fn is_finished(&self, name: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Stopped,
    Looping(String),
    Transitioning {
        primary: String,
        follow_up: String,
        token: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The descriptor was already current.
    Unchanged,
    Started,
    /// A clip the descriptor needs is not loaded. Nothing changed.
    MissingClip(String),
}

/// Per-character playback state.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    current: Option<ClipDescriptor>,
    previous: Option<ClipDescriptor>,
    phase: PlaybackPhase,
    next_token: u64,
}

impl AnimationState {
    /// The descriptor most recently started. Stays the one-shot descriptor
    /// after its follow-up takes over.
    pub fn current(&self) -> Option<&ClipDescriptor> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&ClipDescriptor> {
        self.previous.as_ref()
    }

    pub fn phase(&self) -> &PlaybackPhase {
        &self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Transitioning { .. })
    }

    /// Token the pending one-shot will complete with.
    pub fn pending_token(&self) -> Option<u64> {
        match self.phase {
            PlaybackPhase::Transitioning { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Name of the clip on screen right now.
    pub fn current_name(&self) -> Option<&str> {
        match &self.phase {
            PlaybackPhase::Stopped => None,
            PlaybackPhase::Looping(name) => Some(name),
            PlaybackPhase::Transitioning { primary, .. } => Some(primary),
        }
    }

    pub fn request(
        &mut self,
        descriptor: &ClipDescriptor,
        clips: &mut impl ClipProvider,
    ) -> PlayOutcome {
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.same_primary(descriptor))
        {
            return PlayOutcome::Unchanged;
        }
        if let Some(missing) = descriptor.clip_names().find(|name| !clips.has_clip(name)) {
            return PlayOutcome::MissingClip(missing.to_owned());
        }

        clips.stop_all();
        match descriptor {
            ClipDescriptor::Simple(name) => {
                clips.play(name, true);
                self.phase = PlaybackPhase::Looping(name.clone());
            }
            ClipDescriptor::WithFollowUp(primary, follow_up) => {
                clips.play(primary, false);
                let token = self.next_token;
                self.next_token = self.next_token.wrapping_add(1);
                self.phase = PlaybackPhase::Transitioning {
                    primary: primary.clone(),
                    follow_up: follow_up.clone(),
                    token,
                };
            }
        }
        self.previous = self.current.replace(descriptor.clone());
        PlayOutcome::Started
    }

    /// Finish the pending one-shot and loop its follow-up. Returns false for
    /// a stale or unexpected token.
    pub fn complete(&mut self, token: u64, clips: &mut impl ClipProvider) -> bool {
        let PlaybackPhase::Transitioning {
            follow_up,
            token: pending,
            ..
        } = &self.phase
        else {
            return false;
        };
        if *pending != token {
            return false;
        }

        let follow_up = follow_up.clone();
        clips.stop_all();
        clips.play(&follow_up, true);
        self.phase = PlaybackPhase::Looping(follow_up);
        true
    }

    /// Complete the pending one-shot if the provider reports it finished.
    /// Returns the finished clip name.
    pub fn poll(&mut self, clips: &mut impl ClipProvider) -> Option<String> {
        let PlaybackPhase::Transitioning { primary, token, .. } = &self.phase else {
            return None;
        };
        if !clips.is_finished(primary) {
            return None;
        }
        let (primary, token) = (primary.clone(), *token);
        self.complete(token, clips).then_some(primary)
    }
}
