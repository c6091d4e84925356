//! Animation domain: binding playback to the loaded skeleton.

use std::collections::HashMap;

use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::animation::{
    AnimationState, ClipChanged, ClipCompleted, ClipProvider, ClipSet, PlayOutcome, SelectionInput,
    select_with_rule,
};
use crate::content::CharacterDef;
use crate::core::SimClock;
use crate::movement::{LocomotionState, LocomotionTuning, Player};

/// Handle to the character's glTF, kept so its named clips can be looked up
/// once the scene spawns.
#[derive(Resource, Debug, Clone)]
pub struct CharacterAssets {
    pub gltf: Handle<Gltf>,
}

/// Graph node for every named clip in the model.
#[derive(Component, Debug, Clone, Default)]
pub struct ClipLibrary {
    pub nodes: HashMap<String, AnimationNodeIndex>,
}

/// The clip whose weight is ramping up, and how fast.
#[derive(Component, Debug, Clone, Default)]
pub struct ClipFades {
    pub target: Option<AnimationNodeIndex>,
    pub rate: f32,
}

/// Skeleton root bone pinned to its rest translation so clips with root
/// motion cannot drag the mesh off the body.
#[derive(Component, Debug, Clone, Copy)]
pub struct SkeletonRoot {
    pub rest: Vec3,
}

/// `ClipProvider` over a Bevy animation player.
pub struct PlayerClips<'a> {
    pub player: &'a mut AnimationPlayer,
    pub library: &'a ClipLibrary,
    pub fades: &'a mut ClipFades,
    pub blend_speed: f32,
    /// Clip that blends in at `sleep_blend_speed` instead.
    pub sleep_clip: &'a str,
    pub sleep_blend_speed: f32,
}

impl ClipProvider for PlayerClips<'_> {
    fn has_clip(&self, name: &str) -> bool {
        self.library.nodes.contains_key(name)
    }

    fn stop_all(&mut self) {
        self.player.stop_all();
        self.fades.target = None;
    }

    fn play(&mut self, name: &str, looped: bool) {
        let Some(&node) = self.library.nodes.get(name) else {
            return;
        };
        let active = self.player.start(node);
        active.set_weight(0.0);
        if looped {
            active.repeat();
        }
        self.fades.target = Some(node);
        self.fades.rate = if name == self.sleep_clip {
            self.sleep_blend_speed
        } else {
            self.blend_speed
        };
    }

    fn is_finished(&self, name: &str) -> bool {
        self.library
            .nodes
            .get(name)
            .and_then(|node| self.player.animation(*node))
            .is_none_or(|active| active.is_finished())
    }
}

/// Build the animation graph once the model's player appears, then give the
/// character its playback state. Retries each frame until the glTF asset is
/// available.
pub(crate) fn bind_clip_library(
    mut commands: Commands,
    assets: Option<Res<CharacterAssets>>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    character: Res<CharacterDef>,
    players: Query<Entity, (With<AnimationPlayer>, Without<ClipLibrary>)>,
    characters: Query<Entity, (With<Player>, Without<AnimationState>)>,
    children: Query<&Children>,
    bones: Query<(&Name, &Transform)>,
) {
    let Some(assets) = assets else {
        return;
    };
    for entity in &players {
        let Some(gltf) = gltfs.get(&assets.gltf) else {
            return;
        };

        let mut graph = AnimationGraph::new();
        let root = graph.root;
        let nodes: HashMap<String, AnimationNodeIndex> = gltf
            .named_animations
            .iter()
            .map(|(name, clip)| (name.to_string(), graph.add_clip(clip.clone(), 0.0, root)))
            .collect();
        info!("Bound {} animation clips", nodes.len());

        commands.entity(entity).insert((
            AnimationGraphHandle(graphs.add(graph)),
            ClipLibrary { nodes },
            ClipFades::default(),
        ));
        for character in &characters {
            commands.entity(character).insert(AnimationState::default());
        }

        let root_bone = children.iter_descendants(entity).find_map(|bone| {
            bones
                .get(bone)
                .ok()
                .filter(|(name, _)| name.as_str() == character.skeleton_root)
                .map(|(_, transform)| (bone, transform.translation))
        });
        match root_bone {
            Some((bone, rest)) => {
                commands.entity(bone).insert(SkeletonRoot { rest });
            }
            None => warn!(
                "Skeleton root '{}' not found, root motion will not be pinned",
                character.skeleton_root
            ),
        }
    }
}

/// Select a clip for this tick and hand it to playback.
pub(crate) fn drive_animation(
    clock: Res<SimClock>,
    tuning: Res<LocomotionTuning>,
    clips: Res<ClipSet>,
    mut bodies: Query<(Entity, &LocomotionState, &mut AnimationState), With<Player>>,
    mut players: Query<(&mut AnimationPlayer, &ClipLibrary, &mut ClipFades)>,
    mut changed: MessageWriter<ClipChanged>,
) {
    let Ok((mut player, library, mut fades)) = players.single_mut() else {
        return;
    };
    for (entity, locomotion, mut animation) in &mut bodies {
        let input = SelectionInput {
            locomotion,
            current: animation.current(),
            now_ms: clock.now_ms(),
        };
        let (rule, descriptor) = select_with_rule(&input, &clips, &tuning);

        let mut provider = PlayerClips {
            player: &mut player,
            library,
            fades: &mut fades,
            blend_speed: tuning.anim_blend_speed,
            sleep_clip: clips.sleep.primary(),
            sleep_blend_speed: tuning.sleep_blend_speed,
        };
        let from = animation.current().map(|clip| clip.primary().to_owned());
        match animation.request(&descriptor, &mut provider) {
            PlayOutcome::Unchanged => {}
            PlayOutcome::Started => {
                if tuning.debug_mode {
                    info!("[DEBUG] Clip {:?} -> {} ({:?})", from, descriptor.primary(), rule);
                }
                changed.write(ClipChanged {
                    entity,
                    from,
                    to: descriptor.clone(),
                    rule,
                });
            }
            PlayOutcome::MissingClip(name) => {
                warn_once!("Clip '{}' is not in the loaded model, ignoring", name);
            }
        }
    }
}

/// Loop the follow-up once a one-shot finishes. Runs every frame.
pub(crate) fn poll_clip_completion(
    tuning: Res<LocomotionTuning>,
    clips: Res<ClipSet>,
    mut bodies: Query<(Entity, &mut AnimationState), With<Player>>,
    mut players: Query<(&mut AnimationPlayer, &ClipLibrary, &mut ClipFades)>,
    mut completed: MessageWriter<ClipCompleted>,
) {
    let Ok((mut player, library, mut fades)) = players.single_mut() else {
        return;
    };
    for (entity, mut animation) in &mut bodies {
        if !animation.is_transitioning() {
            continue;
        }
        let mut provider = PlayerClips {
            player: &mut player,
            library,
            fades: &mut fades,
            blend_speed: tuning.anim_blend_speed,
            sleep_clip: clips.sleep.primary(),
            sleep_blend_speed: tuning.sleep_blend_speed,
        };
        if let Some(clip) = animation.poll(&mut provider) {
            let follow_up = animation.current_name().unwrap_or_default().to_owned();
            completed.write(ClipCompleted {
                entity,
                clip,
                follow_up,
            });
        }
    }
}

/// Ease the active clip's weight toward full.
pub(crate) fn fade_clip_weights(mut players: Query<(&mut AnimationPlayer, &ClipFades)>) {
    for (mut player, fades) in &mut players {
        let Some(node) = fades.target else {
            continue;
        };
        if let Some(active) = player.animation_mut(node) {
            let weight = (active.weight() + fades.rate).min(1.0);
            active.set_weight(weight);
        }
    }
}

pub(crate) fn anchor_skeleton_root(mut roots: Query<(&SkeletonRoot, &mut Transform)>) {
    for (root, mut transform) in &mut roots {
        transform.translation = root.rest;
    }
}
