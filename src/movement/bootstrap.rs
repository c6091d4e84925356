//! Movement domain: player bootstrap from the loaded character definition.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::CharacterAssets;
use crate::content::CharacterDef;
use crate::core::SimClock;
use crate::movement::{GameLayer, LocomotionState, LocomotionTuning, Player, PlayerMesh, mesh_translation};

/// Spawn the physics body and the separate visual mesh.
pub(crate) fn spawn_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<LocomotionTuning>,
    character: Res<CharacterDef>,
    clock: Res<SimClock>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let scale = tuning.character_scale;
    let spawn = Vec3::from_array(character.spawn_point);
    let [width, height, depth] = character.body_size;

    info!(
        "Spawning player: model={}, spawn={:?}, mass={}",
        character.model_path, spawn, character.mass
    );

    commands.spawn((
        (
            Name::new("Player"),
            Player,
            LocomotionState::new(&tuning, clock.now_ms()),
            Transform::from_translation(spawn),
        ),
        (
            RigidBody::Dynamic,
            Collider::cuboid(width * scale, height * scale, depth * scale),
            Mass(character.mass),
            // The integrator owns friction; the body slides freely otherwise.
            Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            Restitution::new(0.0),
            LinearVelocity::default(),
            AngularVelocity::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Prop]),
        ),
    ));

    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(character.model_path.clone()));
    commands.spawn((
        Name::new("PlayerMesh"),
        PlayerMesh,
        SceneRoot(scene),
        Transform::from_translation(mesh_translation(spawn, tuning.mesh_offset, scale))
            .with_scale(Vec3::splat(character.model_scale * scale)),
    ));

    commands.insert_resource(CharacterAssets {
        gltf: asset_server.load(character.model_path.clone()),
    });
}
