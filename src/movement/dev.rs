//! Movement domain: debug-only test arena and teleport hotkeys.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::CharacterDef;
use crate::movement::{AvianBody, GameLayer, Ground, Player, teleport};

const SCATTER_CENTER: Vec3 = Vec3::new(0.0, 5.0, 0.0);
const SCATTER_HALF_RANGE: Vec3 = Vec3::new(25.0, 5.0, 25.0);
const SCATTER_COUNT: usize = 50;
const REROLL_DROP_HEIGHT: f32 = 15.0;

/// Seed for the random platform scatter. Rerolled by the dev hotkey.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSeed(pub u64);

impl Default for ArenaSeed {
    fn default() -> Self {
        Self(0x00ca_7a1c)
    }
}

/// Marker for generated platforms so a reroll can clear them.
#[derive(Component, Debug)]
pub struct ScatterBox;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPlacement {
    pub center: Vec3,
    pub size: Vec3,
    /// Zero means static.
    pub mass: f32,
}

/// Deterministic layout: a static batch and a loose batch, thin slabs spread
/// over the arena.
pub fn scatter_layout(seed: u64) -> Vec<ScatterPlacement> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    [0.0, 5.0]
        .into_iter()
        .flat_map(|mass| std::iter::repeat_n(mass, SCATTER_COUNT))
        .map(|mass| {
            let offset = Vec3::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            ) * SCATTER_HALF_RANGE;
            let size = Vec3::new(rng.random_range(0.1..=5.0), 0.1, rng.random_range(0.1..=5.0));
            ScatterPlacement {
                center: SCATTER_CENTER + offset,
                size,
                mass,
            }
        })
        .collect()
}

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    seed: Res<ArenaSeed>,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Prop]);

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(60.0, 1.0, 60.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
        Color::srgb(0.4, 0.5, 0.4),
        ground_layers,
    );

    // One ramp per slope class: walkable, steep, sliding.
    for (x, degrees, color) in [
        (-6.0, 15.0_f32, Color::srgb(0.5, 0.6, 0.4)),
        (0.0, 27.0, Color::srgb(0.6, 0.5, 0.3)),
        (6.0, 50.0, Color::srgb(0.6, 0.3, 0.3)),
    ] {
        spawn_slab(
            &mut commands,
            &mut meshes,
            &mut materials,
            Vec3::new(4.0, 0.2, 8.0),
            Transform::from_xyz(x, 1.0, 10.0)
                .with_rotation(Quat::from_rotation_x(-degrees.to_radians())),
            color,
            ground_layers,
        );
    }

    spawn_scatter(&mut commands, &mut meshes, &mut materials, seed.0);
    info!("Test arena spawned (seed {:#x})", seed.0);
}

fn spawn_slab(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: Vec3,
    transform: Transform,
    color: Color,
    layers: CollisionLayers,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.add(color)),
        transform,
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        layers,
    ));
}

fn spawn_scatter(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    seed: u64,
) {
    let prop_layers = CollisionLayers::new(
        GameLayer::Prop,
        [GameLayer::Ground, GameLayer::Prop, GameLayer::Player],
    );
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Prop]);

    for placement in scatter_layout(seed) {
        let mut entity = commands.spawn((
            ScatterBox,
            Mesh3d(meshes.add(Cuboid::from_size(placement.size))),
            MeshMaterial3d(materials.add(Color::srgb(0.55, 0.55, 0.6))),
            Transform::from_translation(placement.center),
            Collider::cuboid(placement.size.x, placement.size.y, placement.size.z),
        ));
        if placement.mass > 0.0 {
            entity.insert((RigidBody::Dynamic, Mass(placement.mass), prop_layers));
        } else {
            entity.insert((Ground, RigidBody::Static, ground_layers));
        }
    }
}

/// NumpadSubtract returns the player to spawn. NumpadAdd rerolls the scatter
/// and drops the player in from above.
pub(crate) fn handle_dev_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    character: Res<CharacterDef>,
    mut seed: ResMut<ArenaSeed>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scatter: Query<Entity, With<ScatterBox>>,
    mut player: Query<(&mut Transform, &mut LinearVelocity, &mut AngularVelocity), With<Player>>,
) {
    let spawn = Vec3::from_array(character.spawn_point);
    let target = if keyboard.just_pressed(KeyCode::NumpadAdd) {
        for entity in &scatter {
            commands.entity(entity).despawn();
        }
        seed.0 = rand::rng().random();
        spawn_scatter(&mut commands, &mut meshes, &mut materials, seed.0);
        info!("Scatter rerolled (seed {:#x})", seed.0);
        Vec3::new(spawn.x, REROLL_DROP_HEIGHT, spawn.z)
    } else if keyboard.just_pressed(KeyCode::NumpadSubtract) {
        spawn
    } else {
        return;
    };

    for (mut transform, mut linear, mut angular) in &mut player {
        let mut body = AvianBody {
            transform: &mut transform,
            linear: &mut linear,
            angular: &mut angular,
            mass: 0.0,
        };
        teleport(&mut body, target);
    }
}
