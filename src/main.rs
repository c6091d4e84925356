mod animation;
mod content;
mod core;
mod debug;
mod movement;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Catwalk".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            animation::CharacterAnimationPlugin,
            debug::DebugPlugin,
            ui::UiPlugin,
        ))
        .run();
}
