//! Debug domain: status overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;

/// Marker for status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

pub(crate) fn spawn_debug_status(mut commands: Commands) {
    commands.spawn((
        DebugStatusMessage,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.7, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_status(
    debug_state: Res<DebugState>,
    mut text_query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    if !debug_state.is_changed() {
        return;
    }
    let message = debug_state
        .status_message
        .as_ref()
        .map(|(msg, _)| msg.as_str())
        .unwrap_or_default();
    for mut text in &mut text_query {
        if text.0 != message {
            text.0 = message.to_string();
        }
    }
}
