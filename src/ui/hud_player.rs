//! UI domain: locomotion telemetry readout and speed bar.

use bevy::prelude::*;

use crate::movement::{LocomotionSnapshot, LocomotionTuning};

pub(crate) const SPEEDBAR_WIDTH: f32 = 200.0;
pub(crate) const SPEEDBAR_HEIGHT: f32 = 12.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the telemetry HUD container
#[derive(Component)]
pub struct TelemetryHud;

/// Marker for the telemetry text block
#[derive(Component)]
pub struct TelemetryText;

/// Marker for the speed bar fill element
#[derive(Component)]
pub struct SpeedBarFill;

pub(crate) fn spawn_telemetry_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            TelemetryHud,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                TelemetryText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(SPEEDBAR_WIDTH),
                        height: Val::Px(SPEEDBAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        SpeedBarFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                    ));
                });
        });
}

/// Text shown in the HUD for one snapshot.
pub fn telemetry_lines(snapshot: &LocomotionSnapshot, tuning: &LocomotionTuning) -> String {
    let [x, y, z] = snapshot.position;
    format!(
        "speed {:.2} (horizontal {:.2}, target {:.2})\n\
         grounded {} | sliding {}\n\
         tilt {:.1} / {:.0} deg\n\
         position {:.2}, {:.2}, {:.2}\n\
         clip {}",
        snapshot.speed,
        snapshot.horizontal_speed,
        snapshot.current_move_speed,
        snapshot.grounded,
        snapshot.sliding,
        snapshot.tilt_degrees,
        tuning.max_walkable_angle,
        x,
        y,
        z,
        snapshot.clip.as_deref().unwrap_or("-"),
    )
}

/// Fill fraction of the speed bar, in `[0, 1]`.
pub fn speed_fraction(speed: f32, max_velocity: f32) -> f32 {
    if max_velocity <= 0.0 || !speed.is_finite() {
        return 0.0;
    }
    (speed / max_velocity).clamp(0.0, 1.0)
}

pub(crate) fn update_telemetry_hud(
    snapshot: Res<LocomotionSnapshot>,
    tuning: Res<LocomotionTuning>,
    mut text_query: Query<&mut Text, With<TelemetryText>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<SpeedBarFill>>,
) {
    if !snapshot.is_changed() {
        return;
    }

    for mut text in &mut text_query {
        text.0 = telemetry_lines(&snapshot, &tuning);
    }

    for (mut node, mut bg_color) in &mut fill_query {
        let fraction = speed_fraction(snapshot.speed, tuning.max_velocity);
        node.width = Val::Percent(fraction * 100.0);

        // Red while sliding, amber on steep ground
        bg_color.0 = if snapshot.sliding {
            Color::srgb(0.9, 0.2, 0.2)
        } else if snapshot.tilt_degrees > tuning.steep_angle {
            Color::srgb(0.9, 0.7, 0.2)
        } else {
            Color::srgb(0.2, 0.8, 0.3)
        };
    }
}
