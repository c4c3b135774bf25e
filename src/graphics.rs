use crate::config::SailingConfig;
use crate::readout::BoatReadout;
use bevy::prelude::*;

/// Marker for the boat info text node.
#[derive(Component)]
pub struct BoatInfoText;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}

/// Spawn the boat info text in the top-left corner.
pub fn setup_boat_info_text(mut commands: Commands, config: Res<SailingConfig>) {
    commands.spawn((
        BoatInfoText,
        Text::new(""),
        TextFont {
            font_size: config.hud_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Copy the latest [`BoatReadout`] into the info text.
pub fn boat_info_text_system(
    readout: Res<BoatReadout>,
    mut q_text: Query<&mut Text, With<BoatInfoText>>,
) {
    if !readout.is_changed() {
        return;
    }
    for mut text in q_text.iter_mut() {
        text.0 = readout.to_hud_text();
    }
}
