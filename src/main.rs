use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use sailsim::config::{self, SailingConfig};
use sailsim::graphics;
use sailsim::simulation::{self, SailingPlugin, SailingSet};
use sailsim::wind::{self, Wind};

/// Provide the initial wind from configuration.
fn setup_wind(mut commands: Commands, config: Res<SailingConfig>) {
    let wind = Wind::from_config(&config);
    info!(
        "Wind {:.0}° at strength {:.1}",
        wind.direction_deg, wind.strength
    );
    commands.insert_resource(wind);
}

/// Configure Rapier physics: the boat moves on a flat water plane, so gravity
/// is disabled.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Sailing Simulation".into(),
            resolution: WindowResolution::new(1200, 680),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.05, 0.2, 0.35)))
    // Compiled defaults; load_sailing_config overwrites them from
    // assets/sailing.toml (if present) in the Startup schedule.
    .insert_resource(SailingConfig::default())
    // pixels_per_meter(1.0) keeps world units identical to the force model's
    // units; a larger value shrinks the hull's physics size and changes how
    // the fixed force scale feels.
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
    .add_plugins(SailingPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_sailing_config,
            setup_wind.after(config::load_sailing_config),
            wind::setup_wind_rng.after(config::load_sailing_config),
            simulation::spawn_boat.after(config::load_sailing_config),
            graphics::setup_camera,
            graphics::setup_boat_info_text.after(config::load_sailing_config),
            setup_physics_config,
        ),
    )
    .add_systems(
        Update,
        graphics::boat_info_text_system.after(SailingSet::Readout),
    );

    app.run();
}
