//! Sailing plugin: resources, system ordering, and the boat entity.

use crate::config::SailingConfig;
use crate::control::{ActivePart, ControlState};
use crate::input::{
    apply_control_commands_system, apply_control_intent_system, control_intent_clear_system,
    keyboard_to_intent_system, ControlCommand, ControlIntent,
};
use crate::physics::{boat_force_clear_system, sail_physics_system, Boat, TickForces};
use crate::readout::{boat_readout_system, BoatReadout};
use crate::trim::{sail_trim_system, SailTrims};
use crate::wind::wind_drift_system;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Per-tick phases, chained in this order inside `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SailingSet {
    /// Control input and wind update.
    Input,
    /// Sail shape from the fresh control state.
    Trim,
    /// Clear and accumulate boat forces for Rapier.
    Forces,
    /// Display summary.
    Readout,
}

/// Registers the control, trim, force, and readout systems.
///
/// Expects a [`SailingConfig`] resource.  The [`crate::wind::Wind`] resource
/// is the caller's to insert; the force step fails until it exists.
/// Keyboard input is only read when `ButtonInput<KeyCode>` is present, so the
/// plugin also runs headless.
pub struct SailingPlugin;

impl Plugin for SailingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>()
            .init_resource::<ActivePart>()
            .init_resource::<ControlIntent>()
            .init_resource::<SailTrims>()
            .init_resource::<TickForces>()
            .init_resource::<BoatReadout>()
            .add_message::<ControlCommand>()
            .configure_sets(
                Update,
                (
                    SailingSet::Input,
                    SailingSet::Trim,
                    SailingSet::Forces,
                    SailingSet::Readout,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    control_intent_clear_system,
                    keyboard_to_intent_system.run_if(resource_exists::<ButtonInput<KeyCode>>),
                    apply_control_intent_system,
                    apply_control_commands_system,
                    wind_drift_system,
                )
                    .chain()
                    .in_set(SailingSet::Input),
            )
            .add_systems(Update, sail_trim_system.in_set(SailingSet::Trim))
            .add_systems(
                Update,
                (boat_force_clear_system, sail_physics_system)
                    .chain()
                    .in_set(SailingSet::Forces),
            )
            .add_systems(Update, boat_readout_system.in_set(SailingSet::Readout));
    }
}

/// Spawn the boat at the world origin, bow toward +Y.
///
/// The hull is a box collider with fixed mass so the force scale in
/// [`SailingConfig`] means the same thing regardless of hull size.  Linear
/// damping stays at zero: all water resistance comes from the drag model.
pub fn spawn_boat(mut commands: Commands, config: Res<SailingConfig>) {
    commands.spawn((
        Boat,
        // Physics
        RigidBody::Dynamic,
        Collider::cuboid(config.hull_half_beam, config.hull_half_length),
        ColliderMassProperties::Mass(config.boat_mass),
        Velocity::zero(),
        ExternalForce::default(),
        Damping {
            linear_damping: 0.0,
            angular_damping: config.angular_drag,
        },
        // Transform / visibility
        Transform::from_translation(Vec3::ZERO),
        Visibility::default(),
    ));

    info!("Boat spawned at origin");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::KeelDepth;
    use crate::wind::Wind;

    /// Headless app with the plugin but without Rapier: forces accumulate in
    /// `ExternalForce` and nothing integrates them.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SailingConfig::default());
        app.add_plugins(SailingPlugin);
        app
    }

    fn spawn_test_boat(app: &mut App, velocity: Velocity) -> Entity {
        app.world_mut()
            .spawn((
                Boat,
                Transform::from_rotation(Quat::IDENTITY),
                velocity,
                ExternalForce::default(),
            ))
            .id()
    }

    #[test]
    fn tick_emits_force_and_readout() {
        let mut app = build_test_app();
        app.insert_resource(Wind::new(270.0, 10.0));
        let boat = spawn_test_boat(&mut app, Velocity::zero());

        app.update();

        let force = app.world().get::<ExternalForce>(boat).unwrap().force;
        assert!(force.length() > 0.0, "expected sail force, got {force:?}");
        let readout = app.world().resource::<BoatReadout>();
        assert_eq!(readout.keel_label, "UP");
        assert_eq!(readout.motion, "(0.00, 0.00) - 0.00");
    }

    #[test]
    fn forces_do_not_accumulate_across_ticks() {
        let mut app = build_test_app();
        app.insert_resource(Wind::new(270.0, 10.0));
        let boat = spawn_test_boat(&mut app, Velocity::zero());

        app.update();
        let first = app.world().get::<ExternalForce>(boat).unwrap().force;
        app.update();
        let second = app.world().get::<ExternalForce>(boat).unwrap().force;
        assert!((first - second).length() < 1e-5, "{first:?} vs {second:?}");
    }

    #[test]
    fn slider_command_reaches_trim_in_same_tick() {
        let mut app = build_test_app();
        app.insert_resource(Wind::new(0.0, 10.0));
        spawn_test_boat(&mut app, Velocity::zero());

        app.update();
        let before = *app.world().resource::<SailTrims>();
        app.world_mut().write_message(ControlCommand::SetSailTension(10.0));
        app.world_mut().write_message(ControlCommand::SetKeel(2));
        app.update();
        let after = *app.world().resource::<SailTrims>();

        // Sail moved from −30° to −80° (world 330° → 280°).
        assert_ne!(before, after);
        assert_eq!(app.world().resource::<ControlState>().keel(), KeelDepth::Down);
        assert_eq!(app.world().resource::<BoatReadout>().keel_sprite, 2);
    }

    #[test]
    fn missing_boat_skips_tick_without_error() {
        let mut app = build_test_app();
        app.insert_resource(Wind::new(0.0, 10.0));
        app.update();
        assert_eq!(*app.world().resource::<TickForces>(), TickForces::default());
    }
}
