//! Control input systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`control_intent_clear_system`]: resets [`ControlIntent`].
//! 2. [`keyboard_to_intent_system`]: translates keys into `ControlIntent`.
//! 3. [`apply_control_intent_system`]: applies the intent to [`ActivePart`]
//!    and [`ControlState`].
//! 4. [`apply_control_commands_system`]: applies slider-style
//!    [`ControlCommand`] messages from a UI.
//!
//! The intent layer keeps the mapping testable: tests populate `ControlIntent`
//! directly and run only the apply step.
//!
//! | Key            | Effect                                                   |
//! |----------------|----------------------------------------------------------|
//! | `1`–`4`        | select keel / rudder / front sail / main sail            |
//! | `W` / `↑`      | raise keel one step (keel selected, on release)          |
//! | `S` / `↓`      | lower keel one step (keel selected, on release)          |
//! | `A` `D` `←` `→`| horizontal axis: rudder or sail angle                    |

use crate::control::{ActivePart, ControlState};
use bevy::prelude::*;

/// Discrete keel event for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeelStep {
    #[default]
    None,
    Raise,
    Lower,
}

/// Aggregated control input for the current frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ControlIntent {
    /// Part chosen this frame, if any.
    pub select: Option<ActivePart>,
    /// Keel event; only honoured while the keel is the active part.
    pub keel_step: KeelStep,
    /// Horizontal axis in `[-1, 1]`; drives the rudder or the sails.
    pub horizontal: f32,
}

/// Slider-style absolute control inputs from an external UI.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Keel ordinal; clamped to `0..=2`.
    SetKeel(i64),
    /// Sail tension in `[0, 10]`.
    SetSailTension(f32),
    /// Steering slider in `[-8, 8]`.
    SetSteering(f32),
}

/// Reset [`ControlIntent`] at the start of every frame.
pub fn control_intent_clear_system(mut intent: ResMut<ControlIntent>) {
    *intent = ControlIntent::default();
}

/// Translate keyboard state into [`ControlIntent`].
///
/// Part selection and keel steps fire on key release; the horizontal axis is
/// read while held.
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ControlIntent>) {
    intent.select = if keys.just_released(KeyCode::Digit1) {
        Some(ActivePart::Keel)
    } else if keys.just_released(KeyCode::Digit2) {
        Some(ActivePart::Rudder)
    } else if keys.just_released(KeyCode::Digit3) {
        Some(ActivePart::FrontSail)
    } else if keys.just_released(KeyCode::Digit4) {
        Some(ActivePart::MainSail)
    } else {
        None
    };

    if keys.just_released(KeyCode::ArrowUp) || keys.just_released(KeyCode::KeyW) {
        intent.keel_step = KeelStep::Raise;
    } else if keys.just_released(KeyCode::ArrowDown) || keys.just_released(KeyCode::KeyS) {
        intent.keel_step = KeelStep::Lower;
    }

    let mut horizontal = 0.0;
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        horizontal += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        horizontal -= 1.0;
    }
    intent.horizontal = horizontal;
}

/// Apply [`ControlIntent`] to the active part and the control state.
///
/// Both sail selections drive the shared sail angle.
pub fn apply_control_intent_system(
    intent: Res<ControlIntent>,
    mut active: ResMut<ActivePart>,
    mut controls: ResMut<ControlState>,
) {
    if let Some(part) = intent.select {
        *active = part;
        info!("{} Control", part.label());
    }

    match *active {
        ActivePart::Keel => match intent.keel_step {
            KeelStep::Raise => controls.raise_keel(),
            KeelStep::Lower => controls.lower_keel(),
            KeelStep::None => {}
        },
        ActivePart::Rudder => {
            if intent.horizontal != 0.0 {
                controls.adjust_rudder(intent.horizontal);
            }
        }
        ActivePart::FrontSail | ActivePart::MainSail => {
            if intent.horizontal != 0.0 {
                controls.adjust_sail_angle(intent.horizontal);
            }
        }
    }
}

/// Apply every pending [`ControlCommand`] in arrival order.
pub fn apply_control_commands_system(
    mut commands: MessageReader<ControlCommand>,
    mut controls: ResMut<ControlState>,
) {
    for command in commands.read() {
        match *command {
            ControlCommand::SetKeel(ordinal) => controls.set_keel_depth(ordinal),
            ControlCommand::SetSailTension(tension) => controls.set_sail_tension(tension),
            ControlCommand::SetSteering(slider) => controls.set_steering(slider),
        }
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::KeelDepth;

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(ControlIntent::default());
        app.insert_resource(ActivePart::default());
        app.insert_resource(ControlState::default());
        app.add_message::<ControlCommand>();
        app.add_systems(
            Update,
            (apply_control_intent_system, apply_control_commands_system).chain(),
        );
        app
    }

    fn run_intent(app: &mut App, intent: ControlIntent) {
        app.insert_resource(intent);
        app.update();
    }

    fn controls(app: &App) -> ControlState {
        *app.world().resource::<ControlState>()
    }

    #[test]
    fn selecting_rudder_routes_axis_to_rudder() {
        let mut app = build_test_app();
        run_intent(
            &mut app,
            ControlIntent {
                select: Some(ActivePart::Rudder),
                horizontal: 1.0,
                ..Default::default()
            },
        );
        assert_eq!(*app.world().resource::<ActivePart>(), ActivePart::Rudder);
        assert!((controls(&app).rudder_angle() - 0.1).abs() < 1e-6);
        assert_eq!(controls(&app).sail_angle(), -30.0);
    }

    #[test]
    fn either_sail_selection_moves_shared_sail_angle() {
        for part in [ActivePart::FrontSail, ActivePart::MainSail] {
            let mut app = build_test_app();
            run_intent(
                &mut app,
                ControlIntent {
                    select: Some(part),
                    horizontal: -1.0,
                    ..Default::default()
                },
            );
            assert!((controls(&app).sail_angle() + 30.1).abs() < 1e-4);
            assert_eq!(controls(&app).rudder_angle(), 0.0);
        }
    }

    #[test]
    fn keel_steps_only_apply_when_keel_is_active() {
        let mut app = build_test_app();
        run_intent(
            &mut app,
            ControlIntent {
                keel_step: KeelStep::Lower,
                ..Default::default()
            },
        );
        assert_eq!(controls(&app).keel(), KeelDepth::Halfway);

        run_intent(
            &mut app,
            ControlIntent {
                select: Some(ActivePart::Rudder),
                keel_step: KeelStep::Lower,
                ..Default::default()
            },
        );
        assert_eq!(controls(&app).keel(), KeelDepth::Halfway);
    }

    #[test]
    fn axis_on_keel_does_not_touch_rudder_or_sails() {
        let mut app = build_test_app();
        run_intent(
            &mut app,
            ControlIntent {
                horizontal: 1.0,
                ..Default::default()
            },
        );
        assert_eq!(controls(&app), ControlState::default());
    }

    #[test]
    fn slider_commands_apply_in_order() {
        let mut app = build_test_app();
        app.world_mut().write_message(ControlCommand::SetSailTension(0.0));
        app.world_mut().write_message(ControlCommand::SetSailTension(10.0));
        app.world_mut().write_message(ControlCommand::SetKeel(9));
        app.world_mut().write_message(ControlCommand::SetSteering(-2.0));
        app.update();

        let state = controls(&app);
        assert_eq!(state.sail_angle(), -80.0);
        assert_eq!(state.sail_tension(), 10.0);
        assert_eq!(state.keel(), KeelDepth::Down);
        assert_eq!(state.rudder_angle(), -20.0);
    }
}
