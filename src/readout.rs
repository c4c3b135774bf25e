//! Display-facing summary of the boat, refreshed every tick.
//!
//! [`BoatReadout`] is plain data: a HUD, a sprite renderer, or a test can read
//! it without knowing how it was computed.

use crate::control::ControlState;
use crate::physics::Boat;
use crate::trim::{SailTrim, SailTrims};
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

/// Everything the display collaborator needs for one frame.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct BoatReadout {
    /// `"(vx, vy) - angvel"`, two decimals each.
    pub motion: String,
    pub front_sail: SailTrim,
    pub main_sail: SailTrim,
    /// `UP`, `HALFWAY` or `DOWN`.
    pub keel_label: &'static str,
    /// Index into the three keel sprites.
    pub keel_sprite: usize,
    /// Rudder angle rounded to whole degrees.
    pub rudder: String,
    pub sail_tension: String,
}

/// Format linear and angular velocity as `"(x.xx, y.yy) - w.ww"`.
pub fn format_motion(linvel: Vec2, angvel: f32) -> String {
    format!("({:.2}, {:.2}) - {:.2}", linvel.x, linvel.y, angvel)
}

impl BoatReadout {
    pub fn build(velocity: &Velocity, controls: &ControlState, trims: &SailTrims) -> Self {
        let keel = controls.keel();
        Self {
            motion: format_motion(velocity.linvel, velocity.angvel),
            front_sail: trims.front,
            main_sail: trims.main,
            keel_label: keel.label(),
            keel_sprite: keel.ordinal(),
            rudder: format!("{:.0}", controls.rudder_angle()),
            sail_tension: format!("{}", controls.sail_tension()),
        }
    }

    /// Multi-line text for the HUD.
    pub fn to_hud_text(&self) -> String {
        format!(
            "{}\nKeel: {}\nRudder: {}\nSail tension: {}\nFront sail: {}\nMain sail: {}",
            self.motion,
            self.keel_label,
            self.rudder,
            self.sail_tension,
            trim_label(&self.front_sail),
            trim_label(&self.main_sail),
        )
    }
}

fn trim_label(trim: &SailTrim) -> String {
    let state = if trim.in_trim() { "drawing" } else { "luffing" };
    format!("{state} ({:+.2})", trim.scale_y)
}

/// Refresh [`BoatReadout`] from the boat and control state.
pub fn boat_readout_system(
    q_boat: Query<&Velocity, With<Boat>>,
    controls: Res<ControlState>,
    trims: Res<SailTrims>,
    mut readout: ResMut<BoatReadout>,
) {
    let Ok(velocity) = q_boat.single() else {
        return;
    };
    *readout = BoatReadout::build(velocity, &controls, &trims);
}
