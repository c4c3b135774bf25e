//! Sail shape and trim classification.
//!
//! Uses the same [`force_normal`] as the force model, so a sail shown as
//! drawing is exactly a sail pushing the boat.

use crate::config::SailingConfig;
use crate::control::ControlState;
use crate::physics::{heading_degrees, Boat};
use crate::sail::{force_normal, wrap_degrees};
use crate::wind::Wind;
use bevy::prelude::*;

/// Whether a sail is producing forward or backward normal force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimState {
    /// Normal force `>= 0`.
    #[default]
    Drawing,
    /// Normal force `< 0`: the sail is backed or fluttering.
    Luffing,
}

impl TrimState {
    /// Display colour: green when drawing, red when luffing.
    pub fn color(self) -> Color {
        match self {
            TrimState::Drawing => Color::srgb(0.0, 1.0, 0.0),
            TrimState::Luffing => Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

/// Visual shape of one sail.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SailTrim {
    /// Signed curvature scale; magnitude never below the configured minimum.
    pub scale_y: f32,
    pub state: TrimState,
}

impl SailTrim {
    pub fn in_trim(&self) -> bool {
        self.state == TrimState::Drawing
    }
}

/// Compute the shape of a sail at `sail_deg` (world) in wind from `wind_deg`.
///
/// `scale_y = sign(normal) * max(|normal|, min_scale)`, with zero force
/// counted as drawing.
pub fn sail_trim(sail_deg: f32, wind_deg: f32, min_scale: f32) -> SailTrim {
    let normal = force_normal(sail_deg, wind_deg);
    let sign = if normal < 0.0 { -1.0 } else { 1.0 };
    SailTrim {
        scale_y: sign * normal.abs().max(min_scale),
        state: if normal < 0.0 {
            TrimState::Luffing
        } else {
            TrimState::Drawing
        },
    }
}

/// Latest trim of both sails, consumed by the readout and any renderer.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct SailTrims {
    pub front: SailTrim,
    pub main: SailTrim,
}

impl SailTrims {
    /// Trim both sails for the given heading and control state.
    ///
    /// Sails share the control angle, so their trims match; they are kept
    /// separate so independent sheeting only touches this function.
    pub fn compute(heading_deg: f32, controls: &ControlState, wind_deg: f32, min_scale: f32) -> Self {
        let sail_world = wrap_degrees(heading_deg + controls.sail_angle());
        Self {
            front: sail_trim(sail_world, wind_deg, min_scale),
            main: sail_trim(sail_world, wind_deg, min_scale),
        }
    }
}

/// Recompute [`SailTrims`] from the current heading, controls, and wind.
///
/// Runs after the input systems, so a sheet adjustment shows in the same
/// tick.  Skipped while the wind is missing.
pub fn sail_trim_system(
    q_boat: Query<&Transform, With<Boat>>,
    controls: Res<ControlState>,
    wind: Option<Res<Wind>>,
    config: Res<SailingConfig>,
    mut trims: ResMut<SailTrims>,
) {
    let Some(wind) = wind else {
        return;
    };
    let Ok(transform) = q_boat.single() else {
        return;
    };
    *trims = SailTrims::compute(
        heading_degrees(transform),
        &controls,
        wind.direction_deg,
        config.min_sail_scale,
    );
}
