//! Sail force model.
//!
//! A sail produces force only along its normal; the tangential (drive along
//! the sail) component is treated as negligible.  The normal magnitude is
//! `-sin(sail - wind)`, so a sail aligned or anti-aligned with the wind
//! produces nothing and a sail square to it produces the full force factor.
//!
//! The same [`force_normal`] feeds [`crate::trim`], which is why it is a free
//! function rather than a method on [`SailSpec`].

use crate::wind::WindState;
use bevy::prelude::*;

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit vector pointing at `deg` degrees counter-clockwise from +X.
#[inline]
pub fn unit_from_degrees(deg: f32) -> Vec2 {
    Vec2::from_angle(deg.to_radians())
}

/// One sail: its world orientation and its area-proportional force factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SailSpec {
    /// World orientation of the sail (degrees).
    pub orientation_deg: f32,
    /// Upper bound on the sail's force magnitude.
    pub force_factor: f32,
}

impl SailSpec {
    pub fn new(orientation_deg: f32, force_factor: f32) -> Self {
        Self {
            orientation_deg,
            force_factor,
        }
    }

    /// Force this sail produces in the given wind.
    pub fn force(&self, wind_direction_deg: f32) -> Vec2 {
        sail_force(self.orientation_deg, wind_direction_deg, self.force_factor)
    }
}

/// Decomposition of the apparent wind across a sail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SailForceComponents {
    /// `sail - wind`, wrapped to `[0, 360)`.
    pub delta_angle_deg: f32,
    /// Along-sail component, `cos(delta)`.  Not applied to the hull.
    pub tangent: f32,
    /// Normal component, `-sin(delta)`.  Negative means the sail is luffing.
    pub normal: f32,
}

/// Split the wind across a sail into tangent and normal components.
pub fn sail_force_components(sail_deg: f32, wind_direction_deg: f32) -> SailForceComponents {
    let delta_angle_deg = wrap_degrees(sail_deg - wind_direction_deg);
    let delta = delta_angle_deg.to_radians();
    SailForceComponents {
        delta_angle_deg,
        tangent: delta.cos(),
        normal: -delta.sin(),
    }
}

/// Signed normal force coefficient of a sail, in `[-1, 1]`.
#[inline]
pub fn force_normal(sail_deg: f32, wind_direction_deg: f32) -> f32 {
    sail_force_components(sail_deg, wind_direction_deg).normal
}

/// Force vector produced by a single sail.
///
/// Points along the sail normal `(cos(sail + 90°), sin(sail + 90°))`, scaled
/// by [`force_normal`] and `force_factor`.  Its magnitude never exceeds
/// `force_factor`.
pub fn sail_force(sail_deg: f32, wind_direction_deg: f32, force_factor: f32) -> Vec2 {
    let normal_dir = unit_from_degrees(sail_deg + 90.0);
    normal_dir * force_normal(sail_deg, wind_direction_deg) * force_factor
}

/// Wind pressure on hull and rigging, pushing the boat downwind regardless of
/// sail trim.
pub fn hull_wind_force(wind: &WindState, wind_body_factor: f32) -> Vec2 {
    unit_from_degrees(wind.direction_deg) * wind.strength * wind_body_factor
}

/// Sum of every sail's force plus the hull wind term.
pub fn combined_sail_force(sails: &[SailSpec], wind: &WindState, wind_body_factor: f32) -> Vec2 {
    let sails_total: Vec2 = sails
        .iter()
        .map(|sail| sail.force(wind.direction_deg))
        .sum();
    sails_total + hull_wind_force(wind, wind_body_factor)
}
