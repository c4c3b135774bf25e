//! Per-tick force pipeline between the control state and Rapier.
//!
//! ## Pipeline (runs in order every `Update` frame, see [`crate::simulation::SailingSet`])
//!
//! 1. [`boat_force_clear_system`]: resets the boat's `ExternalForce` to zero.
//! 2. [`sail_physics_system`]: snapshots wind, controls, and the rigid body,
//!    calls [`compute_tick_forces`], and adds the result to `ExternalForce`.
//!
//! [`compute_tick_forces`] is a pure function of its inputs, so every physical
//! property of the pipeline is testable without Rapier.  The core never writes
//! `Velocity` or `Transform`; Rapier integrates the accumulated force.
//!
//! | Term           | Direction              | Magnitude                                     |
//! |----------------|------------------------|-----------------------------------------------|
//! | Sail           | projected on both axes | Σ sail normal force + hull wind term          |
//! | Forward drag   | −forward               | `v_f² · forward_factor(rudder)`               |
//! | Lateral drag   | −lateral               | `v_l² · lateral_factor(keel, rudder)`         |
//! | Steering       | yaw torque             | rudder-blade quadratic drag × arm             |

use crate::config::SailingConfig;
use crate::control::ControlState;
use crate::drag::{drag_force, limit_drag_to_momentum, quadratic_drag};
use crate::sail::{combined_sail_force, wrap_degrees, SailSpec};
use crate::wind::{require_wind, Wind, WindState};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marker for the simulated boat's rigid body.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Boat;

/// Heading of a 2D transform in degrees, `[0, 360)`.
pub fn heading_degrees(transform: &Transform) -> f32 {
    let (z, _, _) = transform.rotation.to_euler(EulerRot::ZYX);
    wrap_degrees(z.to_degrees())
}

/// Boat-local unit axes in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatAxes {
    /// +Y rotated by the heading.
    pub forward: Vec2,
    /// `forward` rotated a quarter turn counter-clockwise.
    pub lateral: Vec2,
}

impl BoatAxes {
    pub fn from_heading(heading_deg: f32) -> Self {
        let forward = Vec2::from_angle(heading_deg.to_radians()).rotate(Vec2::Y);
        Self {
            forward,
            lateral: Vec2::new(-forward.y, forward.x),
        }
    }

    /// Split a world vector into `(forward, lateral)` scalar components.
    pub fn project(&self, v: Vec2) -> (f32, f32) {
        (v.dot(self.forward), v.dot(self.lateral))
    }

    /// Rebuild a world vector from axis components.
    pub fn compose(&self, forward: f32, lateral: f32) -> Vec2 {
        self.forward * forward + self.lateral * lateral
    }
}

/// Read-only view of the rigid body for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidBodySnapshot {
    pub heading_deg: f32,
    pub linvel: Vec2,
    pub angvel: f32,
}

impl RigidBodySnapshot {
    pub fn new(transform: &Transform, velocity: &Velocity) -> Self {
        Self {
            heading_deg: heading_degrees(transform),
            linvel: velocity.linvel,
            angvel: velocity.angvel,
        }
    }
}

/// Forces emitted for one tick, already scaled for Rapier.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct TickForces {
    /// Sail and hull wind force, projected onto the boat axes.
    pub sail: Vec2,
    /// Water drag on the hull.
    pub drag: Vec2,
    /// Yaw torque from the rudder.
    pub torque: f32,
}

impl TickForces {
    pub fn total_force(&self) -> Vec2 {
        self.sail + self.drag
    }
}

/// Both sails at their world orientation: `[main, front]`.
pub fn boat_sails(heading_deg: f32, controls: &ControlState, config: &SailingConfig) -> [SailSpec; 2] {
    let world = wrap_degrees(heading_deg + controls.sail_angle());
    [
        SailSpec::new(world, config.main_sail_force_factor),
        SailSpec::new(world, config.front_sail_force_factor),
    ]
}

/// Rotational inertia of the rectangular hull about its centre.
pub fn hull_inertia(config: &SailingConfig) -> f32 {
    config.boat_mass
        * (config.hull_half_length * config.hull_half_length
            + config.hull_half_beam * config.hull_half_beam)
        / 3.0
}

/// Stern effective mass: the resistance of the rudder post to a sideways
/// push, reduced by the hull's freedom to rotate.
pub fn stern_effective_mass(config: &SailingConfig) -> f32 {
    let arm_sq = config.rudder_arm * config.rudder_arm;
    1.0 / (1.0 / config.boat_mass + arm_sq / hull_inertia(config))
}

/// Water load on the rudder blade for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RudderLoad {
    /// Rudder post relative to the centre of mass.
    pub stern: Vec2,
    /// Unit normal of the blade.
    pub normal: Vec2,
    /// Water velocity across the blade, along `normal`.
    pub normal_velocity: f32,
    /// Signed force along `normal`, unscaled.
    pub force: f32,
}

impl RudderLoad {
    /// Yaw torque of `force` applied along the blade normal at the stern.
    pub fn torque(&self, force: f32) -> f32 {
        self.stern.perp_dot(self.normal * force)
    }
}

/// Load on the rudder.
///
/// The rudder is a flat blade hinged `rudder_arm` behind the centre of mass,
/// deflected `rudder_deg` from the centreline.  Water moving across the blade
/// (the hull's linear velocity plus the stern's swing from `angvel`) pushes on
/// it with a signed quadratic force along the blade normal.  A centred rudder
/// still resists sideslip and yaw, which keeps the boat tracking straight.
pub fn rudder_load(
    axes: &BoatAxes,
    body: &RigidBodySnapshot,
    rudder_deg: f32,
    config: &SailingConfig,
) -> RudderLoad {
    let stern = -axes.forward * config.rudder_arm;
    let flow = body.linvel + stern.perp() * body.angvel;
    let blade = Vec2::from_angle(rudder_deg.to_radians()).rotate(-axes.forward);
    let normal = blade.perp();
    let normal_velocity = flow.dot(normal);
    RudderLoad {
        stern,
        normal,
        normal_velocity,
        force: quadratic_drag(normal_velocity, config.rudder_lift),
    }
}

/// Compute every force for one tick.
///
/// `dt` only bounds drag: neither hull nor rudder drag may reverse the
/// velocity it opposes within a single step.
pub fn compute_tick_forces(
    controls: &ControlState,
    wind: &WindState,
    body: &RigidBodySnapshot,
    config: &SailingConfig,
    dt: f32,
) -> TickForces {
    let axes = BoatAxes::from_heading(body.heading_deg);

    // Sails
    let sails = boat_sails(body.heading_deg, controls, config);
    let sail_total = combined_sail_force(&sails, wind, config.wind_body_factor);
    let (sail_forward, sail_lateral) = axes.project(sail_total);
    let sail = axes.compose(sail_forward, sail_lateral) * config.force_scale;

    // Hull drag
    let drag_coefficients = config.drag_coefficients();
    let rudder = controls.rudder_angle();
    let (v_forward, v_lateral) = axes.project(body.linvel);
    let (drag_forward, drag_lateral) = drag_force(
        v_forward,
        v_lateral,
        drag_coefficients.forward_factor(rudder),
        drag_coefficients.lateral_factor(controls.keel(), rudder),
    );
    let drag_forward =
        limit_drag_to_momentum(drag_forward * config.force_scale, v_forward, config.boat_mass, dt);
    let drag_lateral =
        limit_drag_to_momentum(drag_lateral * config.force_scale, v_lateral, config.boat_mass, dt);
    let drag = axes.compose(drag_forward, drag_lateral);

    // Steering
    let torque = if config.steering_torque {
        let load = rudder_load(&axes, body, rudder, config);
        let force = limit_drag_to_momentum(
            load.force * config.force_scale,
            load.normal_velocity,
            stern_effective_mass(config),
            dt,
        );
        load.torque(force)
    } else {
        0.0
    };

    TickForces { sail, drag, torque }
}

/// Clear the boat's `ExternalForce` at the start of every tick.
///
/// Rapier keeps `ExternalForce` between steps, so forces from the previous
/// tick would otherwise keep accumulating.
pub fn boat_force_clear_system(mut q: Query<&mut ExternalForce, With<Boat>>) {
    if let Ok(mut force) = q.single_mut() {
        force.force = Vec2::ZERO;
        force.torque = 0.0;
    }
}

/// Compute this tick's sail, drag, and steering forces and add them to the
/// boat's `ExternalForce`.
///
/// Fails with [`crate::error::SimError::WindUninitialized`] when no [`Wind`]
/// resource exists.  Skips the tick when there is no boat.
pub fn sail_physics_system(
    mut q: Query<(&Transform, &Velocity, &mut ExternalForce), With<Boat>>,
    controls: Res<ControlState>,
    wind: Option<Res<Wind>>,
    config: Res<SailingConfig>,
    time: Res<Time>,
    mut last: ResMut<TickForces>,
) -> Result {
    let wind = require_wind(wind.as_deref())?;
    let Ok((transform, velocity, mut external)) = q.single_mut() else {
        return Ok(());
    };

    let body = RigidBodySnapshot::new(transform, velocity);
    let forces = compute_tick_forces(&controls, &wind, &body, &config, time.delta_secs());

    external.force += forces.total_force();
    external.torque += forces.torque;
    *last = forces;
    Ok(())
}

// ── Unit tests ────────────────────────────────────────────────────────────────
