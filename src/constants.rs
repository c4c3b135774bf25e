//! Centralised sailing physics and control constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place. [`crate::config::SailingConfig`] mirrors the runtime
//! tunable subset and uses these values as its defaults.
//!
//! ## Units
//!
//! Angles are in **degrees** throughout the public API; conversion to radians
//! happens at the trig call site. Rapier runs with `pixels_per_meter(1.0)`, so
//! lengths and forces below are in Rapier's native units.

// ── Sails ─────────────────────────────────────────────────────────────────────

/// Force factor of the front sail (jib).  Proportional to sail area.
pub const FRONT_SAIL_FORCE_FACTOR: f32 = 5.0;

/// Force factor of the main sail.  Twice the jib's area.
pub const MAIN_SAIL_FORCE_FACTOR: f32 = 10.0;

/// Scale applied to wind strength for the uncontrollable wind pressure on
/// hull and rigging.  Independent of sail trim.
pub const WIND_BODY_FACTOR: f32 = 0.01;

/// Minimum magnitude of the rendered sail curvature.
///
/// Keeps a sail visibly shaped even when its normal force is near zero.
pub const MIN_SAIL_SCALE: f32 = 0.4;

// ── Drag ──────────────────────────────────────────────────────────────────────

/// Base forward (along-heading) drag coefficient.
///
/// Rudder deflection adds up to a third of this on top.
pub const FORWARD_DRAG_BASE: f32 = 3.0;

/// Lateral drag coefficient with the keel fully retracted.
pub const LATERAL_DRAG_KEEL_UP: f32 = 10.0;

/// Lateral drag coefficient with the keel half lowered.
pub const LATERAL_DRAG_KEEL_HALFWAY: f32 = 50.0;

/// Lateral drag coefficient with the keel fully lowered.
///
/// A third of this is also the rudder's contribution at zero deflection.
pub const LATERAL_DRAG_KEEL_DOWN: f32 = 150.0;

// ── Control ranges ────────────────────────────────────────────────────────────

/// Rudder deflection limit in either direction (degrees).
pub const RUDDER_LIMIT_DEG: f32 = 80.0;

/// Sail angle relative to the hull, fully sheeted out (degrees).
pub const SAIL_ANGLE_MIN_DEG: f32 = -150.0;

/// Sail angle relative to the hull, fully sheeted in (degrees).
pub const SAIL_ANGLE_MAX_DEG: f32 = -30.0;

/// Sail angle that splits the sheet range into its two halves.
///
/// Tension maps away from `SAIL_ANGLE_MAX_DEG` when the sail sits above this
/// angle and away from `SAIL_ANGLE_MIN_DEG` otherwise.
pub const SAIL_ANGLE_MIDPOINT_DEG: f32 = -90.0;

/// Angular travel of the sail across the full tension range (degrees).
pub const SAIL_TENSION_TRAVEL_DEG: f32 = 50.0;

/// Upper bound of the sail tension slider.
pub const SAIL_TENSION_MAX: f32 = 10.0;

/// Per-frame scale applied to continuous control input.
///
/// A full axis deflection moves the rudder or sail by 0.1° per frame.
pub const CONTROL_INPUT_STEP: f32 = 0.1;

/// Degrees of rudder per unit of the steering slider (range −8..=8).
pub const STEERING_SLIDER_STEP_DEG: f32 = 10.0;

// ── Force integration ─────────────────────────────────────────────────────────

/// Scale applied to the summed sail and drag forces before they are handed to
/// Rapier.
///
/// Equal to one 60 Hz frame of a `dt × 10` factor.  Rapier integrates
/// `ExternalForce` over its own timestep, so a constant scale keeps the result
/// independent of the render frame rate.
pub const FORCE_SCALE: f32 = 10.0 / 60.0;

/// Boat mass passed to the collider (Rapier mass units).
pub const BOAT_MASS: f32 = 1.0;

/// Angular damping on the hull.
pub const ANGULAR_DRAG: f32 = 0.5;

/// Half-length of the hull collider along the heading (world units).
///
/// The force model was tuned for a hull about two units long; terminal speed
/// on a beam reach is roughly one hull length per second.
pub const HULL_HALF_LENGTH: f32 = 1.0;

/// Half-beam of the hull collider (world units).
pub const HULL_HALF_BEAM: f32 = 0.35;

// ── Steering ──────────────────────────────────────────────────────────────────

/// Distance from the centre of mass to the rudder post, behind the hull.
pub const RUDDER_ARM: f32 = 0.9;

/// Quadratic drag coefficient of the rudder blade against flow normal to it.
///
/// Higher values turn harder for the same deflection.  Above ~40 the yaw
/// response becomes twitchy at full speed.
pub const RUDDER_LIFT: f32 = 10.0;

// ── Wind ──────────────────────────────────────────────────────────────────────

/// Initial wind direction (degrees, 0 = blowing toward +X).
pub const WIND_DIRECTION_DEG: f32 = 0.0;

/// Initial wind strength.
pub const WIND_STRENGTH: f32 = 10.0;

/// Steady rotation of the wind direction (degrees per second).
///
/// Zero keeps the wind fixed.
pub const WIND_VEER_RATE_DEG: f32 = 0.0;

/// Maximum per-second random change of wind strength.
///
/// Zero disables gusting.
pub const WIND_GUST_RATE: f32 = 0.0;

/// Upper bound the gusting wind strength is clamped to.
pub const WIND_STRENGTH_MAX: f32 = 30.0;

/// Seed for the wind gust generator, so a run is reproducible.
pub const WIND_SEED: u64 = 0x5a11;

// ── Readout ───────────────────────────────────────────────────────────────────

/// Font size of the boat info HUD text.
pub const HUD_FONT_SIZE: f32 = 16.0;
