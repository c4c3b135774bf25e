//! Boat control state: rudder, sails, keel, and sail tension.
//!
//! [`ControlState`] is the single owned copy of every control input.  Its
//! fields are private; the only way to change them is through the bounded
//! mutators below, so every value is always inside its range and downstream
//! force math never sees an out-of-range control.

use crate::constants::{
    CONTROL_INPUT_STEP, RUDDER_LIMIT_DEG, SAIL_ANGLE_MAX_DEG, SAIL_ANGLE_MIDPOINT_DEG,
    SAIL_ANGLE_MIN_DEG, SAIL_TENSION_MAX, SAIL_TENSION_TRAVEL_DEG, STEERING_SLIDER_STEP_DEG,
};
use bevy::prelude::*;

// ── Keel ───────────────────────────────────────────────────────────────────────

/// How far the keel is lowered into the water.
///
/// Behaves as a counter bounded to `Up..=Down`: [`KeelDepth::raise`] and
/// [`KeelDepth::lower`] saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeelDepth {
    /// Fully retracted, out of the water.
    #[default]
    Up,
    Halfway,
    /// Fully lowered.
    Down,
}

impl KeelDepth {
    pub const ALL: [KeelDepth; 3] = [KeelDepth::Up, KeelDepth::Halfway, KeelDepth::Down];

    /// Map any ordinal onto a depth, clamping out-of-range values.
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            i64::MIN..=0 => KeelDepth::Up,
            1 => KeelDepth::Halfway,
            _ => KeelDepth::Down,
        }
    }

    /// Position in `0..=2`, also the keel sprite index.
    pub fn ordinal(self) -> usize {
        match self {
            KeelDepth::Up => 0,
            KeelDepth::Halfway => 1,
            KeelDepth::Down => 2,
        }
    }

    /// One step toward `Up`; stays at `Up`.
    pub fn raise(self) -> Self {
        match self {
            KeelDepth::Up | KeelDepth::Halfway => KeelDepth::Up,
            KeelDepth::Down => KeelDepth::Halfway,
        }
    }

    /// One step toward `Down`; stays at `Down`.
    pub fn lower(self) -> Self {
        match self {
            KeelDepth::Up => KeelDepth::Halfway,
            KeelDepth::Halfway | KeelDepth::Down => KeelDepth::Down,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KeelDepth::Up => "UP",
            KeelDepth::Halfway => "HALFWAY",
            KeelDepth::Down => "DOWN",
        }
    }
}

// ── Active part selector ──────────────────────────────────────────────────────

/// Which part continuous (horizontal axis) input currently drives.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePart {
    #[default]
    Keel,
    Rudder,
    FrontSail,
    MainSail,
}

impl ActivePart {
    pub fn label(self) -> &'static str {
        match self {
            ActivePart::Keel => "Keel",
            ActivePart::Rudder => "Rudder",
            ActivePart::FrontSail => "Front Sail",
            ActivePart::MainSail => "Main Sail",
        }
    }
}

// ── Control state ─────────────────────────────────────────────────────────────

/// Current control inputs.
///
/// | Field          | Range             | Default |
/// |----------------|-------------------|---------|
/// | `rudder_angle` | `[-80, 80]` °     | `0`     |
/// | `sail_angle`   | `[-150, -30]` °   | `-30`   |
/// | `keel`         | `Up..=Down`       | `Up`    |
/// | `sail_tension` | `[0, 10]`         | `0`     |
///
/// Both sails share `sail_angle`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    rudder_angle: f32,
    sail_angle: f32,
    keel: KeelDepth,
    sail_tension: f32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            rudder_angle: 0.0,
            sail_angle: SAIL_ANGLE_MAX_DEG,
            keel: KeelDepth::Up,
            sail_tension: 0.0,
        }
    }
}

/// Clamp that maps NaN onto the lower bound instead of propagating it.
#[inline]
fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

impl ControlState {
    /// Rudder deflection relative to the hull (degrees).
    pub fn rudder_angle(&self) -> f32 {
        self.rudder_angle
    }

    /// Sail angle relative to the hull, shared by both sails (degrees).
    pub fn sail_angle(&self) -> f32 {
        self.sail_angle
    }

    pub fn keel(&self) -> KeelDepth {
        self.keel
    }

    pub fn sail_tension(&self) -> f32 {
        self.sail_tension
    }

    /// Set the keel from an external ordinal, clamping to `Up..=Down`.
    pub fn set_keel_depth(&mut self, ordinal: i64) {
        self.keel = KeelDepth::from_ordinal(ordinal);
    }

    /// Move the keel one step up.
    pub fn raise_keel(&mut self) {
        self.keel = self.keel.raise();
    }

    /// Move the keel one step down.
    pub fn lower_keel(&mut self) {
        self.keel = self.keel.lower();
    }

    /// Set sail tension and sheet both sails accordingly.
    ///
    /// The mapping depends on which half of the sheet range the sail is in:
    /// above the midpoint the sail moves out from −30°, otherwise it moves in
    /// from −150°.  The result always stays inside `[-150, -30]`.
    pub fn set_sail_tension(&mut self, tension: f32) {
        self.sail_tension = clamp_finite(tension, 0.0, SAIL_TENSION_MAX);
        let travel = SAIL_TENSION_TRAVEL_DEG * (self.sail_tension / SAIL_TENSION_MAX);
        self.sail_angle = if self.sail_angle > SAIL_ANGLE_MIDPOINT_DEG {
            SAIL_ANGLE_MAX_DEG - travel
        } else {
            SAIL_ANGLE_MIN_DEG + travel
        };
    }

    /// Nudge the rudder by `delta` axis units.
    pub fn adjust_rudder(&mut self, delta: f32) {
        self.rudder_angle = clamp_finite(
            self.rudder_angle + delta * CONTROL_INPUT_STEP,
            -RUDDER_LIMIT_DEG,
            RUDDER_LIMIT_DEG,
        );
    }

    /// Nudge both sails by `delta` axis units.
    pub fn adjust_sail_angle(&mut self, delta: f32) {
        self.sail_angle = clamp_finite(
            self.sail_angle + delta * CONTROL_INPUT_STEP,
            SAIL_ANGLE_MIN_DEG,
            SAIL_ANGLE_MAX_DEG,
        );
    }

    /// Set the rudder from a steering slider in `-8..=8`.
    pub fn set_steering(&mut self, slider: f32) {
        self.rudder_angle = clamp_finite(
            slider * STEERING_SLIDER_STEP_DEG,
            -RUDDER_LIMIT_DEG,
            RUDDER_LIMIT_DEG,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(state: &ControlState) {
        assert!((-80.0..=80.0).contains(&state.rudder_angle()));
        assert!((-150.0..=-30.0).contains(&state.sail_angle()));
        assert!((0.0..=10.0).contains(&state.sail_tension()));
    }

    #[test]
    fn defaults_are_in_range() {
        let state = ControlState::default();
        assert_in_range(&state);
        assert_eq!(state.keel(), KeelDepth::Up);
        assert_eq!(state.sail_angle(), -30.0);
    }

    #[test]
    fn rudder_converges_to_limit_and_never_exceeds_it() {
        let mut state = ControlState::default();
        for _ in 0..100 {
            state.adjust_rudder(1000.0);
            assert!(state.rudder_angle() <= 80.0);
        }
        assert_eq!(state.rudder_angle(), 80.0);
        for _ in 0..100 {
            state.adjust_rudder(-1000.0);
        }
        assert_eq!(state.rudder_angle(), -80.0);
    }

    #[test]
    fn small_rudder_input_moves_a_tenth_per_unit() {
        let mut state = ControlState::default();
        state.adjust_rudder(1.0);
        assert!((state.rudder_angle() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn sail_angle_saturates_at_both_ends() {
        let mut state = ControlState::default();
        state.adjust_sail_angle(10_000.0);
        assert_eq!(state.sail_angle(), -30.0);
        state.adjust_sail_angle(-10_000.0);
        assert_eq!(state.sail_angle(), -150.0);
    }

    #[test]
    fn tension_from_upper_half_sheets_out_from_minus_thirty() {
        let mut state = ControlState::default();
        state.set_sail_tension(0.0);
        assert_eq!(state.sail_angle(), -30.0);
        state.set_sail_tension(10.0);
        assert_eq!(state.sail_angle(), -80.0);
        // Still above −90, so the same rule applies again.
        state.set_sail_tension(5.0);
        assert_eq!(state.sail_angle(), -55.0);
    }

    #[test]
    fn tension_from_lower_half_sheets_in_from_minus_one_fifty() {
        let mut state = ControlState::default();
        state.adjust_sail_angle(-10_000.0); // −150
        state.set_sail_tension(10.0);
        assert_eq!(state.sail_angle(), -100.0);
        state.set_sail_tension(0.0);
        assert_eq!(state.sail_angle(), -150.0);
    }

    #[test]
    fn tension_is_clamped() {
        let mut state = ControlState::default();
        state.set_sail_tension(25.0);
        assert_eq!(state.sail_tension(), 10.0);
        state.set_sail_tension(-3.0);
        assert_eq!(state.sail_tension(), 0.0);
        state.set_sail_tension(f32::NAN);
        assert_in_range(&state);
    }

    #[test]
    fn keel_ordinal_clamps() {
        let mut state = ControlState::default();
        state.set_keel_depth(7);
        assert_eq!(state.keel(), KeelDepth::Down);
        state.set_keel_depth(-3);
        assert_eq!(state.keel(), KeelDepth::Up);
        state.set_keel_depth(1);
        assert_eq!(state.keel(), KeelDepth::Halfway);
    }

    #[test]
    fn keel_steps_saturate() {
        let mut state = ControlState::default();
        state.raise_keel();
        assert_eq!(state.keel(), KeelDepth::Up);
        state.lower_keel();
        state.lower_keel();
        state.lower_keel();
        assert_eq!(state.keel(), KeelDepth::Down);
        state.raise_keel();
        assert_eq!(state.keel(), KeelDepth::Halfway);
    }

    #[test]
    fn keel_ordinal_round_trips_through_all_depths() {
        for depth in KeelDepth::ALL {
            assert_eq!(KeelDepth::from_ordinal(depth.ordinal() as i64), depth);
        }
    }

    #[test]
    fn steering_slider_maps_ten_degrees_per_step() {
        let mut state = ControlState::default();
        state.set_steering(-3.0);
        assert_eq!(state.rudder_angle(), -30.0);
        state.set_steering(12.0);
        assert_eq!(state.rudder_angle(), 80.0);
    }
}
