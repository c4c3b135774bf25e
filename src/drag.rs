//! Hydrodynamic drag model.
//!
//! Drag is split along the boat's forward and lateral axes.  Each axis has its
//! own coefficient: forward drag grows with rudder deflection, lateral drag is
//! dominated by how far the keel is lowered.  Both are signed quadratics in the
//! axis velocity, always opposing motion.

use crate::control::KeelDepth;

/// Immutable drag coefficients, built once from [`crate::config::SailingConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCoefficients {
    /// Forward drag with the rudder centred.
    pub forward_base: f32,
    /// Lateral drag per keel depth.
    pub lateral_up: f32,
    pub lateral_halfway: f32,
    pub lateral_down: f32,
}

impl DragCoefficients {
    /// Lateral base coefficient for the given keel depth.
    pub fn lateral_base(&self, keel: KeelDepth) -> f32 {
        match keel {
            KeelDepth::Up => self.lateral_up,
            KeelDepth::Halfway => self.lateral_halfway,
            KeelDepth::Down => self.lateral_down,
        }
    }

    /// `forward_base + |sin(rudder)| * forward_base / 3`.
    pub fn forward_factor(&self, rudder_deg: f32) -> f32 {
        self.forward_base + rudder_deg.to_radians().sin().abs() * self.forward_base / 3.0
    }

    /// `lateral_base(keel) + cos(rudder) * lateral_down / 3`.
    ///
    /// The rudder term is sized off the fully lowered keel regardless of the
    /// current depth.
    pub fn lateral_factor(&self, keel: KeelDepth, rudder_deg: f32) -> f32 {
        self.lateral_base(keel) + rudder_deg.to_radians().cos() * self.lateral_down / 3.0
    }
}

/// Signed quadratic drag on one axis: `-sign(v) * v² * factor`.
///
/// Zero velocity yields exactly zero.
#[inline]
pub fn quadratic_drag(velocity: f32, factor: f32) -> f32 {
    if velocity == 0.0 {
        return 0.0;
    }
    velocity * velocity * velocity.signum() * -1.0 * factor
}

/// Drag along both boat axes.
///
/// Returns `(forward_drag, lateral_drag)`.
pub fn drag_force(
    forward_velocity: f32,
    lateral_velocity: f32,
    forward_factor: f32,
    lateral_factor: f32,
) -> (f32, f32) {
    (
        quadratic_drag(forward_velocity, forward_factor),
        quadratic_drag(lateral_velocity, lateral_factor),
    )
}

/// Clamp a drag force so that, applied for `dt` to `mass`, it can at most stop
/// the axis velocity and never reverse it.
///
/// Quadratic drag at high coefficients otherwise overshoots under explicit
/// integration and makes the hull oscillate sideways.
pub fn limit_drag_to_momentum(drag: f32, velocity: f32, mass: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return drag;
    }
    let max = mass * velocity.abs() / dt;
    drag.clamp(-max, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SailingConfig;

    fn coefficients() -> DragCoefficients {
        SailingConfig::default().drag_coefficients()
    }

    #[test]
    fn forward_factor_is_base_with_centred_rudder() {
        assert_eq!(coefficients().forward_factor(0.0), 3.0);
    }

    #[test]
    fn forward_factor_grows_with_rudder_either_way() {
        let d = coefficients();
        let left = d.forward_factor(-45.0);
        let right = d.forward_factor(45.0);
        assert!(left > 3.0 && (left - right).abs() < 1e-5);
        // Max extra is a third of the base at 90°.
        assert!((d.forward_factor(90.0) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn lateral_base_is_strictly_increasing_with_depth() {
        let d = coefficients();
        assert_eq!(d.lateral_base(KeelDepth::Up), 10.0);
        assert_eq!(d.lateral_base(KeelDepth::Halfway), 50.0);
        assert_eq!(d.lateral_base(KeelDepth::Down), 150.0);
    }

    #[test]
    fn lateral_factor_is_strictly_increasing_with_depth() {
        let d = coefficients();
        let up = d.lateral_factor(KeelDepth::Up, 0.0);
        let half = d.lateral_factor(KeelDepth::Halfway, 0.0);
        let down = d.lateral_factor(KeelDepth::Down, 0.0);
        assert!(up < half && half < down, "{up} < {half} < {down}");
        // Centred rudder adds a third of the lowered-keel coefficient.
        assert!((up - 60.0).abs() < 1e-4);
        assert!((down - 200.0).abs() < 1e-4);
    }

    #[test]
    fn rudder_at_right_angle_adds_no_lateral_drag() {
        let d = coefficients();
        assert!((d.lateral_factor(KeelDepth::Halfway, 90.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn drag_opposes_velocity() {
        let (f, l) = drag_force(2.0, -3.0, 1.0, 1.0);
        assert!(f < 0.0, "positive forward velocity must give negative drag");
        assert!(l > 0.0, "negative lateral velocity must give positive drag");
        assert_eq!(f, -4.0);
        assert_eq!(l, 9.0);
    }

    #[test]
    fn zero_velocity_gives_zero_drag() {
        assert_eq!(drag_force(0.0, 0.0, 3.0, 150.0), (0.0, 0.0));
        assert_eq!(quadratic_drag(-0.0, 10.0), 0.0);
    }

    #[test]
    fn momentum_limit_caps_overshoot() {
        // v = 2, mass 1, dt 0.1: at most 20 units of force stop the body.
        assert_eq!(limit_drag_to_momentum(-800.0, 2.0, 1.0, 0.1), -20.0);
        assert_eq!(limit_drag_to_momentum(-5.0, 2.0, 1.0, 0.1), -5.0);
        assert_eq!(limit_drag_to_momentum(-5.0, 2.0, 1.0, 0.0), -5.0);
    }
}
