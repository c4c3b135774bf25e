//! Runtime sailing configuration loaded from `assets/sailing.toml`.
//!
//! [`SailingConfig`] is a Bevy [`Resource`] that mirrors the tunable constants
//! in [`crate::constants`].  At startup, [`load_sailing_config`] reads
//! `assets/sailing.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the constants you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SailingConfig::default()`.

use crate::constants::*;
use crate::drag::DragCoefficients;
use crate::error::{validate_non_negative, validate_positive, SimResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Default location of the TOML override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/sailing.toml";

/// Runtime-tunable sailing physics configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SailingConfig {
    // ── Sails ─────────────────────────────────────────────────────────────────
    pub front_sail_force_factor: f32,
    pub main_sail_force_factor: f32,
    pub wind_body_factor: f32,
    pub min_sail_scale: f32,

    // ── Drag ──────────────────────────────────────────────────────────────────
    pub forward_drag_base: f32,
    pub lateral_drag_keel_up: f32,
    pub lateral_drag_keel_halfway: f32,
    pub lateral_drag_keel_down: f32,

    // ── Hull / integration ────────────────────────────────────────────────────
    pub force_scale: f32,
    pub boat_mass: f32,
    pub angular_drag: f32,
    pub hull_half_length: f32,
    pub hull_half_beam: f32,

    // ── Steering ──────────────────────────────────────────────────────────────
    /// Apply the rudder yaw torque.  `false` leaves turning to drag alone.
    pub steering_torque: bool,
    pub rudder_arm: f32,
    pub rudder_lift: f32,

    // ── Wind ──────────────────────────────────────────────────────────────────
    pub wind_direction_deg: f32,
    pub wind_strength: f32,
    pub wind_veer_rate_deg: f32,
    pub wind_gust_rate: f32,
    pub wind_strength_max: f32,
    pub wind_seed: u64,

    // ── Readout ───────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for SailingConfig {
    fn default() -> Self {
        Self {
            // Sails
            front_sail_force_factor: FRONT_SAIL_FORCE_FACTOR,
            main_sail_force_factor: MAIN_SAIL_FORCE_FACTOR,
            wind_body_factor: WIND_BODY_FACTOR,
            min_sail_scale: MIN_SAIL_SCALE,
            // Drag
            forward_drag_base: FORWARD_DRAG_BASE,
            lateral_drag_keel_up: LATERAL_DRAG_KEEL_UP,
            lateral_drag_keel_halfway: LATERAL_DRAG_KEEL_HALFWAY,
            lateral_drag_keel_down: LATERAL_DRAG_KEEL_DOWN,
            // Hull / integration
            force_scale: FORCE_SCALE,
            boat_mass: BOAT_MASS,
            angular_drag: ANGULAR_DRAG,
            hull_half_length: HULL_HALF_LENGTH,
            hull_half_beam: HULL_HALF_BEAM,
            // Steering
            steering_torque: true,
            rudder_arm: RUDDER_ARM,
            rudder_lift: RUDDER_LIFT,
            // Wind
            wind_direction_deg: WIND_DIRECTION_DEG,
            wind_strength: WIND_STRENGTH,
            wind_veer_rate_deg: WIND_VEER_RATE_DEG,
            wind_gust_rate: WIND_GUST_RATE,
            wind_strength_max: WIND_STRENGTH_MAX,
            wind_seed: WIND_SEED,
            // Readout
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl SailingConfig {
    /// Drag coefficients derived from this configuration.
    pub fn drag_coefficients(&self) -> DragCoefficients {
        DragCoefficients {
            forward_base: self.forward_drag_base,
            lateral_up: self.lateral_drag_keel_up,
            lateral_halfway: self.lateral_drag_keel_halfway,
            lateral_down: self.lateral_drag_keel_down,
        }
    }

    /// Reject coefficient combinations that would make the force model
    /// meaningless (negative drag, zero mass, non-finite values).
    pub fn validate(&self) -> SimResult<()> {
        validate_non_negative("front_sail_force_factor", self.front_sail_force_factor)?;
        validate_non_negative("main_sail_force_factor", self.main_sail_force_factor)?;
        validate_non_negative("wind_body_factor", self.wind_body_factor)?;
        validate_non_negative("min_sail_scale", self.min_sail_scale)?;
        validate_non_negative("forward_drag_base", self.forward_drag_base)?;
        validate_non_negative("lateral_drag_keel_up", self.lateral_drag_keel_up)?;
        validate_non_negative("lateral_drag_keel_halfway", self.lateral_drag_keel_halfway)?;
        validate_non_negative("lateral_drag_keel_down", self.lateral_drag_keel_down)?;
        validate_positive("force_scale", self.force_scale)?;
        validate_positive("boat_mass", self.boat_mass)?;
        validate_non_negative("angular_drag", self.angular_drag)?;
        validate_positive("hull_half_length", self.hull_half_length)?;
        validate_positive("hull_half_beam", self.hull_half_beam)?;
        validate_non_negative("rudder_arm", self.rudder_arm)?;
        validate_non_negative("rudder_lift", self.rudder_lift)?;
        validate_non_negative("wind_strength", self.wind_strength)?;
        validate_non_negative("wind_gust_rate", self.wind_gust_rate)?;
        validate_non_negative("wind_strength_max", self.wind_strength_max)?;
        Ok(())
    }
}

/// Parse a TOML document into a validated [`SailingConfig`].
///
/// Missing keys keep their defaults.  Parse and validation failures are
/// returned as human-readable strings for logging.
pub fn parse_sailing_config(contents: &str) -> Result<SailingConfig, String> {
    let loaded = toml::from_str::<SailingConfig>(contents).map_err(|e| e.to_string())?;
    loaded.validate().map_err(|e| e.to_string())?;
    Ok(loaded)
}

/// Startup system: attempt to load `assets/sailing.toml` and overwrite the
/// `SailingConfig` resource with any values present in the file.
///
/// Parse or validation errors are logged but do not abort the simulation.  A
/// missing file is ignored (defaults are already in place from
/// `insert_resource`).
pub fn load_sailing_config(mut config: ResMut<SailingConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_sailing_config(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded sailing config from {CONFIG_PATH}");
            }
            Err(e) => {
                warn!("Failed to load {CONFIG_PATH}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SailingConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = parse_sailing_config("forward_drag_base = 4.5\nsteering_torque = false\n")
            .expect("partial config should parse");
        assert_eq!(config.forward_drag_base, 4.5);
        assert!(!config.steering_torque);
        assert_eq!(config.lateral_drag_keel_down, LATERAL_DRAG_KEEL_DOWN);
        assert_eq!(config.main_sail_force_factor, MAIN_SAIL_FORCE_FACTOR);
    }

    #[test]
    fn negative_drag_in_toml_is_rejected() {
        let err = parse_sailing_config("lateral_drag_keel_up = -2.0").unwrap_err();
        assert!(err.contains("lateral_drag_keel_up"), "unexpected error: {err}");
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse_sailing_config("force_scale = [").is_err());
    }

    #[test]
    fn drag_coefficients_follow_config() {
        let config = SailingConfig {
            lateral_drag_keel_halfway: 70.0,
            ..Default::default()
        };
        let drag = config.drag_coefficients();
        assert_eq!(drag.lateral_halfway, 70.0);
        assert_eq!(drag.forward_base, FORWARD_DRAG_BASE);
    }
}
