//! Wind state and its update rule.
//!
//! [`Wind`] is the authoritative resource; the physics step takes a
//! [`WindState`] snapshot once per tick so every force in that tick sees the
//! same direction and strength.  The resource is deliberately *not* inserted
//! by [`crate::simulation::SailingPlugin`]: whoever owns the weather must
//! provide it, and the physics step fails with
//! [`SimError::WindUninitialized`] until they do.

use crate::config::SailingConfig;
use crate::error::{SimError, SimResult};
use crate::sail::wrap_degrees;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Current wind conditions.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// Direction the wind blows toward, degrees in `[0, 360)` (0 = +X).
    pub direction_deg: f32,
    /// Non-negative strength.
    pub strength: f32,
}

impl Wind {
    /// Construct a wind, wrapping the direction and clamping strength at zero.
    pub fn new(direction_deg: f32, strength: f32) -> Self {
        Self {
            direction_deg: wrap_degrees(direction_deg),
            strength: strength.max(0.0),
        }
    }

    /// Initial wind taken from configuration.
    pub fn from_config(config: &SailingConfig) -> Self {
        Self::new(config.wind_direction_deg, config.wind_strength)
    }

    /// Read-only copy for one simulation tick.
    pub fn snapshot(&self) -> WindState {
        WindState {
            direction_deg: self.direction_deg,
            strength: self.strength,
        }
    }
}

/// Per-tick wind snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindState {
    pub direction_deg: f32,
    pub strength: f32,
}

/// Resolve the wind snapshot for this tick, failing if no wind exists yet.
pub fn require_wind(wind: Option<&Wind>) -> SimResult<WindState> {
    wind.map(Wind::snapshot).ok_or(SimError::WindUninitialized)
}

/// Seeded RNG driving gusts, so a run replays identically.
#[derive(Resource)]
pub struct WindRng(pub StdRng);

impl WindRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Advance the wind by `dt` seconds.
///
/// Direction veers at a steady `veer_rate_deg` per second.  Strength takes a
/// random step of at most `gust_rate * dt`, clamped to `[0, strength_max]`.
pub fn advance_wind(
    wind: &mut Wind,
    dt: f32,
    veer_rate_deg: f32,
    gust_rate: f32,
    strength_max: f32,
    rng: &mut impl Rng,
) {
    wind.direction_deg = wrap_degrees(wind.direction_deg + veer_rate_deg * dt);
    if gust_rate > 0.0 {
        let step = rng.gen_range(-1.0..=1.0) * gust_rate * dt;
        wind.strength = (wind.strength + step).clamp(0.0, strength_max);
    }
}

/// Startup system: seed the gust generator from configuration.
pub fn setup_wind_rng(mut commands: Commands, config: Res<SailingConfig>) {
    commands.insert_resource(WindRng::seeded(config.wind_seed));
}

/// Apply the configured veer and gust rates each frame.
///
/// Does nothing when the wind has not been provided; the physics step reports
/// that case.
pub fn wind_drift_system(
    wind: Option<ResMut<Wind>>,
    rng: Option<ResMut<WindRng>>,
    time: Res<Time>,
    config: Res<SailingConfig>,
) {
    let (Some(mut wind), Some(mut rng)) = (wind, rng) else {
        return;
    };
    if config.wind_veer_rate_deg == 0.0 && config.wind_gust_rate == 0.0 {
        return;
    }
    advance_wind(
        &mut wind,
        time.delta_secs(),
        config.wind_veer_rate_deg,
        config.wind_gust_rate,
        config.wind_strength_max,
        &mut rng.0,
    );
}
