//! Simulation-specific error types.
//!
//! Systems propagate errors through these types rather than panicking, so a
//! lifecycle mistake (for example a missing [`crate::wind::Wind`] resource)
//! surfaces through Bevy's system error handler with a readable message.

use std::fmt;

/// Top-level error enum for the sailing simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The physics step ran before any wind state was provided.
    ///
    /// Computing forces against a made-up default wind would produce
    /// physically misleading motion, so the step refuses to run.
    WindUninitialized,

    /// Configuration value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::WindUninitialized => write!(
                f,
                "wind state is not initialised; insert a `Wind` resource before the \
                 physics step runs"
            ),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and `>= 0`.
pub fn validate_non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}
