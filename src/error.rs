//! Error types.
//!
//! Only construction can fail: the stepping and query operations of an
//! engine are infallible once it exists.

use thiserror::Error;

/// Errors raised while validating or parsing a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Grid must have at least one cell per side.
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(usize),

    /// CFL number outside (0, 1].
    #[error("CFL number must lie in (0, 1], got {0}")]
    InvalidCfl(f64),

    /// Adiabatic index must exceed one.
    #[error("adiabatic index must be finite and greater than 1, got {0}")]
    InvalidGamma(f64),

    /// Reference end time must be positive.
    #[error("end time must be positive and finite, got {0}")]
    InvalidEndTime(f64),

    /// Fallback model time step or coefficient out of range.
    #[error("invalid diffusion model parameter `{name}`: {value}")]
    InvalidModelParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Uniform initial state with non-positive density or pressure.
    #[error("initial state must have positive, finite density and pressure (rho={rho}, p={p})")]
    NonPhysicalInitialState {
        /// Density of the rejected state
        rho: f64,
        /// Pressure of the rejected state
        p: f64,
    },

    /// Name that does not match any known option of the given kind.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownOption {
        /// What was being parsed (e.g. "boundary policy")
        kind: &'static str,
        /// The string that failed to parse
        value: String,
        /// Accepted spellings
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownOption {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result alias for configuration-dependent construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
