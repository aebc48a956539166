//! Slope limiters for MUSCL reconstruction.
//!
//! A limiter combines the backward and forward differences around a cell
//! into a single slope that does not create new extrema at the faces.
//!
//! # References
//! - van Leer (1979), "Towards the ultimate conservative difference scheme V"
//! - Roe (1986), "Characteristic-based schemes for the Euler equations"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::solver::PrimitiveState2D;

/// Minmod function for two arguments.
///
/// Returns 0 if the arguments have different signs (or either is zero),
/// otherwise the one with the smaller magnitude.
#[inline]
pub fn minmod(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        0.0
    } else if a > 0.0 {
        a.min(b)
    } else {
        a.max(b)
    }
}

/// Slope limiter applied per primitive component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeLimiter {
    /// Minmod: second order in smooth regions, TVD near discontinuities
    #[default]
    Minmod,
    /// Zero slope everywhere (piecewise-constant, first-order Godunov)
    #[serde(alias = "first_order")]
    FirstOrder,
}

impl SlopeLimiter {
    /// Limited scalar slope from backward and forward differences.
    #[inline]
    pub fn limit(self, backward: f64, forward: f64) -> f64 {
        match self {
            SlopeLimiter::Minmod => minmod(backward, forward),
            SlopeLimiter::FirstOrder => 0.0,
        }
    }

    /// Limited slope of every primitive component.
    #[inline]
    pub fn limit_state(
        self,
        backward: &PrimitiveState2D,
        forward: &PrimitiveState2D,
    ) -> PrimitiveState2D {
        PrimitiveState2D {
            rho: self.limit(backward.rho, forward.rho),
            u: self.limit(backward.u, forward.u),
            v: self.limit(backward.v, forward.v),
            p: self.limit(backward.p, forward.p),
        }
    }

    /// Formal spatial order of accuracy in smooth regions.
    pub fn order(self) -> usize {
        match self {
            SlopeLimiter::Minmod => 2,
            SlopeLimiter::FirstOrder => 1,
        }
    }

    /// Name for logging.
    pub fn name(self) -> &'static str {
        match self {
            SlopeLimiter::Minmod => "minmod",
            SlopeLimiter::FirstOrder => "firstorder",
        }
    }
}

impl fmt::Display for SlopeLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlopeLimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minmod" => Ok(SlopeLimiter::Minmod),
            "firstorder" | "first_order" | "first-order" | "none" => Ok(SlopeLimiter::FirstOrder),
            _ => Err(ConfigError::unknown("slope limiter", s, "minmod, firstorder")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minmod_opposite_signs() {
        assert_eq!(minmod(1.0, -2.0), 0.0);
        assert_eq!(minmod(-0.5, 0.5), 0.0);
        assert_eq!(minmod(0.0, 3.0), 0.0);
        assert_eq!(minmod(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_minmod_equal_arguments() {
        for a in [1e-8, 0.25, 1.0, 7.5, -0.3, -42.0] {
            assert_eq!(minmod(a, a), a, "minmod({a}, {a})");
        }
    }

    #[test]
    fn test_minmod_smaller_magnitude() {
        assert_eq!(minmod(1.0, 3.0), 1.0);
        assert_eq!(minmod(3.0, 1.0), 1.0);
        assert_eq!(minmod(-1.0, -3.0), -1.0);
        assert_eq!(minmod(-3.0, -1.0), -1.0);
    }

    #[test]
    fn test_limit_state() {
        let back = PrimitiveState2D::new(0.1, -1.0, 2.0, 0.0);
        let fwd = PrimitiveState2D::new(0.3, 1.0, 1.0, 0.5);
        let slope = SlopeLimiter::Minmod.limit_state(&back, &fwd);
        assert_eq!(slope, PrimitiveState2D::new(0.1, 0.0, 1.0, 0.0));

        let flat = SlopeLimiter::FirstOrder.limit_state(&back, &fwd);
        assert_eq!(flat, PrimitiveState2D::default());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Minmod".parse::<SlopeLimiter>(), Ok(SlopeLimiter::Minmod));
        assert_eq!("first-order".parse::<SlopeLimiter>(), Ok(SlopeLimiter::FirstOrder));
        assert!("superbee".parse::<SlopeLimiter>().is_err());
        assert_eq!(SlopeLimiter::FirstOrder.order(), 1);
    }
}
